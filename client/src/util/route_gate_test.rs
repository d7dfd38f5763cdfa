use super::*;
use crate::net::types::SessionUser;

fn bob() -> SessionUser {
    SessionUser {
        username: "bob".to_owned(),
        access_token: "t".to_owned(),
        refresh_token: "r".to_owned(),
    }
}

fn anonymous() -> Session {
    Session::settled(None)
}

fn signed_in() -> Session {
    Session::settled(Some(bob()))
}

// =============================================================
// Path resolution
// =============================================================

#[test]
fn normalize_path_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/problems/"), "/problems");
    assert_eq!(normalize_path("/problems?page=2"), "/problems");
    assert_eq!(normalize_path("/contests#top"), "/contests");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/?next=x"), "/");
}

#[test]
fn every_route_resolves_from_its_own_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert_eq!(Route::from_path("/unknown"), None);
    assert_eq!(Route::from_path("/problems/101"), None);
    assert_eq!(Route::from_path("/PROBLEMS"), None);
}

#[test]
fn route_access_classes() {
    assert_eq!(Route::Home.access(), Access::Public);
    assert_eq!(Route::Login.access(), Access::Auth);
    assert_eq!(Route::Register.access(), Access::Auth);
    for route in [Route::Problems, Route::Contests, Route::Submissions, Route::Ide] {
        assert_eq!(route.access(), Access::Protected, "{route:?}");
    }
}

// =============================================================
// decide: loading precedence
// =============================================================

#[test]
fn loading_shows_loading_for_every_path_and_user() {
    let paths = Route::ALL.map(Route::path);
    for user in [None, Some(bob())] {
        let session = Session { user, loading: true };
        for path in paths.iter().copied().chain(["/unknown"]) {
            assert_eq!(decide(&session, path), GateDecision::ShowLoading, "{path}");
        }
    }
}

// =============================================================
// decide: settled sessions
// =============================================================

#[test]
fn anonymous_protected_redirects_to_login() {
    for path in [PROBLEMS_PATH, CONTESTS_PATH, SUBMISSIONS_PATH, IDE_PATH] {
        assert_eq!(decide(&anonymous(), path), GateDecision::Redirect(LOGIN_PATH), "{path}");
    }
}

#[test]
fn signed_in_auth_paths_redirect_home() {
    assert_eq!(decide(&signed_in(), LOGIN_PATH), GateDecision::Redirect(HOME_PATH));
    assert_eq!(decide(&signed_in(), REGISTER_PATH), GateDecision::Redirect(HOME_PATH));
}

#[test]
fn anonymous_auth_paths_render() {
    assert_eq!(decide(&anonymous(), LOGIN_PATH), GateDecision::Render(LOGIN_PATH.to_owned()));
    assert_eq!(decide(&anonymous(), "/register/"), GateDecision::Render(REGISTER_PATH.to_owned()));
}

#[test]
fn home_renders_for_everyone() {
    assert_eq!(decide(&anonymous(), "/"), GateDecision::Render("/".to_owned()));
    assert_eq!(decide(&signed_in(), "/"), GateDecision::Render("/".to_owned()));
}

#[test]
fn unknown_path_is_not_found_regardless_of_user() {
    assert_eq!(decide(&anonymous(), "/unknown"), GateDecision::NotFound);
    assert_eq!(decide(&signed_in(), "/unknown"), GateDecision::NotFound);
}

#[test]
fn decide_is_total_over_all_combinations() {
    let paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).chain(["/unknown"]).collect();
    for loading in [true, false] {
        for user in [None, Some(bob())] {
            let session = Session { user: user.clone(), loading };
            for path in &paths {
                let decision = decide(&session, path);
                let expected = if loading {
                    GateDecision::ShowLoading
                } else {
                    match Route::from_path(path) {
                        None => GateDecision::NotFound,
                        Some(route) => match (route.access(), user.is_some()) {
                            (Access::Protected, false) => GateDecision::Redirect(LOGIN_PATH),
                            (Access::Auth, true) => GateDecision::Redirect(HOME_PATH),
                            _ => GateDecision::Render(route.path().to_owned()),
                        },
                    }
                };
                assert_eq!(decision, expected, "loading={loading} user={} path={path}", user.is_some());
            }
        }
    }
}

// =============================================================
// End-to-end scenarios with the session store
// =============================================================

mod scenarios {
    use super::*;
    use crate::state::session::{SESSION_STORAGE_KEY, SessionStore};
    use crate::util::storage::{DurableStorage, MemoryStorage};

    #[test]
    fn empty_storage_redirects_problems_to_login() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        assert_eq!(store.snapshot(), Session::settled(None));
        assert_eq!(decide(store.session(), "/problems"), GateDecision::Redirect("/login"));
    }

    #[test]
    fn stored_user_redirects_login_to_home() {
        let storage = MemoryStorage::new();
        storage
            .set(SESSION_STORAGE_KEY, r#"{"username":"alice","accessToken":"t1","refreshToken":"r1"}"#)
            .unwrap();
        let mut store = SessionStore::new(storage);
        store.initialize();
        assert_eq!(decide(store.session(), "/login"), GateDecision::Redirect("/"));
    }

    #[test]
    fn login_unlocks_contests() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.initialize();
        assert_eq!(decide(store.session(), "/contests"), GateDecision::Redirect("/login"));

        store.login(bob());
        assert_eq!(decide(store.session(), "/contests"), GateDecision::Render("/contests".to_owned()));
    }

    #[test]
    fn store_before_initialize_only_shows_loading() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(decide(store.session(), "/problems"), GateDecision::ShowLoading);
    }
}

// =============================================================
// guard_decision: connectivity in front of the gate
// =============================================================

#[test]
fn guard_shows_loading_while_first_check_runs() {
    for route in Route::ALL {
        assert_eq!(
            guard_decision(Connectivity::Checking, &signed_in(), route.path()),
            GateDecision::ShowLoading
        );
    }
    assert_eq!(guard_decision(Connectivity::Checking, &anonymous(), "/nope"), GateDecision::ShowLoading);
}

#[test]
fn guard_defers_to_decide_once_checked() {
    let offline = Connectivity::Offline { attempt: 1, retry_in: std::time::Duration::from_secs(1) };
    for connectivity in [Connectivity::Online, offline] {
        for session in [Session::loading(), anonymous(), signed_in()] {
            for path in ["/", "/login", "/problems", "/ide/", "/nope"] {
                assert_eq!(guard_decision(connectivity, &session, path), decide(&session, path));
            }
        }
    }
}
