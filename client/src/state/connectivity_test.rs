use super::*;

#[test]
fn connectivity_defaults_to_checking() {
    assert_eq!(Connectivity::default(), Connectivity::Checking);
    assert!(Connectivity::Checking.is_checking());
    assert!(!Connectivity::Checking.is_online());
}

#[test]
fn online_and_offline_predicates() {
    assert!(Connectivity::Online.is_online());
    let offline = Connectivity::Offline { attempt: 1, retry_in: Duration::from_secs(1) };
    assert!(!offline.is_online());
    assert!(!offline.is_checking());
}

#[test]
fn backoff_doubles_from_base() {
    let mut backoff = Backoff::default();
    let delays: Vec<u64> = (0..5).map(|_| backoff.next_delay().as_secs()).collect();
    assert_eq!(delays, vec![1, 2, 4, 8, 16]);
    assert_eq!(backoff.attempt(), 5);
}

#[test]
fn backoff_is_capped() {
    let mut backoff = Backoff::default();
    for _ in 0..5 {
        backoff.next_delay();
    }
    assert_eq!(backoff.next_delay(), BACKOFF_CAP);
    assert_eq!(backoff.next_delay(), BACKOFF_CAP);
}

#[test]
fn backoff_survives_huge_attempt_counts() {
    let mut backoff = Backoff::new(Duration::from_millis(100), Duration::from_secs(5));
    for _ in 0..200 {
        assert!(backoff.next_delay() <= Duration::from_secs(5));
    }
}

#[test]
fn backoff_fail_reports_attempt_and_delay() {
    let mut backoff = Backoff::default();
    assert_eq!(
        backoff.fail(),
        Connectivity::Offline { attempt: 1, retry_in: Duration::from_secs(1) }
    );
    assert_eq!(
        backoff.fail(),
        Connectivity::Offline { attempt: 2, retry_in: Duration::from_secs(2) }
    );
}
