use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.judge_api_url, DEFAULT_JUDGE_API_URL);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
    assert_eq!(cfg.upstream_connect_timeout, Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("JUDGE_API_URL", "https://judge.example.test/"),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
        ("UPSTREAM_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.judge_api_url, "https://judge.example.test");
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
    assert_eq!(cfg.upstream_connect_timeout, Duration::from_secs(2));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("JUDGE_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.judge_api_url, DEFAULT_JUDGE_API_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".into(), expected: "port number" });
}

#[test]
fn zero_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "UPSTREAM_TIMEOUT_SECS", .. }));
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("UPSTREAM_CONNECT_TIMEOUT_SECS", "ten")])).unwrap_err();
    assert_eq!(err.to_string(), "UPSTREAM_CONNECT_TIMEOUT_SECS=\"ten\" is not a valid positive number of seconds");
}

#[test]
fn base_url_requires_http_scheme_and_host() {
    assert_eq!(normalize_base_url("http://120.55.185.165:8000").unwrap(), "http://120.55.185.165:8000");
    assert_eq!(normalize_base_url("https://judge.test//").unwrap(), "https://judge.test");
    assert!(normalize_base_url("judge.test").is_err());
    assert!(normalize_base_url("ftp://judge.test").is_err());
    assert!(normalize_base_url("http://").is_err());
    assert!(normalize_base_url("http://judge.test?x=1").is_err());
}

#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::set_var("UPSTREAM_CONNECT_TIMEOUT_SECS", "3") };
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.upstream_connect_timeout, Duration::from_secs(3));
    unsafe { std::env::remove_var("UPSTREAM_CONNECT_TIMEOUT_SECS") };
}
