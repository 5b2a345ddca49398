//! Environment configuration parsing.

use std::collections::HashMap;

use chrono::TimeDelta;
use nse_chain_bot::config::BotConfig;
use nse_chain_bot::error::NseError;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |key| map.get(key).map(|v| (*v).to_owned())
}

#[test]
fn test_defaults() {
    let config = BotConfig::from_lookup(lookup(&[("NSE_BOT_TOKEN", "123:abc")])).unwrap();
    assert_eq!(config.telegram_token, "123:abc");
    assert_eq!(config.nse_base_url, "https://www.nseindia.com");
    assert_eq!(config.telegram_api_url, "https://api.telegram.org");
    assert_eq!(config.session_ttl_secs, 1800);
    assert_eq!(config.poll_timeout_secs, 30);
    assert_eq!(config.session_ttl().unwrap(), TimeDelta::minutes(30));
}

#[test]
fn test_overrides() {
    let config = BotConfig::from_lookup(lookup(&[
        ("NSE_BOT_TOKEN", "123:abc"),
        ("NSE_BASE_URL", "http://localhost:8080"),
        ("TELEGRAM_API_URL", "http://localhost:8081"),
        ("NSE_BOT_SESSION_TTL_SECS", " 60 "),
        ("NSE_BOT_POLL_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.nse_base_url, "http://localhost:8080");
    assert_eq!(config.telegram_api_url, "http://localhost:8081");
    assert_eq!(config.session_ttl().unwrap(), TimeDelta::seconds(60));
    assert_eq!(config.poll_timeout_secs, 5);
}

#[test]
fn test_missing_token() {
    let cases: [&[(&str, &str)]; 2] = [&[], &[("NSE_BOT_TOKEN", "  ")]];
    for pairs in cases {
        let err = BotConfig::from_lookup(lookup(pairs)).unwrap_err();
        assert!(matches!(err, NseError::Config(_)), "{err:?}");
    }
}

#[test]
fn test_bad_number() {
    let err = BotConfig::from_lookup(lookup(&[
        ("NSE_BOT_TOKEN", "123:abc"),
        ("NSE_BOT_POLL_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, NseError::Config(_)));
}

#[test]
fn test_debug_redacts_token() {
    let config = BotConfig::from_lookup(lookup(&[("NSE_BOT_TOKEN", "123:secret")])).unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("secret"));
    assert!(debug.contains("<redacted>"));
}
