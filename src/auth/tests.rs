//! Tests for the auth module

use super::*;
use std::collections::HashMap;

fn build(auth: &Authenticator) -> reqwest::Request {
    let client = reqwest::Client::new();
    let req = client.post("https://control-plane.example.com/");
    auth.apply(req).build().unwrap()
}

#[test]
fn test_no_auth() {
    let built = build(&Authenticator::new(AuthConfig::None));
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_api_key_header() {
    let auth = Authenticator::new(AuthConfig::api_key_header("X-API-Key", "test-key-123"));
    let built = build(&auth);
    assert_eq!(built.headers().get("X-API-Key").unwrap(), "test-key-123");
}

#[test]
fn test_api_key_header_with_prefix() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        location: Location::Header,
        header_name: None,
        query_param: None,
        prefix: Some("Token ".to_string()),
        value: "my-token".to_string(),
    });

    let built = build(&auth);
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Token my-token"
    );
}

#[test]
fn test_api_key_query() {
    let auth = Authenticator::new(AuthConfig::ApiKey {
        location: Location::Query,
        header_name: None,
        query_param: Some("key".to_string()),
        prefix: None,
        value: "secret".to_string(),
    });

    let built = build(&auth);
    assert_eq!(built.url().query(), Some("key=secret"));
}

#[test]
fn test_bearer() {
    let built = build(&Authenticator::new(AuthConfig::bearer("tok_abc")));
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer tok_abc"
    );
}

#[test]
fn test_basic() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    });

    let built = build(&auth);
    // base64("user:pass")
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[test]
fn test_custom_headers() {
    let mut headers = HashMap::new();
    headers.insert("X-Tenant".to_string(), "acme".to_string());
    headers.insert("X-Session".to_string(), "s1".to_string());

    let built = build(&Authenticator::new(AuthConfig::CustomHeaders { headers }));
    assert_eq!(built.headers().get("X-Tenant").unwrap(), "acme");
    assert_eq!(built.headers().get("X-Session").unwrap(), "s1");
}

#[test]
fn test_auth_config_from_yaml() {
    let config: AuthConfig = serde_yaml::from_str("type: bearer\ntoken: abc\n").unwrap();
    assert_eq!(config, AuthConfig::bearer("abc"));

    let config: AuthConfig =
        serde_yaml::from_str("type: api_key\nheader_name: X-Key\nvalue: v\n").unwrap();
    assert_eq!(config, AuthConfig::api_key_header("X-Key", "v"));

    let config: AuthConfig = serde_yaml::from_str("type: none\n").unwrap();
    assert!(config.is_none());
}

#[test]
fn test_debug_redacts_secrets() {
    let debug = format!("{:?}", AuthConfig::bearer("super-secret"));
    assert!(!debug.contains("super-secret"));

    let debug = format!(
        "{:?}",
        AuthConfig::Basic {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        }
    );
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}
