// src/tests/http_tests/auth_tests.rs
use crate::auth::{load_cached_token, save_cached_token, AuthError, CachedToken, TokenProvider};
use crate::tests::utils::graph_config;
use mockito::{Matcher, Server};
use tempfile::TempDir;

const NOW: i64 = 1_735_000_000;
const TOKEN_PATH: &str = "/tenant-id/oauth2/v2.0/token";

#[test]
fn fresh_cached_token_needs_no_request() {
    let mut server = Server::new();
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token_cache.json");
    save_cached_token(
        &cache,
        &CachedToken {
            access_token: "cached".into(),
            refresh_token: Some("r1".into()),
            expires_at: NOW + 3600,
        },
    )
    .unwrap();

    let endpoint = server.mock("POST", TOKEN_PATH).expect(0).create();

    let provider = TokenProvider::new(&graph_config(&server.url(), cache)).unwrap();
    assert_eq!(provider.access_token_at(NOW).unwrap(), "cached");
    endpoint.assert();
}

#[test]
fn expired_token_is_refreshed_and_cached() {
    let mut server = Server::new();
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token_cache.json");
    save_cached_token(
        &cache,
        &CachedToken {
            access_token: "old".into(),
            refresh_token: Some("r1".into()),
            expires_at: NOW - 10,
        },
    )
    .unwrap();

    let endpoint = server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "r1".into()),
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token_type":"Bearer","access_token":"new","expires_in":3600}"#)
        .create();

    let provider = TokenProvider::new(&graph_config(&server.url(), cache.clone())).unwrap();
    assert_eq!(provider.access_token_at(NOW).unwrap(), "new");
    endpoint.assert();

    // No refresh token came back, so the old one is kept.
    assert_eq!(
        load_cached_token(&cache).unwrap(),
        Some(CachedToken {
            access_token: "new".into(),
            refresh_token: Some("r1".into()),
            expires_at: NOW + 3600,
        })
    );
}

#[test]
fn token_endpoint_errors_surface() {
    let mut server = Server::new();
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token_cache.json");
    save_cached_token(
        &cache,
        &CachedToken {
            access_token: "old".into(),
            refresh_token: Some("revoked".into()),
            expires_at: 0,
        },
    )
    .unwrap();

    let _endpoint = server
        .mock("POST", TOKEN_PATH)
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant","error_description":"AADSTS70000: revoked"}"#)
        .create();

    let provider = TokenProvider::new(&graph_config(&server.url(), cache)).unwrap();
    match provider.access_token_at(NOW) {
        Err(AuthError::TokenEndpoint { status, error, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(error, "invalid_grant");
        }
        other => panic!("expected token endpoint error, got {other:?}"),
    }
}

#[test]
fn missing_cache_means_no_credentials() {
    let dir = TempDir::new().unwrap();
    let cfg = graph_config("http://127.0.0.1:9", dir.path().join("token_cache.json"));
    let provider = TokenProvider::new(&cfg).unwrap();

    assert!(matches!(
        provider.access_token_at(NOW),
        Err(AuthError::NoCachedCredentials(_))
    ));
}

#[test]
fn expired_token_without_refresh_means_no_credentials() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("token_cache.json");
    save_cached_token(
        &cache,
        &CachedToken {
            access_token: "old".into(),
            refresh_token: None,
            expires_at: 0,
        },
    )
    .unwrap();

    let provider = TokenProvider::new(&graph_config("http://127.0.0.1:9", cache)).unwrap();
    assert!(matches!(
        provider.access_token_at(NOW),
        Err(AuthError::NoCachedCredentials(_))
    ));
}
