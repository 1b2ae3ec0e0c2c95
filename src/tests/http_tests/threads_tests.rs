// src/tests/http_tests/threads_tests.rs
use crate::config::ThreadsConfig;
use crate::threads::{PostError, Poster, ThreadsPoster};
use mockito::{Matcher, Server};

fn poster(server: &Server) -> ThreadsPoster {
    ThreadsPoster::new(&ThreadsConfig {
        user_id: "u123".into(),
        access_token: "threads-token".into(),
        api_base: server.url(),
    })
    .unwrap()
}

#[test]
fn posts_in_two_steps() {
    let mut server = Server::new();

    let create = server
        .mock("POST", Matcher::Regex(r"^/u123/threads(\?.*)?$".into()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("media_type".into(), "TEXT".into()),
            Matcher::UrlEncoded("text".into(), "Ship v1\n\nrelease notes".into()),
            Matcher::UrlEncoded("access_token".into(), "threads-token".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id":"container-1"}"#)
        .create();

    let publish = server
        .mock("POST", Matcher::Regex(r"^/u123/threads_publish(\?.*)?$".into()))
        .match_query(Matcher::UrlEncoded("creation_id".into(), "container-1".into()))
        .with_status(200)
        .with_body(r#"{"id":"post-9"}"#)
        .create();

    let id = poster(&server).post("Ship v1\n\nrelease notes").unwrap();

    create.assert();
    publish.assert();
    assert_eq!(id, "post-9");
}

#[test]
fn api_failure_is_reported() {
    let mut server = Server::new();

    let _create = server
        .mock("POST", Matcher::Regex(r"^/u123/threads(\?.*)?$".into()))
        .with_status(400)
        .with_body(r#"{"error":{"message":"Invalid OAuth access token"}}"#)
        .create();

    let err = poster(&server).post("hello").unwrap_err();
    assert!(matches!(err, PostError::ApiError(ref m) if m.contains("Invalid OAuth")));
}

#[test]
fn blank_text_is_not_sent() {
    let server = Server::new();
    assert!(matches!(poster(&server).post("   "), Err(PostError::Empty)));
}
