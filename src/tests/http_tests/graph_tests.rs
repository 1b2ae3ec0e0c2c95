// src/tests/http_tests/graph_tests.rs
use crate::graph::{GraphClient, GraphError};
use crate::tests::utils::task_json;
use mockito::Server;
use serde_json::json;

#[test]
fn lists_follow_next_link() {
    let mut server = Server::new();
    let next_link = format!("{}/page2", server.url());

    let first = server
        .mock("GET", "/me/todo/lists")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "value": [{ "id": "L1", "displayName": "Tasks", "wellknownListName": "defaultList" }],
                "@odata.nextLink": next_link
            })
            .to_string(),
        )
        .create();

    let second = server
        .mock("GET", "/page2")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(json!({ "value": [{ "id": "L2", "displayName": "Blog ideas" }] }).to_string())
        .create();

    let client = GraphClient::new(&server.url(), "tok".into()).unwrap();
    let lists = client.todo_lists().unwrap();

    first.assert();
    second.assert();
    let names: Vec<_> = lists.iter().map(|l| l.display_name.as_str()).collect();
    assert_eq!(names, vec!["Tasks", "Blog ideas"]);
}

#[test]
fn tasks_are_fetched_for_a_list() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/me/todo/lists/L1/tasks")
        .with_status(200)
        .with_body(
            json!({
                "value": [
                    task_json("t1", "Ship v1", "completed", "notes"),
                    task_json("t2", "Draft talk", "notStarted", "")
                ]
            })
            .to_string(),
        )
        .create();

    let client = GraphClient::new(&server.url(), "tok".into()).unwrap();
    let tasks = client.tasks("L1").unwrap();

    mock.assert();
    assert_eq!(tasks.len(), 2);
    assert!(tasks[0].is_completed());
    assert_eq!(tasks[0].content(), "notes");
}

#[test]
fn api_errors_carry_status_and_body() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/me/todo/lists")
        .with_status(401)
        .with_body(r#"{"error":{"code":"InvalidAuthenticationToken"}}"#)
        .create();

    let client = GraphClient::new(&server.url(), "expired".into()).unwrap();
    match client.todo_lists() {
        Err(GraphError::Api { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("InvalidAuthenticationToken"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[test]
fn endless_paging_is_an_error() {
    let mut server = Server::new();
    let self_link = format!("{}/me/todo/lists", server.url());

    let looping = server
        .mock("GET", "/me/todo/lists")
        .with_status(200)
        .with_body(
            json!({
                "value": [{ "id": "L1", "displayName": "Tasks" }],
                "@odata.nextLink": self_link
            })
            .to_string(),
        )
        .expect(3)
        .create();

    let client = GraphClient::new(&server.url(), "tok".into())
        .unwrap()
        .with_max_pages(3);

    match client.todo_lists() {
        Err(GraphError::TooManyPages(pages)) => assert_eq!(pages, 3),
        other => panic!("expected page limit error, got {other:?}"),
    }
    looping.assert();
}
