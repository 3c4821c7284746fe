//! Mock API tests for the user endpoints and the current-user cache.
//!
//! Response bodies follow the server's `{ret, msg, data}` envelope.

use std::time::Duration;

use dootask::{DooTaskClient, DooTaskError};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::Server) -> DooTaskClient {
    DooTaskClient::builder("test-token")
        .server(server.url())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

fn user_info_body() -> String {
    json!({
        "ret": 1,
        "msg": "",
        "data": {
            "userid": 7,
            "identity": ["admin"],
            "email": "amy@example.com",
            "nickname": "amy",
            "az": "ignored-by-client"
        }
    })
    .to_string()
}

#[test]
fn user_info_is_fetched_once_within_ttl() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/info")
        .match_header("Token", "test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_info_body())
        .expect(1)
        .create();

    let client = client_for(&server);
    let first = client.get_user_info().unwrap();
    let second = client.get_user_info().unwrap();

    assert_eq!(first.userid, 7);
    assert_eq!(first, second);
    assert_eq!(client.cache_size(), 1);
    mock.assert();
}

#[test]
fn user_info_refetches_after_ttl_expiry() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body(user_info_body())
        .expect(2)
        .create();

    let client = DooTaskClient::builder("test-token")
        .server(server.url())
        .cache_ttl(Duration::from_millis(40))
        .build()
        .unwrap();

    client.get_user_info().unwrap();
    std::thread::sleep(Duration::from_millis(60));
    client.get_user_info().unwrap();

    mock.assert();
}

#[test]
fn refresh_bypasses_a_live_cache_entry() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body(user_info_body())
        .expect(2)
        .create();

    let client = client_for(&server);
    client.get_user_info().unwrap();
    client.refresh_user_info().unwrap();
    // The refresh restocked the cache, so this one is served locally.
    client.get_user_info().unwrap();

    mock.assert();
}

#[test]
fn clear_cache_forces_a_refetch() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body(user_info_body())
        .expect(2)
        .create();

    let client = client_for(&server);
    client.get_user_info().unwrap();
    client.clear_cache();
    assert_eq!(client.cache_size(), 0);
    client.get_user_info().unwrap();

    mock.assert();
}

#[test]
fn identity_check_passes_and_fails_locally() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body(user_info_body())
        .expect(1)
        .create();

    let client = client_for(&server);
    let user = client.check_user_identity("admin").unwrap();
    assert_eq!(user.userid, 7);

    // Served from cache; the failure is purely local.
    let err = client.check_user_identity("owner").unwrap_err();
    assert!(matches!(err, DooTaskError::Permission(_)));
    mock.assert();
}

#[test]
fn users_basic_batches_ids_into_bracket_pairs() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/basic")
        .match_query(Matcher::Exact("userid[]=5&userid[]=6".into()))
        .with_status(200)
        .with_body(
            json!({
                "ret": 1,
                "msg": "",
                "data": [
                    {"userid": 5, "nickname": "amy", "online": true},
                    {"userid": 6, "nickname": "bob"}
                ]
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let users = client.get_users_basic(&[5, 6]).unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].online);
    assert_eq!(users[1].nickname, "bob");
    mock.assert();
}

#[test]
fn users_basic_with_empty_id_list_sends_no_parameters() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/users/basic")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(json!({"ret": 1, "msg": "", "data": []}).to_string())
        .create();

    let client = client_for(&server);
    let users = client.get_users_basic(&[]).unwrap();
    assert!(users.is_empty());
    mock.assert();
}

#[test]
fn single_user_lookup_with_no_rows_is_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/users/basic")
        .match_query(Matcher::Exact("userid[]=99".into()))
        .with_status(200)
        .with_body(json!({"ret": 1, "msg": "", "data": []}).to_string())
        .create();

    let client = client_for(&server);
    let err = client.get_user_basic(99).unwrap_err();
    assert!(matches!(err, DooTaskError::NotFound(_)));
}

#[test]
fn departments_decode_as_a_list() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/users/info/departments")
        .with_status(200)
        .with_body(
            json!({
                "ret": 1,
                "msg": "",
                "data": [{"id": 3, "name": "R&D", "owner_userid": 7}]
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let departments = client.get_user_departments().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "R&D");
    assert_eq!(departments[0].parent_id, 0);
}

#[test]
fn http_error_takes_precedence_over_envelope() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/users/info")
        .with_status(500)
        .with_body(json!({"ret": 1, "msg": "", "data": {"userid": 7}}).to_string())
        .create();

    let client = client_for(&server);
    let err = client.get_user_info().unwrap_err();
    assert_eq!(err.status(), Some(500));
    match err {
        DooTaskError::Http { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.contains("ret"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[test]
fn business_failure_surfaces_message_and_code() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body(json!({"ret": 0, "msg": "no permission"}).to_string())
        .create();

    let client = client_for(&server);
    let err = client.get_user_info().unwrap_err();
    assert_eq!(err.ret(), Some(0));
    match err {
        DooTaskError::Api { message, code } => {
            assert_eq!(message, "no permission");
            assert_eq!(code, 0);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn non_json_body_is_a_malformed_response() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/users/info")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create();

    let client = client_for(&server);
    let err = client.get_user_info().unwrap_err();
    assert!(matches!(err, DooTaskError::MalformedResponse(_)));
}
