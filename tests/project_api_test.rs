//! Mock API tests for projects, columns, tasks, and the system endpoints.

use std::time::Duration;

use dootask::DooTaskClient;
use dootask::types::{CreateTaskRequest, GetColumnListRequest, UpdateTaskRequest};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::Server) -> DooTaskClient {
    DooTaskClient::builder("test-token")
        .server(server.url())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

fn ok_empty() -> String {
    json!({"ret": 1, "msg": "", "data": null}).to_string()
}

#[test]
fn project_list_defaults_travel_in_the_query_string() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/project/lists")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "all".into()),
            Matcher::UrlEncoded("archived".into(), "no".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("pagesize".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "ret": 1,
                "msg": "",
                "data": {
                    "current_page": 1,
                    "data": [{"id": 3, "name": "Website", "task_num": 12}],
                    "next_page_url": null,
                    "per_page": "50",
                    "total": 1
                }
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let page = client.get_project_list(None).unwrap();
    assert_eq!(page.current_page, 1);
    assert_eq!(page.per_page, 50);
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Website");
    assert_eq!(page.data[0].task_num, 12);
    mock.assert();
}

#[test]
fn column_list_is_paginated() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/project/column/lists")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("project_id".into(), "3".into()),
            Matcher::UrlEncoded("pagesize".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "ret": 1,
                "msg": "",
                "data": {
                    "current_page": 1,
                    "data": [
                        {"id": 1, "project_id": 3, "name": "Todo"},
                        {"id": 2, "project_id": 3, "name": "Done"}
                    ],
                    "per_page": 100,
                    "total": 2
                }
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let page = client.get_column_list(GetColumnListRequest::new(3)).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[1].name, "Done");
}

#[test]
fn create_task_posts_the_record_as_a_json_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/project/task/add")
        .match_body(Matcher::PartialJson(json!({
            "project_id": 3,
            "name": "write the report",
            "owner": [7]
        })))
        .with_status(200)
        .with_body(
            json!({
                "ret": 1,
                "msg": "",
                "data": {"id": 101, "project_id": 3, "name": "write the report", "userid": 7}
            })
            .to_string(),
        )
        .create();

    let client = client_for(&server);
    let mut request = CreateTaskRequest::new(3, "write the report");
    request.owner = vec![7];
    let task = client.create_task(request).unwrap();
    assert_eq!(task.id, 101);
    assert_eq!(task.column_id, 0);
    mock.assert();
}

#[test]
fn update_task_carries_the_opaque_complete_at_value() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/project/task/update")
        .match_body(Matcher::PartialJson(json!({
            "task_id": 101,
            "complete_at": "2026-08-23 10:00:00"
        })))
        .with_status(200)
        .with_body(
            json!({"ret": 1, "msg": "", "data": {"id": 101, "complete_at": "2026-08-23 10:00:00"}})
                .to_string(),
        )
        .create();

    let client = client_for(&server);
    let request = UpdateTaskRequest {
        task_id: 101,
        complete_at: json!("2026-08-23 10:00:00"),
        ..Default::default()
    };
    let task = client.update_task(request).unwrap();
    assert_eq!(task.complete_at, "2026-08-23 10:00:00");
    mock.assert();
}

#[test]
fn archive_and_delete_use_their_default_actions() {
    let mut server = mockito::Server::new();
    let archived = server
        .mock("GET", "/api/project/task/archived")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("task_id".into(), "101".into()),
            Matcher::UrlEncoded("type".into(), "add".into()),
        ]))
        .with_status(200)
        .with_body(ok_empty())
        .create();
    let removed = server
        .mock("GET", "/api/project/task/remove")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("task_id".into(), "102".into()),
            Matcher::UrlEncoded("type".into(), "delete".into()),
        ]))
        .with_status(200)
        .with_body(ok_empty())
        .create();

    let client = client_for(&server);
    client.archive_task(101, "").unwrap();
    client.delete_task(102, "").unwrap();
    archived.assert();
    removed.assert();
}

#[test]
fn version_call_sends_the_request_scoped_header() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/system/version")
        .match_header("version", "true")
        .match_header("Token", "test-token")
        .with_status(200)
        .with_body(
            json!({"ret": 1, "msg": "", "data": {"version": "0.30.1", "device_count": 4}})
                .to_string(),
        )
        .create();

    let client = client_for(&server);
    let version = client.get_version().unwrap();
    assert_eq!(version.version, "0.30.1");
    assert_eq!(version.device_count, 4);
    mock.assert();
}

#[test]
fn system_settings_tolerate_missing_optional_fields() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/system/setting")
        .with_status(200)
        .with_body(
            json!({"ret": 1, "msg": "", "data": {"system_welcome": "hello", "reg": "open"}})
                .to_string(),
        )
        .create();

    let client = client_for(&server);
    let settings = client.get_system_settings().unwrap();
    assert_eq!(settings.system_welcome, "hello");
    assert_eq!(settings.reg.as_deref(), Some("open"));
    assert!(settings.server_timezone.is_none());
}
