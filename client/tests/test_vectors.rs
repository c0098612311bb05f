//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Requests are compared as parsed JSON (not raw
//! strings) to avoid false negatives from field-ordering differences, and
//! parsed todos are compared as typed values so timestamp formatting cannot
//! produce spurious mismatches.

use todo_client::{ApiError, CreateTodo, HttpMethod, HttpResponse, Todo, TodoClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Check a built request against the vector's `expected_request`.
fn assert_request(name: &str, req: &todo_client::HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(expected_body) => {
            let req_body: serde_json::Value =
                serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, expected_body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be absent"),
    }
}

/// Turn the vector's simulated response into an `HttpResponse`.
fn response_from(case: &serde_json::Value) -> HttpResponse {
    let status = case["response"]["status"].as_u64().unwrap() as u16;
    let body = match &case["response"]["body"] {
        serde_json::Value::Null => String::new(),
        value => value.to_string(),
    };
    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn expected_todo(case: &serde_json::Value) -> Todo {
    serde_json::from_value(case["expected_todo"].clone()).unwrap()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_todos();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_todos(response_from(case));
        match case.get("expected_error").and_then(|e| e.as_str()) {
            Some("http") => {
                assert!(
                    matches!(result.unwrap_err(), ApiError::HttpError { .. }),
                    "{name}: expected HttpError"
                );
            }
            Some(other) => panic!("{name}: unexpected error kind {other}"),
            None => {
                let todos: Vec<Todo> =
                    serde_json::from_value(case["expected_todos"].clone()).unwrap();
                assert_eq!(result.unwrap(), todos, "{name}: todos");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateTodo = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_todo(response_from(case));
        match case.get("expected_error").and_then(|e| e.as_str()) {
            Some("validation") => {
                let expected_msg = case["expected_message"].as_str().unwrap();
                match result.unwrap_err() {
                    ApiError::Validation(msg) => assert_eq!(msg, expected_msg, "{name}: message"),
                    other => panic!("{name}: expected Validation, got {other:?}"),
                }
            }
            Some(other) => panic!("{name}: unexpected error kind {other}"),
            None => assert_eq!(result.unwrap(), expected_todo(case), "{name}: todo"),
        }
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_test_vectors() {
    let raw = include_str!("../../test-vectors/toggle.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_str().unwrap();
        let done = case["done"].as_bool().unwrap();

        let req = c.build_toggle_todo(id, done).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_toggle_todo(response_from(case));
        match case.get("expected_error").and_then(|e| e.as_str()) {
            Some("not_found") => {
                assert!(
                    matches!(result.unwrap_err(), ApiError::NotFound),
                    "{name}: expected NotFound"
                );
            }
            Some(other) => panic!("{name}: unexpected error kind {other}"),
            None => assert_eq!(result.unwrap(), expected_todo(case), "{name}: todo"),
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["id"].as_str().unwrap();

        let req = c.build_delete_todo(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_todo(response_from(case));
        match case.get("expected_error").and_then(|e| e.as_str()) {
            Some("not_found") => {
                assert!(
                    matches!(result.unwrap_err(), ApiError::NotFound),
                    "{name}: expected NotFound"
                );
            }
            Some(other) => panic!("{name}: unexpected error kind {other}"),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
