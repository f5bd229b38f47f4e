//! CLI integration tests against a mock fragments service.

mod common;

use serde_json::json;
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{ID_TOKEN, TestEnv, fragment_json};

fn bearer() -> String {
    format!("Bearer {}", ID_TOKEN)
}

// ============================================================================
// Session Commands
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_when_signed_out() {
    let server = MockServer::start().await;
    let env = TestEnv::new(&server);

    let stderr = env.run_failure(&["whoami"]);
    assert!(stderr.contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_then_whoami() {
    let server = MockServer::start().await;
    let env = TestEnv::new(&server);

    env.login();
    assert!(env.session_file.exists());

    let stdout = env.run_success(&["whoami"]);
    assert!(stdout.contains("User: alice"));
    assert!(stdout.contains(&env.api_url));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_blocks_fragment_commands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);

    env.login();
    env.run_success(&["logout"]);
    assert!(!env.session_file.exists());

    let stderr = env.run_failure(&["list"]);
    assert!(stderr.contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_corrupt_session_file_is_reported() {
    let server = MockServer::start().await;
    let env = TestEnv::new(&server);
    std::fs::write(&env.session_file, "garbage").unwrap();

    let stderr = env.run_failure(&["list"]);
    assert!(stderr.contains("Failed to load session"));
}

// ============================================================================
// Fragment Commands
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragments": ["frag-1", "frag-2"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["list"]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["frag-1", "frag-2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_expanded_prints_json_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments"))
        .and(query_param("expand", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragments": [fragment_json("frag-1", "text/plain", 5)]
        })))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["list", "--expand"]);
    let line: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(line["id"], "frag-1");
    assert_eq!(line["type"], "text/plain");
    assert_eq!(line["size"], 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_with_inline_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/fragments"))
        .and(header("authorization", bearer().as_str()))
        .and(header("content-type", "text/plain"))
        .and(body_bytes(b"hello".to_vec()))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("location", "http://localhost:8080/v1/fragments/frag-1")
                .set_body_json(json!({
                    "status": "ok",
                    "fragment": fragment_json("frag-1", "text/plain", 5)
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["create", "--type", "text/plain", "--data", "hello"]);
    assert!(stdout.contains("Fragment created"));
    assert!(stdout.contains("ID: frag-1"));
    assert!(stdout.contains("Size: 5"));
    assert!(stdout.contains("Location: http://localhost:8080/v1/fragments/frag-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_rejects_unsupported_type_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stderr = env.run_failure(&["create", "--type", "application/pdf", "--data", "x"]);
    assert!(stderr.contains("Unsupported fragment type"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_writes_text_to_stdout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/frag-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("# Title\n", "text/markdown"))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["get", "frag-1"]);
    assert_eq!(stdout, "# Title\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_binary_requires_output_file() {
    let server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G'];
    Mock::given(method("GET"))
        .and(path("/v1/fragments/img-1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stderr = env.run_failure(&["get", "img-1"]);
    assert!(stderr.contains("--output"));

    let out = tempfile::TempDir::new().unwrap();
    let target = out.path().join("img.png");
    env.run_success(&["get", "img-1", "--output", target.to_str().unwrap()]);
    assert_eq!(std::fs::read(&target).unwrap(), png);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_converted_markdown_to_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/md-1/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragment": fragment_json("md-1", "text/markdown", 8)
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/md-1.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<h1>Title</h1>\n", "text/html"))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["get", "md-1", "--ext", "html"]);
    assert_eq!(stdout, "<h1>Title</h1>\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_rejects_impossible_conversion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/txt-1/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragment": fragment_json("txt-1", "text/plain", 3)
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/txt-1.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stderr = env.run_failure(&["get", "txt-1", "--ext", "png"]);
    assert!(stderr.contains("cannot be converted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_info_prints_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments/frag-1/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragment": fragment_json("frag-1", "text/csv", 42)
        })))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["info", "frag-1"]);
    assert!(stdout.contains("Type: text/csv"));
    assert!(stdout.contains("Size: 42"));

    let stdout = env.run_success(&["info", "frag-1", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["ownerId"], "owner-hash");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_without_type_omits_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/fragments/frag-1"))
        .and(body_bytes(b"new body".to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragment": fragment_json("frag-1", "text/plain", 8)
        })))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["update", "frag-1", "--data", "new body"]);
    assert!(stdout.contains("Fragment updated"));
    assert!(stdout.contains("Size: 8"));

    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .unwrap();
    assert!(put.headers.get("content-type").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_missing_fragment_fails_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/fragments/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "error": { "code": 404, "message": "fragment not found" }
        })))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stderr = env.run_failure(&["delete", "gone"]);
    assert!(stderr.contains("Failed to delete gone"));
    assert!(stderr.contains("fragment not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_prints_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/fragments/frag-1"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stdout = env.run_success(&["delete", "frag-1"]);
    assert!(stdout.contains("Deleted frag-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_url_flag_overrides_environment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/fragments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "fragments": ["frag-9"]
        })))
        .mount(&server)
        .await;

    // Environment points at a closed port; the flag points at the mock.
    let unused = MockServer::start().await;
    let env = TestEnv::new(&unused);
    drop(unused);
    env.login();

    let stdout = env.run_success(&["--api-url", &server.uri(), "list"]);
    assert!(stdout.contains("frag-9"));
}

// ============================================================================
// Exit Status
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_command_failure_reports_once_and_exits_nonzero() {
    let server = MockServer::start().await;
    let env = TestEnv::new(&server);

    let output = env.run(&["list"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Not signed in").count(), 1);
    assert!(stderr.contains('✗'));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_api_url_fails_before_any_command() {
    let server = MockServer::start().await;
    let env = TestEnv::new(&server);

    let output = env.run(&["--api-url", "ftp://example.com", "whoami"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid --api-url"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_rejects_dotted_id_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let env = TestEnv::new(&server);
    env.login();

    let stderr = env.run_failure(&["get", "abc.md"]);
    assert!(stderr.contains("Invalid fragment ID"));
}
