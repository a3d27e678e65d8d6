//! End-to-end: real socket, real Loops client, mocked Loops API.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use samwise_leads::{LeadServer, LoopsClient, ServerConfig, ShutdownHandle};

struct Running {
    base: String,
    shutdown: ShutdownHandle,
    task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl Running {
    async fn stop(self) {
        self.shutdown.shutdown();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.task).await;
    }
}

async fn start(loops: &MockServer, static_dir: Option<std::path::PathBuf>) -> Running {
    let config = ServerConfig::new("127.0.0.1:0", "test-key")
        .with_loops_base_url(loops.uri())
        .with_static_dir(static_dir)
        .with_max_body_bytes(512);
    let client = LoopsClient::new(&config.loops_base_url, &config.loops_api_key, Duration::from_secs(5))
        .expect("client builds");
    let server = LeadServer::bind(&config, client).expect("server binds");
    let addr = server.local_addr().expect("ip listener");
    let shutdown = server.shutdown_handle();
    let task = tokio::spawn(server.run());
    Running {
        base: format!("http://{addr}"),
        shutdown,
        task,
    }
}

async fn mount_loops_ok(loops: &MockServer, expected_calls: u64) {
    Mock::given(method("PUT"))
        .and(path("/v1/contacts/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(expected_calls)
        .mount(loops)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/events/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(expected_calls)
        .mount(loops)
        .await;
}

fn lead() -> Value {
    json!({
        "email": "sam@shire.me",
        "downloadUrl": "https://github.com/o/r/releases/download/v1/app.exe",
        "applicationName": "Samwise"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn records_a_lead() {
    let loops = MockServer::start().await;
    mount_loops_ok(&loops, 1).await;
    let running = start(&loops, None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/loops", running.base))
        .json(&lead())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({"message": "Success"}));
    running.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn rejects_wrong_method_and_incomplete_body() {
    let loops = MockServer::start().await;
    mount_loops_ok(&loops, 0).await;
    let running = start(&loops, None).await;
    let http = reqwest::Client::new();

    let response = http
        .get(format!("{}/api/loops", running.base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "Method Not Allowed"})
    );

    let response = http
        .post(format!("{}/api/loops", running.base))
        .json(&json!({"email": "sam@shire.me"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "Missing required fields"})
    );

    running.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_failure_is_500() {
    let loops = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&loops)
        .await;
    let running = start(&loops, None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/loops", running.base))
        .json(&lead())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "An error occurred while processing your request"})
    );
    running.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn oversized_body_is_refused() {
    let loops = MockServer::start().await;
    mount_loops_ok(&loops, 0).await;
    let running = start(&loops, None).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/loops", running.base))
        .body("x".repeat(4096))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 413);
    running.stop().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn serves_the_built_site() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("index.html"), "<!DOCTYPE html><title>Samwise</title>").unwrap();
    let loops = MockServer::start().await;
    let running = start(&loops, Some(site.path().to_path_buf())).await;
    let http = reqwest::Client::new();

    let page = http.get(format!("{}/setup", running.base)).send().await.unwrap();
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().await.unwrap().contains("Samwise"));

    let health = http.get(format!("{}/healthz", running.base)).send().await.unwrap();
    assert_eq!(health.status().as_u16(), 200);

    running.stop().await;
}
