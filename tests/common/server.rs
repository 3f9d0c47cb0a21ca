//! Test server fixture

use qa_dashboard::backend::build_app;
use qa_dashboard::backend::store::MemoryStore;
use qa_dashboard::shared::{AppConfig, AppConfigBuilder};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Configuration used by the test server unless a test overrides it
pub fn test_config() -> AppConfigBuilder {
    AppConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .gemini_api_base("http://127.0.0.1:1")
}

/// The full application listening on 127.0.0.1 with an ephemeral port
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfigBuilder) -> Self {
        let config = config.build().expect("valid test config");
        let app = build_app(config, Arc::new(MemoryStore::new())).expect("app builds");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client.post(self.url(path)).json(body).send().await.unwrap()
    }

    pub async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client.put(self.url(path)).json(body).send().await.unwrap()
    }

    /// Registered connection count reported by `GET /`
    pub async fn connection_count(&self) -> u64 {
        let body: Value = self.get("/").await.json().await.unwrap();
        body["connections"].as_u64().unwrap()
    }

    /// Wait until the registry holds exactly `expected` connections
    pub async fn wait_for_connections(&self, expected: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let count = self.connection_count().await;
            if count == expected {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "expected {expected} connections, registry has {count}"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    /// Register a user and return the response body
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Value {
        let response = self
            .post(
                "/api/register",
                &serde_json::json!({"username": username, "email": email, "password": password}),
            )
            .await;
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }

    /// Create a question and return it
    pub async fn create_question(&self, message: &str, user_id: Option<&str>) -> Value {
        let response = self
            .post("/api/questions", &serde_json::json!({"message": message, "user_id": user_id}))
            .await;
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        body["question"].clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
