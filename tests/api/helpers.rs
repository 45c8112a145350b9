use itzgen::{
    client::memory::MemoryDb, config, handler::response::ApiResponse, http_server::HttpServer,
    repository::db::Repository,
};
use itzgen::telemetry::{get_subscriber, init_subscriber};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use once_cell::sync::Lazy;

pub const ADMIN_EMAIL: &str = "owner@itzgen.test";
pub const ADMIN_PASSWORD: &str = "owner-password";
pub const USER_PASSWORD: &str = "password123";

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the subscriber type, so each branch builds its own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub db: MemoryDb,
    pub repo: Repository,
    pub image_api: MockServer,
    pub client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);
    let image_api = MockServer::start().await;
    let cfg = {
        let mut cfg = config::Settings::new().expect("failed to get configuration");
        //consider the port 0, so the os will provide a free port
        cfg.server.address = "127.0.0.1:0".to_string();
        cfg.server.body_limit = 64 * 1024;
        cfg.jwt.secret = "test-secret".to_string();
        cfg.auth.bcrypt_cost = 4;
        cfg.admin.email = ADMIN_EMAIL.to_string();
        cfg.admin.password = ADMIN_PASSWORD.to_string();
        cfg.image_api.url = image_api.uri();
        cfg.image_api.key = "test-key".to_string();
        cfg.image_api.timeout_secs = 5;
        cfg
    };
    let http_server = HttpServer::build(cfg)
        .await
        .expect("failed to build http server");
    let address = format!("http://127.0.0.1:{}", http_server.port());
    let db = http_server.db();
    tokio::spawn(http_server.run());
    TestApp {
        address,
        db,
        repo: Repository::new(),
        image_api,
        client: reqwest::Client::new(),
    }
}

pub fn unique_email() -> String {
    format!("{}@test.test", Uuid::new_v4())
}

pub async fn read_data<T: DeserializeOwned + Serialize>(response: reqwest::Response) -> T {
    let bytes = response.bytes().await.unwrap();
    let res: ApiResponse<'_, T> = serde_json::from_slice(&bytes).unwrap();
    res.data.unwrap()
}

pub async fn read_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["message"].as_str().unwrap_or_default().to_string()
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("failed to execute request")
    }

    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
        body: &Value,
    ) -> reqwest::Response {
        let mut req = self.client.request(method, self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("failed to execute request")
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: &Value) -> reqwest::Response {
        self.send_json(reqwest::Method::POST, path, token, body).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: &Value) -> reqwest::Response {
        self.send_json(reqwest::Method::PUT, path, token, body).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut req = self.client.delete(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req.send().await.expect("failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post(
                "/auth/login",
                None,
                &json!({"email": email, "password": password}),
            )
            .await;
        assert_eq!(200, response.status().as_u16(), "login failed for {}", email);
        let data: Value = read_data(response).await;
        data["token"].as_str().unwrap().to_string()
    }

    /// Registers a fresh user and returns `(user id, token)`.
    pub async fn new_user(&self) -> (i64, String) {
        let email = unique_email();
        let response = self
            .post(
                "/auth/register",
                None,
                &json!({
                    "name": "Test User",
                    "email": email,
                    "password": USER_PASSWORD,
                    "confirm_password": USER_PASSWORD,
                }),
            )
            .await;
        assert_eq!(200, response.status().as_u16());
        let data: Value = read_data(response).await;
        let id = data["id"].as_i64().unwrap();
        (id, self.login(&email, USER_PASSWORD).await)
    }

    pub async fn main_admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Creates an admin with `role` through the main admin and logs in as it.
    pub async fn admin_token_with_role(&self, role: &str) -> String {
        let owner = self.main_admin_token().await;
        let email = unique_email();
        let response = self
            .post(
                "/admin/admins",
                Some(&owner),
                &json!({
                    "name": "Staff",
                    "email": email,
                    "password": "staff-password",
                    "role": role,
                }),
            )
            .await;
        assert_eq!(200, response.status().as_u16());
        self.login(&email, "staff-password").await
    }

    /// Every image api call answers with a tiny image.
    pub async fn mock_image_api_success(&self) {
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.+:predict$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [{"bytesBase64Encoded": "SU1H", "mimeType": "image/jpeg"}]
            })))
            .mount(&self.image_api)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.+:generateContent$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "UE5H"}}
                ]}}]
            })))
            .mount(&self.image_api)
            .await;
    }
}
