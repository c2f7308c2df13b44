//! Shared helpers: a seeded in-memory server driven through `oneshot`

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use stall_server::api::build_app;
use stall_server::auth::{JwtConfig, JwtService};
use stall_server::db::{DbService, seed};
use stall_server::{Config, ServerState};

pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

impl TestApp {
    /// Fresh database seeded the way a first start would be
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        seed::seed_if_empty(&db.pool, "admin", ADMIN_PASSWORD)
            .await
            .unwrap();

        let jwt = JwtService::with_config(JwtConfig {
            secret: "integration-test-secret-of-at-least-32-chars".to_string(),
            expiration_minutes: 60,
            issuer: "stall-server".to_string(),
            audience: "stall-admin".to_string(),
        });

        let mut config = Config::from_env().unwrap();
        config.environment = "development".to_string();
        config.cors_origins = vec!["*".to_string()];

        let state = ServerState::new(config, db.pool, Arc::new(jwt));
        let router = build_app(&state).with_state(state.clone());
        Self { router, state }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            bytes,
        }
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.call(Method::GET, uri, None, token).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.call(Method::POST, uri, Some(body), token).await
    }

    pub async fn patch(&self, uri: &str, body: Value, token: &str) -> TestResponse {
        self.call(Method::PATCH, uri, Some(body), Some(token)).await
    }

    /// Log in as the seeded admin, returns the bearer token
    pub async fn login(&self) -> String {
        let res = self
            .post(
                "/admin/login",
                serde_json::json!({ "username": "admin", "password": ADMIN_PASSWORD }),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        res.json()["token"].as_str().unwrap().to_string()
    }

    /// Id of a menu item by name
    pub async fn menu_item_id(&self, name: &str) -> i64 {
        let menu = self.get("/menu", None).await.json();
        menu.as_array()
            .unwrap()
            .iter()
            .find(|item| item["name"] == name)
            .and_then(|item| item["id"].as_i64())
            .unwrap()
    }

    /// Place a cash order for `full`/`half` portions of one item
    pub async fn place_cash_order(&self, menu_item_id: i64, full: i64, half: i64) -> Value {
        let res = self
            .post(
                "/order",
                serde_json::json!({
                    "customer_name": "Asha",
                    "customer_phone": "9876543210",
                    "payment_method": "cash",
                    "items": [{ "menu_item_id": menu_item_id, "full_qty": full, "half_qty": half }]
                }),
                None,
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{:?}", res.json());
        res.json()["order"].clone()
    }
}
