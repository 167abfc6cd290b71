//! Shared helpers for the delivery service tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};

use portfolio_server::config::{EmailConfig, ServerConfig};
use portfolio_server::state::AppState;

pub const TEST_ORIGIN: &str = "https://www.example.com";
pub const OPERATOR_EMAIL: &str = "hello@example.com";

/// A stub Email Gateway: records every request body and replays scripted
/// responses in order. Once the script is exhausted it answers
/// `200 {"id": "msg_<n>"}`.
#[derive(Clone)]
pub struct StubGateway {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

impl StubGateway {
    /// Spawn the stub on an ephemeral port.
    pub async fn spawn(scripted: Vec<(u16, &str)>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub gateway");
        let addr = listener.local_addr().expect("stub gateway addr");

        let stub = Self {
            url: format!("http://{addr}"),
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(
                scripted
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            )),
        };

        let router = Router::new()
            .route("/emails", post(record_send))
            .with_state(stub.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        stub
    }

    /// Every request body the stub has received, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().expect("requests lock").clone()
    }
}

async fn record_send(State(stub): State<StubGateway>, Json(body): Json<Value>) -> Response {
    let count = {
        let mut requests = stub.requests.lock().expect("requests lock");
        requests.push(body);
        requests.len()
    };

    let scripted = stub.responses.lock().expect("responses lock").pop_front();
    match scripted {
        Some((status, body)) => (
            StatusCode::from_u16(status).expect("scripted status"),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => Json(json!({ "id": format!("msg_{count}") })).into_response(),
    }
}

/// Build a test configuration pointed at the given gateway URL.
/// `api_key: None` models the unconfigured deployment.
pub fn test_config(gateway_url: &str, api_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        allowed_origin: TEST_ORIGIN.to_string(),
        email: EmailConfig {
            api_key: api_key.map(|key| SecretString::from(key.to_string())),
            api_url: gateway_url.to_string(),
            from_email: "send@example.com".to_string(),
            from_name: "Jane Operator".to_string(),
            reply_to_email: OPERATOR_EMAIL.to_string(),
            site_url: TEST_ORIGIN.to_string(),
        },
    }
}

/// Build the application router against the given gateway.
pub fn test_app(gateway_url: &str, api_key: Option<&str>) -> Router {
    let state = AppState::new(test_config(gateway_url, api_key)).expect("build state");
    portfolio_server::app(state)
}
