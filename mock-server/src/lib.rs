use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The secret WPPConnect ships with in its sample config.
pub const DEFAULT_SECRET_KEY: &str = "THISISMYSECURETOKEN";

/// PNG signature; enough for clients to see a non-JSON image body.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// A request as the mock saw it, exposed through `GET /requests`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub session: String,
    pub route: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct Registry {
    tokens: HashMap<String, String>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone)]
pub struct AppState {
    secret_key: Arc<str>,
    registry: Arc<RwLock<Registry>>,
}

pub fn app() -> Router {
    app_with_secret(DEFAULT_SECRET_KEY)
}

pub fn app_with_secret(secret_key: &str) -> Router {
    let state = AppState {
        secret_key: Arc::from(secret_key),
        registry: Arc::new(RwLock::new(Registry::default())),
    };
    Router::new()
        .route("/requests", get(list_requests))
        .route("/api/{session}/{*route}", any(dispatch))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_secret(listener: TcpListener, secret_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_secret(secret_key)).await
}

async fn list_requests(State(state): State<AppState>) -> Json<Vec<RecordedRequest>> {
    Json(state.registry.read().await.requests.clone())
}

async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    Path((session, route)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!(%session, %route, error = %e, "rejecting malformed body");
                return error(StatusCode::BAD_REQUEST, "invalid JSON body");
            }
        }
    };

    if method == Method::POST {
        if let Some(secret) = route.strip_suffix("/generate-token") {
            return generate_token(&state, &session, secret).await;
        }
    }

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut registry = state.registry.write().await;
    let expected = registry.tokens.get(&session).map(|t| format!("Bearer {t}"));
    if expected.is_none() || authorization != expected {
        debug!(%session, %route, "unauthorized");
        return error(StatusCode::UNAUTHORIZED, "Token is not present. Check your header and try again");
    }

    registry.requests.push(RecordedRequest {
        method: method.to_string(),
        session: session.clone(),
        route: route.clone(),
        authorization,
        body: body.clone(),
    });
    if route == "logout-session" {
        registry.tokens.remove(&session);
    }
    drop(registry);

    info!(%method, %session, %route, "handled");

    if route == "qrcode-session" || route.starts_with("profile-pic/") {
        return ([(header::CONTENT_TYPE, "image/png")], PNG_BYTES).into_response();
    }

    let status = if method == Method::POST {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let reply = json!({
        "status": "success",
        "session": session,
        "route": route,
        "method": method.as_str(),
        "body": body,
    });
    (status, Json(reply)).into_response()
}

async fn generate_token(state: &AppState, session: &str, secret: &str) -> Response {
    if secret != &*state.secret_key {
        warn!(%session, "generate-token with wrong secret");
        return error(StatusCode::UNAUTHORIZED, "The SECRET_KEY is incorrect");
    }
    let token = Uuid::new_v4().simple().to_string();
    state
        .registry
        .write()
        .await
        .tokens
        .insert(session.to_string(), token.clone());
    info!(%session, "issued token");
    let reply = json!({
        "status": "success",
        "session": session,
        "token": token,
        "full": format!("{session}:{token}"),
    });
    (StatusCode::CREATED, Json(reply)).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_serializes_to_json() {
        let recorded = RecordedRequest {
            method: "POST".to_string(),
            session: "s".to_string(),
            route: "send-message".to_string(),
            authorization: None,
            body: json!({"phone": "1"}),
        };
        let value = serde_json::to_value(&recorded).unwrap();
        assert_eq!(value["route"], "send-message");
        assert_eq!(value["authorization"], Value::Null);
        assert_eq!(value["body"]["phone"], "1");
    }

    #[test]
    fn error_sets_status() {
        let response = error(StatusCode::UNAUTHORIZED, "nope");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn png_bytes_are_not_json() {
        assert!(serde_json::from_slice::<Value>(PNG_BYTES).is_err());
    }
}
