//! Hue-style HTTP routes.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use log::debug;
use serde_json::{Map, Value, json};

use crate::changes::validate;
use crate::command::{CompiledCommand, compile};
use crate::config::Config;
use crate::errors::{SessionError, ValidationError};
use crate::resolver::resolve;
use crate::session::{ClientFactory, DeviceSession, UdpClientFactory};
use crate::status::LightStatus;

/// Shared, read-only state for all requests.
#[derive(Clone)]
pub struct AppState {
    domain: Option<Arc<str>>,
    session: DeviceSession,
}

impl AppState {
    pub fn new(domain: Option<&str>, session: DeviceSession) -> Self {
        AppState {
            domain: domain.map(Arc::from),
            session,
        }
    }

    /// State talking to real bulbs over UDP.
    pub fn from_config(config: &Config) -> Self {
        let factory: Arc<dyn ClientFactory> = Arc::new(UdpClientFactory::new(config.bulb_port));
        Self::new(config.domain(), DeviceSession::new(factory))
    }

    fn address(&self, light_id: &str) -> String {
        resolve(light_id, self.domain.as_deref())
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(
            "/api/lights/{light_id}/state",
            put(set_state).post(set_state),
        )
        .route("/api/lights/{light_id}/state/on/toggle", put(toggle_state))
        .with_state(state)
}

async fn index() -> &'static str {
    "Hi :) \n Wiz Light API"
}

async fn set_state(
    State(state): State<AppState>,
    Path(light_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let parsed = json_body(&headers, &body);
    let changes = validate(parsed.as_ref())?;
    debug!("light {} changes {:?}", light_id, changes);

    let address = state.address(&light_id);
    let status = state.session.execute(&address, &compile(&changes)).await?;
    Ok(success(&light_id, &status))
}

async fn toggle_state(
    State(state): State<AppState>,
    Path(light_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let address = state.address(&light_id);
    let status = state
        .session
        .execute(&address, &CompiledCommand::Toggle)
        .await?;
    Ok(success(&light_id, &status))
}

/// The request body as JSON, only when it is declared as JSON.
fn json_body(headers: &HeaderMap, body: &[u8]) -> Option<Value> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));
    if !is_json {
        return None;
    }
    serde_json::from_slice(body).ok()
}

fn success(light_id: &str, status: &LightStatus) -> Json<Value> {
    let mut changed = Map::new();
    changed.insert(
        format!("/lights/{light_id}/state/on"),
        Value::Bool(status.emitting()),
    );
    Json(json!({ "success": changed }))
}

/// Request failures as returned to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Session(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                SessionError::CLIENT_MESSAGE.to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
