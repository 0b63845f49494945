//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info, warn};

use noid_ai::ContentGenerator;
use noid_common::RequestId;

use crate::error::ProxyError;
use crate::protocol::{GenerateRequest, GenerateResponse, HealthResponse, RootResponse};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }
}

pub(crate) async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "NOID proxy is running. POST a conversation to /generate.".into(),
    })
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

pub(crate) async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ProxyError> {
    let request_id = RequestId::new();

    let Json(request) = body.map_err(|rejection| {
        warn!(%request_id, error = %rejection, "rejected request body");
        ProxyError::Unprocessable(rejection.body_text())
    })?;

    let turns = request.into_turns().inspect_err(|e| {
        warn!(%request_id, error = %e, "rejected request contents");
    })?;
    debug!(%request_id, turns = turns.len(), "forwarding conversation");

    match state.generator.generate(&turns).await {
        Ok(generation) => {
            info!(
                %request_id,
                input_tokens = generation.usage.input_tokens,
                output_tokens = generation.usage.output_tokens,
                "generation complete"
            );
            Ok(Json(GenerateResponse {
                text: generation.text,
            }))
        }
        Err(e) => {
            warn!(%request_id, error = %e, "upstream call failed");
            Err(e.into())
        }
    }
}
