use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{debug, instrument, warn};

use crate::{
    dto::{GatewayRequest, GatewayResponse},
    errors::ApiError,
    state::AppState,
    utils::{parse_address, parse_hex_bytes},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1", post(resolve_body))
        .route("/v1/{sender}/{data}", get(resolve_path).post(resolve_path))
}

/// EIP-3668 `GET`/`POST {url}/{sender}/{data}`, with or without a `.json`
/// suffix on the data segment.
async fn resolve_path(
    State(state): State<AppState>,
    Path((sender, data)): Path<(String, String)>,
) -> Result<Json<GatewayResponse>, ApiError> {
    let data = data.strip_suffix(".json").unwrap_or(&data);
    answer(&state, &sender, data).await
}

/// EIP-3668 `POST {url}` with a `{sender, data}` body.
async fn resolve_body(
    State(state): State<AppState>,
    body: Result<Json<GatewayRequest>, JsonRejection>,
) -> Result<Json<GatewayResponse>, ApiError> {
    let Json(req) = body?;
    answer(&state, &req.sender, &req.data).await
}

#[instrument(skip(state, data))]
async fn answer(
    state: &AppState,
    sender: &str,
    data: &str,
) -> Result<Json<GatewayResponse>, ApiError> {
    let sender = parse_address("sender", sender)?;
    let data = parse_hex_bytes("data", data)?;

    let answer = state.handle_lookup.execute(sender, data).await?;
    debug!(name = %answer.name, address = %answer.address, "Gateway answer signed");
    if !answer.record_persisted {
        warn!(
            name = %answer.name,
            address = %answer.address,
            persist_failures = state.handle_lookup.persist_failures(),
            "Gateway answer returned without a reverse-lookup record"
        );
    }

    Ok(Json(GatewayResponse {
        data: answer.encoded().to_string(),
    }))
}
