use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::{debug, info};

use crate::{
    dto::{LookupResponse, RecordRequest, RecordResponse},
    errors::ApiError,
    state::AppState,
    utils::parse_address,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ens-register", post(register_name))
        .route("/ens-sync", post(sync_record))
        .route("/ens-lookup/{address}", get(lookup_name))
}

async fn register_name(
    State(state): State<AppState>,
    body: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let Json(req) = body?;
    let request = req.into_domain()?;

    let receipt = state.register_name.execute(request).await?;
    info!(tx_hash = %receipt.tx_hash, confirmed = receipt.confirmed, "Name registration relayed");

    Ok(Json(RecordResponse {
        success: true,
        tx_hash: Some(receipt.tx_hash.to_string()),
        confirmed: Some(receipt.confirmed),
    }))
}

async fn sync_record(
    State(state): State<AppState>,
    body: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiError> {
    let Json(req) = body?;
    let request = req.into_domain()?;

    state.sync_record.execute(request).await?;

    Ok(Json(RecordResponse {
        success: true,
        tx_hash: None,
        confirmed: None,
    }))
}

async fn lookup_name(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<LookupResponse>, ApiError> {
    let address = parse_address("address", &address)?;
    let name = state.reverse_lookup.execute(address).await?;
    debug!(address = %address, found = name.is_some(), "Reverse lookup");
    Ok(Json(LookupResponse { name }))
}
