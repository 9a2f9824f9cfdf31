use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use tracing::info;

use crate::{
    dto::{RelayRequest, RelayResponse},
    errors::RelayError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/relay", post(relay_meta_transaction))
}

async fn relay_meta_transaction(
    State(state): State<AppState>,
    body: Result<Json<RelayRequest>, JsonRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    let Json(req) = body?;
    let authorization = req.into_authorization()?;
    let sender = authorization.sender;

    let receipt = state.relay.execute(authorization).await?;
    info!(
        sender = %sender,
        tx_hash = %receipt.tx_hash,
        confirmed = receipt.confirmed,
        "Meta-transaction relayed"
    );

    Ok(Json(RelayResponse {
        tx_hash: receipt.tx_hash.to_string(),
        success: true,
        confirmed: receipt.confirmed,
    }))
}
