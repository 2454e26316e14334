//! REST routes over the ledger node

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use stacks_rpc::{BroadcastResult, CallRequest, ContractIdentifier, TypedArgument};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub const GET_PROPERTY_INFO: &str = "get-property-info";
pub const GET_USER_FRACTIONS: &str = "get-user-fractions";
pub const GET_PROPERTY_REVENUE: &str = "get-property-revenue";

pub const RAW_TX_REQUIRED: &str = "rawTx (hex string) is required";

/// Optional `?sender=` override
#[derive(Debug, Default, Deserialize)]
pub struct SenderQuery {
    pub sender: Option<String>,
}

async fn read_only(
    state: &AppState,
    contract_id: &ContractIdentifier,
    function_name: &str,
    sender: String,
    arguments: Vec<TypedArgument>,
) -> ApiResult<Json<Value>> {
    let request = CallRequest {
        contract_id: contract_id.clone(),
        function_name: function_name.to_string(),
        sender,
        arguments,
    };
    Ok(Json(state.client.call_read_only(&request).await?))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "backend",
        "ts": chrono::Utc::now().timestamp_millis()
    }))
}

/// GET /api/property/:id/info
pub async fn property_info(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SenderQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Path(property_id) = path?;
    let Query(query) = query?;
    let sender = state.sender_or_default(query.sender);
    read_only(
        &state,
        &state.contracts.nft,
        GET_PROPERTY_INFO,
        sender,
        vec![TypedArgument::StringAscii(property_id)],
    )
    .await
}

/// GET /api/user/:principal/fractions
pub async fn user_fractions(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Value>> {
    let Path(principal) = path?;
    read_only(
        &state,
        &state.contracts.nft,
        GET_USER_FRACTIONS,
        principal.clone(),
        vec![TypedArgument::Principal(principal)],
    )
    .await
}

/// GET /api/property/:id/revenue
pub async fn property_revenue(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SenderQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Path(property_id) = path?;
    let Query(query) = query?;
    let sender = state.sender_or_default(query.sender);
    read_only(
        &state,
        &state.contracts.revenue,
        GET_PROPERTY_REVENUE,
        sender,
        vec![TypedArgument::StringAscii(property_id)],
    )
    .await
}

/// Pull a non-empty string `rawTx` out of the request body
pub fn raw_tx_from_body(body: Option<&Value>) -> ApiResult<String> {
    body.and_then(|b| b.get("rawTx"))
        .and_then(Value::as_str)
        .filter(|raw| !raw.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Validation(RAW_TX_REQUIRED.to_string()))
}

/// POST /api/tx/broadcast
pub async fn broadcast(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> ApiResult<Json<BroadcastResult>> {
    let raw_tx = raw_tx_from_body(payload.as_ref().map(|Json(body)| body))?;
    Ok(Json(state.client.broadcast_transaction(&raw_tx).await?))
}
