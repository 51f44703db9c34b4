//! POST /query — answers a payment-support question with RAG context.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::core::app_state::AppState;
use crate::error_handler::AppResult;
use crate::routes::query::query_request::{QueryRequest, QueryResponse};

/// Handler: POST /query
///
/// ```bash
/// curl -X POST http://127.0.0.1:8000/query \
///   -H 'content-type: application/json' \
///   -d '{"query":"Why was my card payment declined?"}'
/// ```
pub async fn query(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> AppResult<Json<QueryResponse>> {
    let Json(body) = payload?;

    let outcome = state
        .support
        .process_query(body.session_id, &body.query, body.context_size)
        .await?;

    Ok(Json(QueryResponse {
        session_id: outcome.session_id,
        response: outcome.response,
    }))
}
