use axum::extract::{Path, Query, Request, State};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;

use crate::actions::decode_signed_tx;
use crate::cors::cors_layer;
use crate::error::AppError;
use crate::redpackets;
use crate::responses::*;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/actions/{action}",
            get(action_metadata).post(action_execute),
        )
        .route(
            "/api/actions/{action}/submit",
            axum::routing::post(action_complete),
        )
        .route("/api/redpackets", get(redpackets::list))
        .route("/api/redpackets/latest", get(redpackets::latest))
        .route("/api/redpackets/{id}", get(redpackets::detail))
        .route("/api/creator/last", get(redpackets::last_creator))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors_layer())
        .with_state(state)
}

/// Path only: query strings stay out of the logs.
fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

async fn health() -> &'static str {
    "ok"
}

async fn action_metadata(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ActionGetResponse>, AppError> {
    let action = state.actions.get(&action)?;
    Ok(Json(action.metadata(&state, params).await?))
}

async fn action_execute(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, AppError> {
    let action = state.actions.get(&action)?;
    Ok(Json(action.execute(&state, body, params).await?))
}

async fn action_complete(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<ActionSubmitRequest>,
) -> Result<Json<ActionCompleteResponse>, AppError> {
    let action = state.actions.get(&action)?;
    let signed_txn = decode_signed_tx(&body.signed_transaction)?;
    Ok(Json(action.complete(&state, body, signed_txn, params).await?))
}
