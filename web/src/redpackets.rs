//! Read-only endpoints: detail by id, creator listing, latest id.
//!
//! Failed lookups are returned as errors, never as empty results.

use axum::extract::{Path, Query, State};
use axum::Json;
use redpacket_sdk::payload::parse_red_packet_id;
use redpacket_sdk::AccountAddress;
use serde::Deserialize;

use crate::error::AppError;
use crate::responses::*;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub creator: Option<String>,
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RedPacketView>, AppError> {
    let id = parse_red_packet_id(&id)?;
    let packet = state.views().red_packet(id).await?;
    Ok(Json(RedPacketView::new(packet, &state.base_url)))
}

pub async fn latest(State(state): State<AppState>) -> Result<Json<LatestIdResponse>, AppError> {
    let red_packet_id = state.views().latest_red_packet_id().await?;
    Ok(Json(LatestIdResponse { red_packet_id }))
}

/// Packets created by `?creator=`, or by the last creator remembered locally.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<RedPacketListResponse>, AppError> {
    let creator: AccountAddress = match query.creator.filter(|c| !c.is_empty()) {
        Some(raw) => raw.parse()?,
        None => state
            .store
            .recall()
            .ok_or_else(|| AppError::BadRequest("Missing 'creator' parameter".into()))?,
    };

    let packets = state.views().creator_red_packets(creator).await?;
    let red_packets = packets
        .into_iter()
        .map(|p| RedPacketView::new(p, &state.base_url))
        .collect();

    Ok(Json(RedPacketListResponse {
        creator,
        red_packets,
    }))
}

pub async fn last_creator(State(state): State<AppState>) -> Json<LastCreatorResponse> {
    Json(LastCreatorResponse {
        creator: state.store.recall(),
    })
}
