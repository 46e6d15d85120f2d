use async_trait::async_trait;
use rand::seq::SliceRandom;
use redpacket_sdk::units::format_octas;
use redpacket_sdk::{payload, ClaimRequest, RedPacketInfo, TransactionFlow};
use std::collections::HashMap;

use super::{get_param, require_password, Action};
use crate::consts::*;
use crate::error::AppError;
use crate::responses::*;
use crate::state::AppState;
use crate::wallet::RelayWallet;

pub struct ClaimAction;

fn describe(info: &RedPacketInfo) -> String {
    format!(
        "{} APT red packet: {}/{} claimed, {} APT remaining",
        format_octas(info.total_amount),
        info.claimed_count(),
        info.recipient_count,
        format_octas(info.remaining_amount)
    )
}

/// Look up the packet and build the claim request; the creator comes from chain, not the caller.
async fn claim_request(
    state: &AppState,
    params: &HashMap<String, String>,
    password: Option<String>,
) -> Result<ClaimRequest, AppError> {
    let id: u64 = get_param(params, "id")?;
    let password = require_password(password)?;

    let info = state.views().red_packet_info(id).await?;
    if info.is_exhausted() {
        return Err(AppError::BadRequest("Red packet is fully claimed".into()));
    }

    Ok(ClaimRequest {
        creator: info.creator,
        red_packet_id: id.to_string(),
        password,
    })
}

#[async_trait]
impl Action for ClaimAction {
    fn path(&self) -> &'static str {
        "claim"
    }

    async fn metadata(
        &self,
        state: &AppState,
        params: HashMap<String, String>,
    ) -> Result<ActionGetResponse, AppError> {
        let id: u64 = get_param(&params, "id")?;
        let info = state.views().red_packet_info(id).await?;
        let description = describe(&info);
        let title = format!("{CLAIM_TITLE} #{id}");

        if info.is_exhausted() {
            return Ok(
                ActionGetResponse::new(ICON_URL, &title, &description, "Fully Claimed")
                    .with_error("This red packet has been fully claimed"),
            );
        }

        let phrase = LUCKY_PHRASES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();

        Ok(
            ActionGetResponse::new(ICON_URL, &title, &format!("{phrase}\n{description}"), "Claim")
                .with_links(vec![LinkedAction {
                    href: format!("/api/actions/claim?id={id}"),
                    label: "Claim".into(),
                    parameters: Some(vec![ActionParameter::password(
                        "password",
                        "Enter the password to claim",
                    )]),
                }]),
        )
    }

    async fn execute(
        &self,
        state: &AppState,
        body: ActionPostRequest,
        params: HashMap<String, String>,
    ) -> Result<ActionPostResponse, AppError> {
        let account = body.account;
        let request = claim_request(state, &params, body.password).await?;
        let payload = payload::claim_red_packet(state.module, &request)?;

        tracing::info!("Claim payload for {account} on red packet #{}", request.red_packet_id);

        Ok(ActionPostResponse {
            payload,
            message: Some(format!("Sign to claim red packet #{}", request.red_packet_id)),
        })
    }

    async fn complete(
        &self,
        state: &AppState,
        body: ActionSubmitRequest,
        signed_txn: Vec<u8>,
        params: HashMap<String, String>,
    ) -> Result<ActionCompleteResponse, AppError> {
        let request = claim_request(state, &params, body.password).await?;
        let wallet = RelayWallet::new(body.account, signed_txn, state.node.clone());

        let transaction = TransactionFlow::new(state.node.as_ref(), &wallet, state.module)
            .claim_red_packet(&request)
            .await?;

        Ok(ActionCompleteResponse {
            hash: transaction.hash,
            version: transaction.version,
            message: format!("恭喜發財！Red packet #{} claimed", request.red_packet_id),
            red_packet_id: request.red_packet_id.parse().ok(),
            link: None,
        })
    }
}
