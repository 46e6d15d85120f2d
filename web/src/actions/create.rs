use async_trait::async_trait;
use redpacket_sdk::units::format_octas;
use redpacket_sdk::{payload, CreateRequest, TransactionFlow};
use std::collections::HashMap;

use super::{get_param, require_password, share_link, Action};
use crate::consts::*;
use crate::error::AppError;
use crate::responses::*;
use crate::state::AppState;
use crate::wallet::RelayWallet;

pub struct CreateAction;

/// Parse `amount` (APT, decimal string) and `recipients` from the query, `password` from the body.
fn create_request(
    params: &HashMap<String, String>,
    password: Option<String>,
) -> Result<CreateRequest, AppError> {
    let amount: String = get_param(params, "amount")?;
    let recipients: u64 = get_param(params, "recipients")?;
    let password = require_password(password)?;

    let request = CreateRequest::from_display(&amount, recipients, password)?;
    request.validate()?;
    Ok(request)
}

#[async_trait]
impl Action for CreateAction {
    fn path(&self) -> &'static str {
        "create"
    }

    async fn metadata(
        &self,
        _state: &AppState,
        _params: HashMap<String, String>,
    ) -> Result<ActionGetResponse, AppError> {
        let resp = ActionGetResponse::new(
            ICON_URL,
            CREATE_TITLE,
            "Lock APT in a password-protected red packet that friends can claim",
            "Create",
        )
        .with_links(vec![LinkedAction {
            href: "/api/actions/create?amount={amount}&recipients={recipients}".into(),
            label: CREATE_TITLE.into(),
            parameters: Some(vec![
                ActionParameter::number("amount", "Amount (APT)", true).with_min(0.00000001),
                ActionParameter::number("recipients", "Number of recipients", true).with_min(1.0),
                ActionParameter::password("password", "Password"),
            ]),
        }]);

        Ok(resp)
    }

    async fn execute(
        &self,
        state: &AppState,
        body: ActionPostRequest,
        params: HashMap<String, String>,
    ) -> Result<ActionPostResponse, AppError> {
        let account = body.account;
        let request = create_request(&params, body.password)?;
        let payload = payload::create_red_packet(state.module, &request)?;

        tracing::info!(
            "Create payload for {account}: {} octas, {} recipients",
            request.total_amount,
            request.recipient_count
        );

        Ok(ActionPostResponse {
            payload,
            message: Some(format!(
                "Sign to lock {} APT for {} recipients",
                format_octas(request.total_amount),
                request.recipient_count
            )),
        })
    }

    async fn complete(
        &self,
        state: &AppState,
        body: ActionSubmitRequest,
        signed_txn: Vec<u8>,
        params: HashMap<String, String>,
    ) -> Result<ActionCompleteResponse, AppError> {
        let request = create_request(&params, body.password)?;
        let wallet = RelayWallet::new(body.account, signed_txn, state.node.clone());

        let created = TransactionFlow::new(state.node.as_ref(), &wallet, state.module)
            .create_red_packet(&request, Some(state.store.as_ref()))
            .await?;

        let link = share_link(&state.base_url, created.red_packet_id);
        Ok(ActionCompleteResponse {
            hash: created.transaction.hash,
            version: created.transaction.version,
            message: format!(
                "Red packet #{} created! {} APT for {} recipients.\n\nShare this link:\n{link}",
                created.red_packet_id,
                format_octas(request.total_amount),
                request.recipient_count
            ),
            red_packet_id: Some(created.red_packet_id),
            link: Some(link),
        })
    }
}
