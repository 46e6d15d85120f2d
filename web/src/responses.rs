//! JSON bodies exchanged with the browser.

use redpacket_sdk::units::format_octas;
use redpacket_sdk::{AccountAddress, EntryFunctionPayload, RedPacket};
use serde::{Deserialize, Serialize};

use crate::consts::{STATUS_ACTIVE, STATUS_FULLY_CLAIMED};

// ============================================================
// Action cards (GET)
// ============================================================

#[derive(Debug, Serialize)]
pub struct ActionGetResponse {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

impl ActionGetResponse {
    pub fn new(icon: &str, title: &str, description: &str, label: &str) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
            label: label.into(),
            disabled: false,
            error: None,
            links: None,
        }
    }

    /// Mark the card disabled with a reason.
    pub fn with_error(mut self, message: &str) -> Self {
        self.disabled = true;
        self.error = Some(ActionError {
            message: message.into(),
        });
        self
    }

    pub fn with_links(mut self, actions: Vec<LinkedAction>) -> Self {
        self.links = Some(ActionLinks { actions });
        self
    }
}

#[derive(Debug, Serialize)]
pub struct ActionError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Serialize)]
pub struct LinkedAction {
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

#[derive(Debug, Serialize)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
}

impl ActionParameter {
    fn new(kind: &'static str, name: &str, label: &str, required: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required,
            kind,
            min: None,
        }
    }

    pub fn number(name: &str, label: &str, required: bool) -> Self {
        Self::new("number", name, label, required)
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::new("password", name, label, true)
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }
}

// ============================================================
// Action requests and results (POST)
// ============================================================

/// Secrets such as `password` come in the body, never in the query string.
#[derive(Debug, Deserialize)]
pub struct ActionPostRequest {
    pub account: AccountAddress,
    #[serde(default)]
    pub password: Option<String>,
}

/// Unsigned payload for the browser wallet to sign.
#[derive(Debug, Serialize)]
pub struct ActionPostResponse {
    pub payload: EntryFunctionPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wallet-signed transaction coming back for relay.
#[derive(Debug, Deserialize)]
pub struct ActionSubmitRequest {
    pub account: AccountAddress,
    #[serde(default)]
    pub password: Option<String>,
    /// BCS signed transaction, base64
    pub signed_transaction: String,
}

#[derive(Debug, Serialize)]
pub struct ActionCompleteResponse {
    pub hash: String,
    pub version: u64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_packet_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

// ============================================================
// Read views
// ============================================================

#[derive(Debug, Serialize)]
pub struct RedPacketView {
    pub id: u64,
    pub creator: AccountAddress,
    pub total_amount: u64,
    pub remaining_amount: u64,
    pub recipient_count: u64,
    pub remaining_count: u64,
    pub total_apt: String,
    pub remaining_apt: String,
    pub status: &'static str,
    pub link: String,
}

impl RedPacketView {
    pub fn new(packet: RedPacket, base_url: &str) -> Self {
        let info = packet.info;
        let status = if info.is_exhausted() {
            STATUS_FULLY_CLAIMED
        } else {
            STATUS_ACTIVE
        };
        Self {
            id: packet.id,
            creator: info.creator,
            total_amount: info.total_amount,
            remaining_amount: info.remaining_amount,
            recipient_count: info.recipient_count,
            remaining_count: info.remaining_count,
            total_apt: format_octas(info.total_amount),
            remaining_apt: format_octas(info.remaining_amount),
            status,
            link: crate::actions::share_link(base_url, packet.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RedPacketListResponse {
    pub creator: AccountAddress,
    pub red_packets: Vec<RedPacketView>,
}

#[derive(Debug, Serialize)]
pub struct LatestIdResponse {
    pub red_packet_id: u64,
}

#[derive(Debug, Serialize)]
pub struct LastCreatorResponse {
    pub creator: Option<AccountAddress>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
