//! Argument encoding for the `red_packet` Move module.
//!
//! Each builder returns the fully-qualified function id and the ordered argument list the
//! contract ABI expects. Nothing here touches the network.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::AccountAddress;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::hash::password_hash;
use crate::units::parse_display_amount;

// ============================================================
// Function ids and arguments
// ============================================================

/// `<address>::<module>::<function>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFunctionId {
    pub address: AccountAddress,
    pub module: &'static str,
    pub name: &'static str,
}

impl EntryFunctionId {
    pub fn red_packet(address: AccountAddress, name: &'static str) -> Self {
        Self {
            address,
            module: MODULE_NAME,
            name,
        }
    }

    /// Whether `function` (as the node reports it) names this function. Addresses are compared
    /// by value, so short and long hex forms both match.
    pub fn matches(&self, function: &str) -> bool {
        let mut parts = function.splitn(3, "::");
        let (Some(address), Some(module), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        address.parse::<AccountAddress>().ok() == Some(self.address)
            && module == self.module
            && name == self.name
    }
}

impl fmt::Display for EntryFunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)
    }
}

impl Serialize for EntryFunctionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A Move argument in the JSON shape the fullnode REST API accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveArg {
    /// `u64`, sent as a decimal string
    U64(u64),
    /// `address`, sent as a hex string
    Address(AccountAddress),
    /// `vector<u8>`, sent as `0x`-prefixed hex
    Bytes(Vec<u8>),
}

impl Serialize for MoveArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MoveArg::U64(v) => serializer.collect_str(v),
            MoveArg::Address(addr) => serializer.serialize_str(&addr.to_long_string()),
            MoveArg::Bytes(bytes) => serializer.serialize_str(&format!("0x{}", hex::encode(bytes))),
        }
    }
}

/// Unsigned entry-function payload, handed to a wallet for signing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: EntryFunctionId,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<MoveArg>,
}

/// Read-only view request body for `POST /view`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    pub function: EntryFunctionId,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<MoveArg>,
}

impl EntryFunctionPayload {
    fn new(function: EntryFunctionId, arguments: Vec<MoveArg>) -> Self {
        Self {
            kind: "entry_function_payload",
            function,
            type_arguments: vec![],
            arguments,
        }
    }
}

impl ViewRequest {
    fn new(function: EntryFunctionId, arguments: Vec<MoveArg>) -> Self {
        Self {
            function,
            type_arguments: vec![],
            arguments,
        }
    }
}

// ============================================================
// Requests
// ============================================================

/// Inputs for `create_red_packet`. `total_amount` is already in octas.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateRequest {
    pub total_amount: u64,
    pub recipient_count: u64,
    pub password: String,
}

impl CreateRequest {
    /// Build from a display amount such as `"1.5"` (APT).
    pub fn from_display(amount: &str, recipient_count: u64, password: impl Into<String>) -> Result<Self> {
        Ok(Self {
            total_amount: parse_display_amount(amount)?,
            recipient_count,
            password: password.into(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_amount == 0 {
            return Err(Error::InvalidAmount("Amount must be greater than zero".into()));
        }
        if self.recipient_count == 0 {
            return Err(Error::InvalidArgument("Recipient count must be at least 1".into()));
        }
        if self.password.is_empty() {
            return Err(Error::InvalidArgument("Password is required".into()));
        }
        Ok(())
    }
}

/// Inputs for `claim_red_packet`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClaimRequest {
    pub creator: AccountAddress,
    pub red_packet_id: String,
    pub password: String,
}

impl ClaimRequest {
    pub fn validate(&self) -> Result<u64> {
        if self.password.is_empty() {
            return Err(Error::InvalidArgument("Password is required".into()));
        }
        parse_red_packet_id(&self.red_packet_id)
    }
}

pub fn parse_red_packet_id(id: &str) -> Result<u64> {
    id.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("'{id}' is not a red packet id")))
}

// ============================================================
// Builders
// ============================================================

/// `create_red_packet(total_amount: u64, recipient_count: u64, password_hash: vector<u8>)`
///
/// Only the SHA3-256 digest of the password leaves the client.
pub fn create_red_packet(module: AccountAddress, req: &CreateRequest) -> Result<EntryFunctionPayload> {
    req.validate()?;
    let digest = password_hash(&req.password);
    Ok(EntryFunctionPayload::new(
        EntryFunctionId::red_packet(module, CREATE_RED_PACKET),
        vec![
            MoveArg::U64(req.total_amount),
            MoveArg::U64(req.recipient_count),
            MoveArg::Bytes(digest.to_vec()),
        ],
    ))
}

/// `claim_red_packet(creator: address, red_packet_id: u64, password: vector<u8>)`
///
/// The password goes out as raw UTF-8; the contract hashes and compares it.
pub fn claim_red_packet(module: AccountAddress, req: &ClaimRequest) -> Result<EntryFunctionPayload> {
    let id = req.validate()?;
    Ok(EntryFunctionPayload::new(
        EntryFunctionId::red_packet(module, CLAIM_RED_PACKET),
        vec![
            MoveArg::Address(req.creator),
            MoveArg::U64(id),
            MoveArg::Bytes(req.password.as_bytes().to_vec()),
        ],
    ))
}

pub fn get_red_packet_info(module: AccountAddress, red_packet_id: u64) -> ViewRequest {
    ViewRequest::new(
        EntryFunctionId::red_packet(module, GET_RED_PACKET_INFO),
        vec![MoveArg::U64(red_packet_id)],
    )
}

pub fn get_latest_red_packet_id(module: AccountAddress) -> ViewRequest {
    ViewRequest::new(
        EntryFunctionId::red_packet(module, GET_LATEST_RED_PACKET_ID),
        vec![],
    )
}

pub fn get_creator_red_packets(module: AccountAddress, creator: AccountAddress) -> ViewRequest {
    ViewRequest::new(
        EntryFunctionId::red_packet(module, GET_CREATOR_RED_PACKETS),
        vec![MoveArg::Address(creator)],
    )
}
