use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

use crate::address::AccountAddress;
use crate::error::{Error, Result};
use crate::node::NodeApi;
use crate::payload;

/// Read projection of an on-chain red packet.
///
/// Field order mirrors the `get_red_packet_info` return tuple:
/// `(creator, total_amount, remaining_amount, recipient_count, remaining_count)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedPacketInfo {
    pub creator: AccountAddress,
    pub total_amount: u64,
    pub remaining_amount: u64,
    pub recipient_count: u64,
    pub remaining_count: u64,
}

impl RedPacketInfo {
    pub fn is_exhausted(&self) -> bool {
        self.remaining_count == 0
    }

    pub fn claimed_count(&self) -> u64 {
        self.recipient_count.saturating_sub(self.remaining_count)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RedPacket {
    pub id: u64,
    #[serde(flatten)]
    pub info: RedPacketInfo,
}

// ============================================================
// Positional decoding
// ============================================================

fn decode_u64(value: &Value, what: &str) -> Result<u64> {
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|_| Error::Decode(format!("{what}: '{s}' is not a u64"))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| Error::Decode(format!("{what}: {n} is not a u64"))),
        other => Err(Error::Decode(format!("{what}: expected u64, got {other}"))),
    }
}

fn decode_address(value: &Value, what: &str) -> Result<AccountAddress> {
    value
        .as_str()
        .ok_or_else(|| Error::Decode(format!("{what}: expected address, got {value}")))?
        .parse()
        .map_err(|e| Error::Decode(format!("{what}: {e}")))
}

fn expect_len(values: &[Value], len: usize, function: &str) -> Result<()> {
    if values.len() != len {
        return Err(Error::Decode(format!(
            "{function} returned {} values, expected {len}",
            values.len()
        )));
    }
    Ok(())
}

pub fn decode_red_packet_info(values: &[Value]) -> Result<RedPacketInfo> {
    expect_len(values, 5, "get_red_packet_info")?;
    Ok(RedPacketInfo {
        creator: decode_address(&values[0], "creator")?,
        total_amount: decode_u64(&values[1], "total_amount")?,
        remaining_amount: decode_u64(&values[2], "remaining_amount")?,
        recipient_count: decode_u64(&values[3], "recipient_count")?,
        remaining_count: decode_u64(&values[4], "remaining_count")?,
    })
}

pub fn decode_latest_red_packet_id(values: &[Value]) -> Result<u64> {
    expect_len(values, 1, "get_latest_red_packet_id")?;
    decode_u64(&values[0], "red_packet_id")
}

pub fn decode_creator_red_packets(values: &[Value]) -> Result<Vec<u64>> {
    expect_len(values, 1, "get_creator_red_packets")?;
    values[0]
        .as_array()
        .ok_or_else(|| Error::Decode(format!("expected id vector, got {}", values[0])))?
        .iter()
        .map(|id| decode_u64(id, "red_packet_id"))
        .collect()
}

// ============================================================
// Queries
// ============================================================

/// Read-only queries against the `red_packet` module. Every call is a fresh round trip.
pub struct RedPacketViews<'a, N: NodeApi + ?Sized> {
    node: &'a N,
    module: AccountAddress,
}

impl<'a, N: NodeApi + ?Sized> RedPacketViews<'a, N> {
    pub fn new(node: &'a N, module: AccountAddress) -> Self {
        Self { node, module }
    }

    pub async fn red_packet_info(&self, id: u64) -> Result<RedPacketInfo> {
        let values = self
            .node
            .view(&payload::get_red_packet_info(self.module, id))
            .await?;
        decode_red_packet_info(&values)
    }

    pub async fn red_packet(&self, id: u64) -> Result<RedPacket> {
        let info = self.red_packet_info(id).await?;
        Ok(RedPacket { id, info })
    }

    pub async fn latest_red_packet_id(&self) -> Result<u64> {
        let values = self
            .node
            .view(&payload::get_latest_red_packet_id(self.module))
            .await?;
        decode_latest_red_packet_id(&values)
    }

    pub async fn creator_red_packet_ids(&self, creator: AccountAddress) -> Result<Vec<u64>> {
        let values = self
            .node
            .view(&payload::get_creator_red_packets(self.module, creator))
            .await?;
        decode_creator_red_packets(&values)
    }

    /// All packets created by `creator`, in id order.
    ///
    /// Lookups run concurrently; one failed lookup fails the whole listing.
    pub async fn creator_red_packets(&self, creator: AccountAddress) -> Result<Vec<RedPacket>> {
        let ids = self.creator_red_packet_ids(creator).await?;
        tracing::debug!("Fetching {} red packets for {creator}", ids.len());
        try_join_all(ids.into_iter().map(|id| self.red_packet(id))).await
    }
}
