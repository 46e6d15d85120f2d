//! Fullnode transport.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::address::AccountAddress;
use crate::consts::{CONFIRMATION_POLL_INTERVAL_MS, MAX_NOT_FOUND_POLLS};
use crate::error::{Error, Result};
use crate::payload::ViewRequest;

const SIGNED_TRANSACTION_BCS: &str = "application/x.aptos.signed_transaction+bcs";

/// Handle returned by submission, before the ledger has executed the transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
}

/// A transaction the ledger has executed. `success == false` means the VM aborted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedTransaction {
    pub hash: String,
    #[serde(deserialize_with = "u64_from_string")]
    pub version: u64,
    pub success: bool,
    pub vm_status: String,
    pub sender: AccountAddress,
    /// Absent for transactions that are not user transactions.
    #[serde(default)]
    pub payload: Option<CommittedPayload>,
}

impl CommittedTransaction {
    /// `address::module::name` of the entry function the transaction ran, if any.
    pub fn function(&self) -> Option<&str> {
        self.payload.as_ref()?.function.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedPayload {
    #[serde(default)]
    pub function: Option<String>,
}

fn u64_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Num(u64),
    }
    match Repr::deserialize(deserializer)? {
        Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
        Repr::Num(n) => Ok(n),
    }
}

#[derive(Deserialize)]
struct NodeErrorBody {
    message: String,
}

/// What the client needs from a fullnode.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Run a view function and return its positional result tuple.
    async fn view(&self, request: &ViewRequest) -> Result<Vec<serde_json::Value>>;

    /// Submit a BCS-encoded signed transaction.
    async fn submit_signed(&self, signed_txn: &[u8]) -> Result<PendingTransaction>;

    /// Block until the transaction has left the pending state.
    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction>;
}

/// `NodeApi` over the fullnode REST API.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    poll_interval: Duration,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            poll_interval: Duration::from_millis(CONFIRMATION_POLL_INTERVAL_MS),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<NodeErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);
    Err(Error::Node {
        status: status.as_u16(),
        message,
    })
}

/// Read a 2xx body as JSON. Transport failures stay `Network`; a body that does not parse is `Decode`.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response, what: &str) -> Result<T> {
    let body = ensure_success(resp).await?.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| Error::Decode(format!("{what}: {e}")))
}

#[async_trait]
impl NodeApi for RestClient {
    async fn view(&self, request: &ViewRequest) -> Result<Vec<serde_json::Value>> {
        tracing::debug!("view {}", request.function);
        let resp = self
            .http
            .post(format!("{}/view", self.base_url))
            .json(request)
            .send()
            .await?;
        read_json(resp, "view result").await
    }

    async fn submit_signed(&self, signed_txn: &[u8]) -> Result<PendingTransaction> {
        let resp = self
            .http
            .post(format!("{}/transactions", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, SIGNED_TRANSACTION_BCS)
            .body(signed_txn.to_vec())
            .send()
            .await?;
        let pending: PendingTransaction = read_json(resp, "submission reply").await?;
        tracing::info!("Submitted transaction {}", pending.hash);
        Ok(pending)
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction> {
        let url = format!("{}/transactions/wait_by_hash/{hash}", self.base_url);
        let mut not_found = 0;

        loop {
            let resp = self.http.get(&url).send().await?;

            if resp.status() == StatusCode::NOT_FOUND {
                not_found += 1;
                if not_found >= MAX_NOT_FOUND_POLLS {
                    return Err(Error::TransactionNotFound(hash.to_string()));
                }
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            let txn: serde_json::Value = read_json(resp, "transaction").await?;
            if txn.get("type").and_then(|t| t.as_str()) == Some("pending_transaction") {
                tracing::debug!("Transaction {hash} still pending");
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            return serde_json::from_value(txn)
                .map_err(|e| Error::Decode(format!("transaction {hash}: {e}")));
        }
    }
}
