#![allow(dead_code)]

use async_trait::async_trait;
use redpacket_sdk::{
    AccountAddress, CommittedPayload, CommittedTransaction, EntryFunctionPayload, Error, NodeApi, PendingTransaction,
    Result, ViewRequest, Wallet,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub fn module() -> AccountAddress {
    "0xcafe".parse().unwrap()
}

pub fn creator() -> AccountAddress {
    "0xabc".parse().unwrap()
}

/// Transactions accepted so far, by hash: who sent them and which function they run.
pub type Ledger = Arc<Mutex<HashMap<String, (AccountAddress, String)>>>;

/// In-memory node: canned view results, every transaction on the ledger commits with `success`.
pub struct MockNode {
    pub ledger: Ledger,
    pub latest_id: Mutex<u64>,
    pub packets: HashMap<u64, Vec<Value>>,
    pub failing: HashSet<u64>,
    pub creator_ids: Vec<u64>,
    pub success: bool,
    pub views: Mutex<Vec<String>>,
}

impl MockNode {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::default(),
            latest_id: Mutex::new(0),
            packets: HashMap::new(),
            failing: HashSet::new(),
            creator_ids: vec![],
            success: true,
            views: Mutex::new(vec![]),
        }
    }

    pub fn with_packet(mut self, id: u64, total: u64, remaining: u64, count: u64, left: u64) -> Self {
        self.packets.insert(
            id,
            vec![
                json!(creator().to_long_string()),
                json!(total.to_string()),
                json!(remaining.to_string()),
                json!(count.to_string()),
                json!(left.to_string()),
            ],
        );
        self.creator_ids.push(id);
        self
    }

    pub fn failing_on(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn view_calls(&self) -> Vec<String> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl NodeApi for MockNode {
    async fn view(&self, request: &ViewRequest) -> Result<Vec<Value>> {
        self.views.lock().unwrap().push(request.function.name.to_string());
        match request.function.name {
            "get_latest_red_packet_id" => Ok(vec![json!(self.latest_id.lock().unwrap().to_string())]),
            "get_creator_red_packets" => {
                let ids: Vec<String> = self.creator_ids.iter().map(u64::to_string).collect();
                Ok(vec![json!(ids)])
            }
            "get_red_packet_info" => {
                let id: u64 = serde_json::to_value(&request.arguments[0])
                    .unwrap()
                    .as_str()
                    .unwrap()
                    .parse()
                    .unwrap();
                if self.failing.contains(&id) {
                    return Err(Error::Node {
                        status: 500,
                        message: format!("lookup of {id} failed"),
                    });
                }
                self.packets.get(&id).cloned().ok_or_else(|| Error::Node {
                    status: 400,
                    message: "E_RED_PACKET_NOT_FOUND".into(),
                })
            }
            other => panic!("unexpected view {other}"),
        }
    }

    async fn submit_signed(&self, _signed_txn: &[u8]) -> Result<PendingTransaction> {
        Ok(PendingTransaction {
            hash: "0xfeed".into(),
        })
    }

    async fn wait_for_transaction(&self, hash: &str) -> Result<CommittedTransaction> {
        let (sender, function) = self
            .ledger
            .lock()
            .unwrap()
            .get(hash)
            .cloned()
            .ok_or_else(|| Error::TransactionNotFound(hash.to_string()))?;
        if self.success {
            *self.latest_id.lock().unwrap() += 1;
        }
        Ok(CommittedTransaction {
            hash: hash.to_string(),
            version: 42,
            success: self.success,
            vm_status: if self.success {
                "Executed successfully".into()
            } else {
                "Move abort: E_WRONG_PASSWORD".into()
            },
            sender,
            payload: Some(CommittedPayload {
                function: Some(function),
            }),
        })
    }
}

/// Wallet that records what it was asked to sign and posts it to the node's ledger.
pub struct MockWallet {
    pub account: Option<AccountAddress>,
    pub reject: bool,
    pub signed: Mutex<Vec<EntryFunctionPayload>>,
    ledger: Ledger,
    /// Sender the ledger records instead of `account`.
    sent_by: Option<AccountAddress>,
    /// Function the ledger records instead of the signed one.
    runs: Option<String>,
}

impl MockWallet {
    pub fn connected(node: &MockNode) -> Self {
        Self {
            account: Some(creator()),
            reject: false,
            signed: Mutex::new(vec![]),
            ledger: node.ledger.clone(),
            sent_by: None,
            runs: None,
        }
    }

    pub fn disconnected(node: &MockNode) -> Self {
        Self {
            account: None,
            ..Self::connected(node)
        }
    }

    pub fn rejecting(node: &MockNode) -> Self {
        Self {
            reject: true,
            ..Self::connected(node)
        }
    }

    /// Commit a transaction from `sender` whatever account the wallet reports.
    pub fn sent_by(mut self, sender: AccountAddress) -> Self {
        self.sent_by = Some(sender);
        self
    }

    /// Commit a transaction running `function` whatever payload was signed.
    pub fn runs(mut self, function: &str) -> Self {
        self.runs = Some(function.to_string());
        self
    }

    pub fn signed(&self) -> Vec<EntryFunctionPayload> {
        self.signed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for MockWallet {
    fn account(&self) -> Option<AccountAddress> {
        self.account
    }

    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<PendingTransaction> {
        if self.reject {
            return Err(Error::WalletRejected("User rejected the request".into()));
        }
        let mut signed = self.signed.lock().unwrap();
        signed.push(payload.clone());
        let hash = format!("0x{:02x}", signed.len());

        let sender = self.sent_by.or(self.account).unwrap_or_else(creator);
        let function = self.runs.clone().unwrap_or_else(|| payload.function.to_string());
        self.ledger.lock().unwrap().insert(hash.clone(), (sender, function));

        Ok(PendingTransaction { hash })
    }
}
