use async_trait::async_trait;
use redpacket_sdk::{AccountAddress, EntryFunctionPayload, NodeApi, PendingTransaction, Result, Wallet};
use std::sync::Arc;

/// Wallet for a transaction the browser wallet has already signed.
///
/// The payload handed out by an action's POST was signed client-side; "signing" here is
/// relaying those BCS bytes to the node. The bytes are opaque, so `TransactionFlow` checks the
/// committed sender and function against `payload` once the node has executed them.
pub struct RelayWallet {
    account: AccountAddress,
    signed_txn: Vec<u8>,
    node: Arc<dyn NodeApi>,
}

impl RelayWallet {
    pub fn new(account: AccountAddress, signed_txn: Vec<u8>, node: Arc<dyn NodeApi>) -> Self {
        Self {
            account,
            signed_txn,
            node,
        }
    }
}

#[async_trait]
impl Wallet for RelayWallet {
    fn account(&self) -> Option<AccountAddress> {
        Some(self.account)
    }

    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<PendingTransaction> {
        tracing::debug!("Relaying signed {} from {}", payload.function, self.account);
        self.node.submit_signed(&self.signed_txn).await
    }
}
