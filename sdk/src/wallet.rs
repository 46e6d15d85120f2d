use async_trait::async_trait;

use crate::address::AccountAddress;
use crate::error::Result;
use crate::node::PendingTransaction;
use crate::payload::EntryFunctionPayload;

/// Signing capability of a connected wallet.
///
/// Passed explicitly to [`crate::submit::TransactionFlow`]; nothing in the client reaches for a
/// global wallet session.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Connected account, or `None` when no wallet is connected.
    fn account(&self) -> Option<AccountAddress>;

    /// Ask the wallet to sign `payload` and submit it. A user rejection is
    /// [`crate::Error::WalletRejected`].
    async fn sign_and_submit(&self, payload: &EntryFunctionPayload) -> Result<PendingTransaction>;
}
