use serde::Serialize;

use crate::address::AccountAddress;
use crate::error::{Error, Result};
use crate::node::{CommittedTransaction, NodeApi};
use crate::payload::{self, ClaimRequest, CreateRequest, EntryFunctionPayload};
use crate::store::LastCreatorStore;
use crate::view::RedPacketViews;
use crate::wallet::Wallet;

/// Outcome of a committed `create_red_packet`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Created {
    pub red_packet_id: u64,
    pub creator: AccountAddress,
    pub transaction: CommittedTransaction,
}

/// Sign, submit and wait for one mutating call at a time.
///
/// No retries and no reconciliation: a failure at any step is returned as-is and the caller
/// decides whether to prompt again.
pub struct TransactionFlow<'a, N: NodeApi + ?Sized, W: Wallet + ?Sized> {
    node: &'a N,
    wallet: &'a W,
    module: AccountAddress,
}

impl<'a, N, W> TransactionFlow<'a, N, W>
where
    N: NodeApi + ?Sized,
    W: Wallet + ?Sized,
{
    pub fn new(node: &'a N, wallet: &'a W, module: AccountAddress) -> Self {
        Self {
            node,
            wallet,
            module,
        }
    }

    /// A transaction that commits from another sender or for another function is reported as
    /// `TransactionMismatch`, whatever its status.
    pub async fn submit(&self, payload: &EntryFunctionPayload) -> Result<CommittedTransaction> {
        let account = self.wallet.account().ok_or(Error::WalletNotConnected)?;
        tracing::info!("Submitting {} for {account}", payload.function);

        let pending = self.wallet.sign_and_submit(payload).await?;
        let committed = self.node.wait_for_transaction(&pending.hash).await?;
        check_identity(&committed, account, payload)?;

        if !committed.success {
            tracing::warn!("Transaction {} aborted: {}", committed.hash, committed.vm_status);
            return Err(Error::TransactionFailed {
                hash: committed.hash,
                vm_status: committed.vm_status,
            });
        }

        tracing::info!("Transaction {} committed at version {}", committed.hash, committed.version);
        Ok(committed)
    }

    /// Create a red packet, then resolve its id from `get_latest_red_packet_id`.
    ///
    /// The creator address is written to `store` once the id is known.
    pub async fn create_red_packet(
        &self,
        request: &CreateRequest,
        store: Option<&LastCreatorStore>,
    ) -> Result<Created> {
        let payload = payload::create_red_packet(self.module, request)?;
        let creator = self.wallet.account().ok_or(Error::WalletNotConnected)?;

        let transaction = self.submit(&payload).await?;
        let red_packet_id = RedPacketViews::new(self.node, self.module)
            .latest_red_packet_id()
            .await?;

        if let Some(store) = store {
            store.remember(&creator);
        }

        tracing::info!("Red packet #{red_packet_id} created by {creator}");
        Ok(Created {
            red_packet_id,
            creator,
            transaction,
        })
    }

    pub async fn claim_red_packet(&self, request: &ClaimRequest) -> Result<CommittedTransaction> {
        let payload = payload::claim_red_packet(self.module, request)?;
        let transaction = self.submit(&payload).await?;
        tracing::info!("Red packet #{} claimed", request.red_packet_id);
        Ok(transaction)
    }
}

/// The committed transaction must be the one the wallet was asked for: same sender, same entry
/// function. Otherwise its outcome says nothing about this request.
fn check_identity(
    committed: &CommittedTransaction,
    account: AccountAddress,
    payload: &EntryFunctionPayload,
) -> Result<()> {
    let mismatch = |reason: String| {
        tracing::warn!("Transaction {} rejected: {reason}", committed.hash);
        Err(Error::TransactionMismatch {
            hash: committed.hash.clone(),
            reason,
        })
    };

    if committed.sender != account {
        return mismatch(format!("sent by {}, expected {account}", committed.sender));
    }
    match committed.function() {
        Some(function) if payload.function.matches(function) => Ok(()),
        Some(function) => mismatch(format!("runs {function}, expected {}", payload.function)),
        None => mismatch(format!("runs no entry function, expected {}", payload.function)),
    }
}
