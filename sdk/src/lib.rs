//! Client for the Aptos `red_packet` Move module.
//!
//! Creation hashes the claim password with SHA3-256 and sends only the digest; claiming sends
//! the raw UTF-8 password and lets the contract hash and compare. Both sides must agree on the
//! hash function and encoding or claims never match.

pub mod address;
pub mod config;
pub mod consts;
pub mod error;
pub mod hash;
pub mod node;
pub mod payload;
pub mod store;
pub mod submit;
pub mod units;
pub mod view;
pub mod wallet;

pub use address::AccountAddress;
pub use config::Config;
pub use error::{Error, Result};
pub use hash::{password_hash, PasswordHash};
pub use node::{CommittedPayload, CommittedTransaction, NodeApi, PendingTransaction, RestClient};
pub use payload::{ClaimRequest, CreateRequest, EntryFunctionId, EntryFunctionPayload, MoveArg, ViewRequest};
pub use store::LastCreatorStore;
pub use submit::{Created, TransactionFlow};
pub use view::{RedPacket, RedPacketInfo, RedPacketViews};
pub use wallet::Wallet;
