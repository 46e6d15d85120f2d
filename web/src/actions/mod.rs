pub mod claim;
pub mod create;
mod registry;
mod utils;

pub use registry::{Action, ActionRegistry};
pub use utils::{decode_signed_tx, get_param, require_password, share_link};
