/// Default Aptos fullnode REST root
pub const DEFAULT_NODE_URL: &str = "https://fullnode.devnet.aptoslabs.com/v1";

/// Environment keys
pub const MODULE_ADDRESS_ENV: &str = "MODULE_ADDRESS";
pub const NODE_URL_ENV: &str = "NODE_URL";
pub const LAST_CREATOR_PATH_ENV: &str = "LAST_CREATOR_PATH";

/// Move module holding the red packet entry and view functions
pub const MODULE_NAME: &str = "red_packet";

/// Entry functions
pub const CREATE_RED_PACKET: &str = "create_red_packet";
pub const CLAIM_RED_PACKET: &str = "claim_red_packet";

/// View functions
pub const GET_RED_PACKET_INFO: &str = "get_red_packet_info";
pub const GET_LATEST_RED_PACKET_ID: &str = "get_latest_red_packet_id";
pub const GET_CREATOR_RED_PACKETS: &str = "get_creator_red_packets";

/// 1 APT = 10^8 octas
pub const APT_DECIMALS: u32 = 8;
pub const OCTAS_PER_APT: u64 = 100_000_000;

/// SHA3-256 digest length
pub const PASSWORD_HASH_LEN: usize = 32;

/// Polling cadence for `wait_by_hash` once the long poll returns a pending transaction
pub const CONFIRMATION_POLL_INTERVAL_MS: u64 = 500;

/// How many times an unknown hash is re-polled before giving up
pub const MAX_NOT_FOUND_POLLS: u32 = 20;
