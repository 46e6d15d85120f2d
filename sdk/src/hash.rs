use std::fmt;
use tiny_keccak::{Hasher, Sha3};

use crate::consts::PASSWORD_HASH_LEN;

/// SHA3-256 digest of a red packet password, as stored on chain at creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordHash([u8; PASSWORD_HASH_LEN]);

impl PasswordHash {
    pub fn as_bytes(&self) -> &[u8; PASSWORD_HASH_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordHash").field(&self.to_string()).finish()
    }
}

/// Hash the UTF-8 bytes of `password` with SHA3-256. No salt, no iterations.
///
/// The contract re-hashes the raw bytes sent by `claim_red_packet` with the same function,
/// so this must stay byte-for-byte compatible with Move's `aptos_hash::sha3_256`.
pub fn password_hash(password: &str) -> PasswordHash {
    let mut sha3 = Sha3::v256();
    let mut output = [0u8; PASSWORD_HASH_LEN];
    sha3.update(password.as_bytes());
    sha3.finalize(&mut output);
    PasswordHash(output)
}
