use std::fs;
use std::path::{Path, PathBuf};

use crate::address::AccountAddress;

const DEFAULT_DIR: &str = "redpacket";
const DEFAULT_FILE: &str = "last_creator";

/// File-backed hint holding the last creator address used on this machine.
///
/// Writes are best-effort and reads treat anything unusable as absent; nothing depends on
/// the hint being present.
#[derive(Clone, Debug)]
pub struct LastCreatorStore {
    path: PathBuf,
}

impl LastCreatorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/redpacket/last_creator`, falling back to the working directory.
    pub fn default_location() -> Self {
        let dir = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(DEFAULT_DIR).join(DEFAULT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remember(&self, creator: &AccountAddress) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("Could not create {}: {e}", parent.display());
                return;
            }
        }
        match fs::write(&self.path, creator.to_long_string()) {
            Ok(()) => tracing::debug!("Remembered last creator {creator}"),
            Err(e) => tracing::warn!("Could not write {}: {e}", self.path.display()),
        }
    }

    pub fn recall(&self) -> Option<AccountAddress> {
        let raw = fs::read_to_string(&self.path).ok()?;
        raw.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_and_recalls() {
        let dir = tempfile::tempdir().unwrap();
        let store = LastCreatorStore::new(dir.path().join("nested").join("last_creator"));
        assert_eq!(store.recall(), None);

        let creator: AccountAddress = "0xabc".parse().unwrap();
        store.remember(&creator);
        assert_eq!(store.recall(), Some(creator));

        let other: AccountAddress = "0xdef".parse().unwrap();
        store.remember(&other);
        assert_eq!(store.recall(), Some(other));
    }

    #[test]
    fn garbled_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_creator");
        fs::write(&path, "not an address").unwrap();
        assert_eq!(LastCreatorStore::new(path).recall(), None);
    }

    #[test]
    fn unwritable_location_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        // Parent is a regular file, so the write fails and is only logged.
        let store = LastCreatorStore::new(blocker.join("last_creator"));
        store.remember(&"0x1".parse().unwrap());
        assert_eq!(store.recall(), None);
    }
}
