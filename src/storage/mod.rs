mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

/// String slots addressed by key, the local analogue of browser storage.
///
/// Reads and writes are independent operations; there is no locking, so a
/// read-modify-write sequence from two writers is last-writer-wins.
pub trait KeyValueStorage: Send + Sync {
    /// Read a slot. A missing slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace a slot's content.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
