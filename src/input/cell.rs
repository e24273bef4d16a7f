use crate::E;
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

/// Write-once, read-many holder of a hash.
///
/// Cloning: the cloned instance is bound with the parent instance, so a `DigestingReader` can
/// hold a clone and publish into the cell of the input it was opened for. `HashCell` is safe to
/// be shared between threads.
#[derive(Default, Clone)]
pub struct HashCell {
    value: Arc<OnceLock<Vec<u8>>>,
}

impl HashCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell which already holds `hash`.
    pub fn computed(hash: Vec<u8>) -> Self {
        Self {
            value: Arc::new(OnceLock::from(hash)),
        }
    }

    /// Stores the hash.
    ///
    /// # Returns
    ///
    /// - `Err(E::HashAlreadyComputed)` if the cell was filled before. The stored value isn't
    ///   changed in that case.
    pub fn set(&self, hash: Vec<u8>) -> Result<(), E> {
        self.value.set(hash).map_err(|_| E::HashAlreadyComputed)
    }

    /// Returns the hash or `E::HashNotComputed` if it isn't available yet.
    pub fn get(&self) -> Result<&[u8], E> {
        self.value
            .get()
            .map(|hash| hash.as_slice())
            .ok_or(E::HashNotComputed)
    }

    pub fn is_computed(&self) -> bool {
        self.value.get().is_some()
    }
}

impl fmt::Debug for HashCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(hash) => write!(f, "HashCell({})", hex::encode(hash)),
            None => f.write_str("HashCell(<pending>)"),
        }
    }
}
