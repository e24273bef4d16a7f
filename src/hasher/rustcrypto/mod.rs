use super::{Hasher, E};
use digest::Digest;

/// Hasher based on any RustCrypto digest (`sha2`, `sha-1`, `md-5`).
pub struct RustCrypto<D> {
    hasher: Option<D>,
    hash: Option<Vec<u8>>,
}

impl<D: Digest> Default for RustCrypto<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> RustCrypto<D> {
    pub fn new() -> Self {
        RustCrypto {
            hasher: Some(D::new()),
            hash: None,
        }
    }
}

impl<D: Digest + Send + Sync> Hasher for RustCrypto<D> {
    /// Returns the computed hash.
    ///
    /// # Returns
    ///
    /// - `Ok(&[u8])` containing the hash bytes if hashing is finished.
    /// - `Err(E)` if the hash is not yet finalized.
    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?)
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        let Some(hasher) = self.hasher.as_mut() else {
            return Err(E::AlreadyFinished);
        };
        hasher.update(data);
        Ok(())
    }

    /// Finalizes the hash computation and stores the result.
    fn finish(&mut self) -> Result<(), E> {
        let Some(hasher) = self.hasher.take() else {
            return Err(E::AlreadyFinished);
        };
        self.hash = Some(hasher.finalize().to_vec());
        Ok(())
    }

    fn digest_length(&self) -> usize {
        <D as Digest>::output_size()
    }
}
