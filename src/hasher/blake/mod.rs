use super::{Hasher, E};
use blake3::{Hash, Hasher as BlakeHasher, OUT_LEN};

/// Hasher based on `blake3` crate.
pub struct Blake {
    hasher: Option<BlakeHasher>,
    hash: Option<Hash>,
}

impl Default for Blake {
    fn default() -> Self {
        Blake::new()
    }
}

impl Blake {
    pub fn new() -> Self {
        Blake {
            hasher: Some(BlakeHasher::new()),
            hash: None,
        }
    }
}

impl Hasher for Blake {
    fn hash(&self) -> Result<&[u8], E> {
        Ok(self.hash.as_ref().ok_or(E::NotFinished)?.as_bytes())
    }
    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        self.hasher
            .as_mut()
            .ok_or(E::AlreadyFinished)?
            .update(data);
        Ok(())
    }
    fn finish(&mut self) -> Result<(), E> {
        let hasher = self.hasher.take().ok_or(E::AlreadyFinished)?;
        self.hash = Some(hasher.finalize());
        Ok(())
    }
    fn digest_length(&self) -> usize {
        OUT_LEN
    }
}
