use super::{HasHash, HashCell, Input};
use crate::{
    hasher::{Algorithm, Hasher},
    reader::Stream,
    E,
};
use std::{io::Cursor, sync::Arc};

/// Input fully read into memory. The hash is always available.
///
/// Keeping the whole document in memory isn't memory efficient; consider `ReferenceInput` for
/// large resources. The content is immutable and shared by all opened streams, so one instance
/// can be read from several threads at once.
#[derive(Debug, Clone)]
pub struct InMemoryInput {
    content: Arc<[u8]>,
    name: String,
    algorithm: Algorithm,
    hash: HashCell,
}

impl InMemoryInput {
    /// Wraps `content` and computes its hash right away.
    pub fn new<N: Into<String>>(
        content: Vec<u8>,
        name: N,
        algorithm: Algorithm,
    ) -> Result<Self, E> {
        let mut accumulator = algorithm.accumulator();
        accumulator.absorb(&content)?;
        accumulator.finish()?;
        let hash = accumulator.hash()?.to_vec();
        Ok(Self::with_hash(content, name.into(), algorithm, hash))
    }

    /// Content and hash must come from the same single reading pass.
    pub(crate) fn with_hash(
        content: Vec<u8>,
        name: String,
        algorithm: Algorithm,
        hash: Vec<u8>,
    ) -> Self {
        Self {
            content: Arc::from(content),
            name,
            algorithm,
            hash: HashCell::computed(hash),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl HasHash for InMemoryInput {
    fn hash_cell(&self) -> &HashCell {
        &self.hash
    }
}

impl Input for InMemoryInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn open_stream(&self) -> Result<Stream, E> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.content))))
    }
}
