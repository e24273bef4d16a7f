mod cell;
mod memory;
mod reference;

pub use cell::HashCell;
pub use memory::InMemoryInput;
pub use reference::ReferenceInput;

use crate::{
    digesting::{self, DigestingReader},
    hasher::Algorithm,
    reader::Stream,
    E,
};
use log::debug;
use std::io;

/// Target which receives a hash once it's computed.
///
/// The hash can be set only once; afterwards it's read-only. Asking for the hash before it's
/// set gives `E::HashNotComputed`, which is different from "the hash can't be computed at all".
pub trait HasHash {
    fn hash_cell(&self) -> &HashCell;

    fn set_hash(&self, digest: Vec<u8>) -> Result<(), E> {
        self.hash_cell().set(digest)
    }

    fn hash(&self) -> Result<&[u8], E> {
        self.hash_cell().get()
    }

    /// Doesn't trigger any computation.
    fn is_hash_computed(&self) -> bool {
        self.hash_cell().is_computed()
    }
}

/// A document to be processed, together with its content fingerprint.
pub trait Input: HasHash + Send + Sync {
    /// Name/identifier of the input.
    fn name(&self) -> &str;

    /// Algorithm the hash is (or will be) computed with.
    fn algorithm(&self) -> Algorithm;

    /// Opens a new stream over the content. Every call starts from the beginning.
    fn open_stream(&self) -> Result<Stream, E>;

    /// Opens a stream which publishes the hash into this input once it's closed.
    fn open_digesting_stream(&self) -> Result<DigestingReader<Stream>, E>
    where
        Self: Sized,
    {
        Ok(digesting::wrap_with(self, self.open_stream()?, self.algorithm()))
    }

    /// Returns the hash, reading the whole content through a digesting stream first if the hash
    /// isn't available yet.
    ///
    /// Several callers may drain the same input at once; the first one to close publishes the
    /// hash and the others return that hash.
    fn compute_hash(&self) -> Result<&[u8], E>
    where
        Self: Sized,
    {
        if !self.is_hash_computed() {
            debug!("Draining {} to compute its hashcode", self.name());
            let mut stream = self.open_digesting_stream()?;
            if let Err(err) = io::copy(&mut stream, &mut io::sink()) {
                stream.discard();
                return Err(E::IOFailure(self.name().to_owned(), err.into()));
            }
            match stream.close() {
                Ok(()) | Err(E::HashAlreadyComputed) => {}
                Err(err) => return Err(err),
            }
        }
        self.hash()
    }
}

/// Input produced by `InputFactory`: either fully read into memory or kept as a reference.
#[derive(Debug, Clone)]
pub enum AnyInput {
    InMemory(InMemoryInput),
    Reference(ReferenceInput),
}

impl AnyInput {
    pub fn as_in_memory(&self) -> Option<&InMemoryInput> {
        match self {
            AnyInput::InMemory(input) => Some(input),
            AnyInput::Reference(..) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&ReferenceInput> {
        match self {
            AnyInput::Reference(input) => Some(input),
            AnyInput::InMemory(..) => None,
        }
    }

    fn inner(&self) -> &dyn Input {
        match self {
            AnyInput::InMemory(input) => input,
            AnyInput::Reference(input) => input,
        }
    }
}

impl HasHash for AnyInput {
    fn hash_cell(&self) -> &HashCell {
        self.inner().hash_cell()
    }
}

impl Input for AnyInput {
    fn name(&self) -> &str {
        self.inner().name()
    }
    fn algorithm(&self) -> Algorithm {
        self.inner().algorithm()
    }
    fn open_stream(&self) -> Result<Stream, E> {
        self.inner().open_stream()
    }
}

impl From<InMemoryInput> for AnyInput {
    fn from(input: InMemoryInput) -> Self {
        AnyInput::InMemory(input)
    }
}

impl From<ReferenceInput> for AnyInput {
    fn from(input: ReferenceInput) -> Self {
        AnyInput::Reference(input)
    }
}
