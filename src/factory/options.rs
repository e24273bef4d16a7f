use super::InputFactory;
use crate::{
    hasher::Algorithm,
    reader::{Buffering, Opener},
    E,
};
use std::{mem, sync::Arc};

/// Default size of the chunk used to read byte sources into memory.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Defines what `InputFactory` does with sources given by path or URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// Check the resource can be opened and return a `ReferenceInput` without hash. The hash is
    /// computed later by whoever reads the content through a digesting stream.
    #[default]
    Deferred,
    /// Read the resource once through a digesting stream and return a `ReferenceInput` with the
    /// hash already set. The content isn't kept in memory.
    Digest,
    /// Read the resource into memory and return an `InMemoryInput`.
    Materialize,
}

/// Settings for `InputFactory`.
///
/// ```
/// use hashed_input::{reader::mapping::Mapping, Options, ReferencePolicy};
///
/// let factory = Options::new()
///     .algorithm("SHA-512").unwrap()
///     .policy(ReferencePolicy::Digest)
///     .opener(Mapping)
///     .factory();
/// assert_eq!(factory.algorithm().name(), "SHA-512");
/// ```
#[derive(Debug)]
pub struct Options {
    pub(crate) algorithm: Algorithm,
    pub(crate) policy: ReferencePolicy,
    pub(crate) opener: Arc<dyn Opener>,
    pub(crate) buffer_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::default(),
            policy: ReferencePolicy::default(),
            opener: Arc::new(Buffering),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Sets the digest algorithm by name. A blank name keeps the default `SHA-256`. The name is
    /// checked immediately.
    pub fn algorithm<S: AsRef<str>>(&mut self, name: S) -> Result<&mut Self, E> {
        self.algorithm = Algorithm::resolve_or_default(name.as_ref())?;
        Ok(self)
    }

    pub fn policy(&mut self, policy: ReferencePolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    pub fn opener<O: Opener + 'static>(&mut self, opener: O) -> &mut Self {
        self.opener = Arc::new(opener);
        self
    }

    pub fn buffer_size(&mut self, size: usize) -> Result<&mut Self, E> {
        if size == 0 {
            return Err(E::InvalidOption(String::from("buffer size must be positive")));
        }
        self.buffer_size = size;
        Ok(self)
    }

    pub fn factory(&mut self) -> InputFactory {
        InputFactory::new_with_options(Options {
            algorithm: mem::take(&mut self.algorithm),
            policy: mem::take(&mut self.policy),
            opener: mem::replace(&mut self.opener, Arc::new(Buffering)),
            buffer_size: mem::replace(&mut self.buffer_size, DEFAULT_BUFFER_SIZE),
        })
    }
}
