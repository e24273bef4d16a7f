use super::{HasHash, HashCell, Input};
use crate::{
    hasher::Algorithm,
    reader::{Buffering, Opener, Stream},
    E,
};
use std::sync::Arc;
use url::Url;

/// Input which keeps only a locator. Nothing is read until a stream is opened.
///
/// The hash stays absent until somebody reads the content through a digesting stream (see
/// `Input::open_digesting_stream` and `Input::compute_hash`); it may stay absent forever.
/// Only one digesting read should run at a time: the first one to close sets the hash.
#[derive(Debug, Clone)]
pub struct ReferenceInput {
    locator: Url,
    name: String,
    algorithm: Algorithm,
    opener: Arc<dyn Opener>,
    hash: HashCell,
}

impl ReferenceInput {
    /// Creates a reference to a local resource, read with the `Buffering` opener.
    pub fn new<N: Into<String>>(locator: Url, name: N, algorithm: Algorithm) -> Self {
        Self::with_opener(locator, name, algorithm, Arc::new(Buffering))
    }

    pub fn with_opener<N: Into<String>>(
        locator: Url,
        name: N,
        algorithm: Algorithm,
        opener: Arc<dyn Opener>,
    ) -> Self {
        Self {
            locator,
            name: name.into(),
            algorithm,
            opener,
            hash: HashCell::new(),
        }
    }

    pub fn locator(&self) -> &Url {
        &self.locator
    }
}

impl HasHash for ReferenceInput {
    fn hash_cell(&self) -> &HashCell {
        &self.hash
    }
}

impl Input for ReferenceInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn open_stream(&self) -> Result<Stream, E> {
        self.opener
            .open(&self.locator)
            .map_err(|err| E::IOFailure(self.locator.to_string(), err))
    }
}
