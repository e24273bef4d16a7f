use crate::{hasher, reader};
use std::io;
use thiserror::Error;

/// Class of an error, independent of where it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A required argument is missing or blank, or the source cannot be opened.
    InvalidArgument,
    /// The requested digest algorithm isn't available.
    UnsupportedAlgorithm,
    /// The hash was requested before it was computed (or set twice).
    IllegalState,
    /// Reading an already created input failed.
    IOFailure,
}

#[derive(Error, Debug)]
pub enum E {
    #[error("Input can not be null or empty")]
    EmptySource,
    #[error("Must supply a valid name/identifier for the input")]
    InvalidName,
    #[error("Malformed format {0}: {1}")]
    MalformedLocator(String, String),
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    #[error("Can not open stream from {0}: {1}")]
    InvalidSource(String, reader::E),
    #[error("Specified method {0} is not available")]
    UnsupportedAlgorithm(String),
    #[error("Hashcode is not computed yet")]
    HashNotComputed,
    #[error("Hashcode is already computed")]
    HashAlreadyComputed,
    #[error("Hasher error: {0}")]
    Hasher(hasher::E),
    #[error("Fail to read {0}: {1}")]
    IOFailure(String, reader::E),
    #[error("IO: {0}")]
    IO(#[from] io::Error),
}

impl E {
    pub fn kind(&self) -> Kind {
        match self {
            E::EmptySource
            | E::InvalidName
            | E::MalformedLocator(..)
            | E::InvalidOption(..)
            | E::InvalidSource(..) => Kind::InvalidArgument,
            E::UnsupportedAlgorithm(..) => Kind::UnsupportedAlgorithm,
            E::HashNotComputed | E::HashAlreadyComputed | E::Hasher(..) => Kind::IllegalState,
            E::IOFailure(..) | E::IO(..) => Kind::IOFailure,
        }
    }

    pub(crate) fn unreadable<S: ToString>(source: S, err: io::Error) -> E {
        E::InvalidSource(source.to_string(), reader::E::from(err))
    }
}

impl From<hasher::E> for E {
    fn from(err: hasher::E) -> Self {
        match err {
            hasher::E::Unsupported(name) => E::UnsupportedAlgorithm(name),
            err => E::Hasher(err),
        }
    }
}
