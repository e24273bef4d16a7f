pub mod buffering;
mod error;
pub mod mapping;

pub use buffering::Buffering;
pub use error::E;
use std::{fmt::Debug, io::Read, path::PathBuf};
use url::Url;

/// Byte stream handed out by inputs and openers.
pub type Stream = Box<dyn Read + Send>;

/// A trait that resolves a locator into a fresh byte stream.
/// Implementers of this trait must also implement `Send` and `Sync`.
///
/// `ReferenceInput` keeps one instance of an opener and calls it every time somebody asks for
/// the content:
/// - once by the factory, to check the resource is reachable (the stream is dropped right away);
/// - once per `open_stream()` call afterwards.
///
/// Each call must return a stream positioned at the beginning of the content.
pub trait Opener: Send + Sync + Debug {
    /// Opens the resource behind `locator`.
    ///
    /// # Returns
    ///
    /// - `Result<Stream, E>`: On success, returns a stream over the content. On failure,
    ///   returns an error of type `E`.
    fn open(&self, locator: &Url) -> Result<Stream, E>;
}

/// Converts a `file:` URL into a local path.
pub(crate) fn local_path(locator: &Url) -> Result<PathBuf, E> {
    if locator.scheme() != "file" {
        return Err(E::UnsupportedScheme(locator.scheme().to_owned()));
    }
    locator
        .to_file_path()
        .map_err(|_| E::NotLocalFile(locator.to_string()))
}
