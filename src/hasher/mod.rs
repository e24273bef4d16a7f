mod algorithm;
pub mod blake;
mod error;
pub mod rustcrypto;

pub use algorithm::{Accumulator, Algorithm, DEFAULT_ALGORITHM};
pub use error::E;

/// A trait that defines the behavior of a digest accumulator.
/// Implementers of this trait must also implement `Send` and `Sync`.
///
/// An accumulator is single-use. It is created for exactly one byte sequence:
/// - Add content while reading (with method `absorb(..)`).
/// - Finalize hash calculation (with method `finish()`).
/// - Request the hash (with method `hash()`).
///
/// After `finish()` the accumulator rejects any further data.
pub trait Hasher: Send + Sync {
    /// Absorbs data into the hasher. This method might be called multiple times during the
    /// reading of a source.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    ///
    /// # Returns
    ///
    /// - `Err(E::AlreadyFinished)` if `finish()` was already called.
    fn absorb(&mut self, data: &[u8]) -> Result<(), E>;

    /// Finalizes the hashing process. Can be called only once.
    fn finish(&mut self) -> Result<(), E>;

    /// Retrieves the computed hash. Fails with `E::NotFinished` if `finish()` wasn't called yet.
    fn hash(&self) -> Result<&[u8], E>;

    /// Length of the produced hash in bytes.
    fn digest_length(&self) -> usize;
}
