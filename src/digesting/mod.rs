use crate::{
    hasher::{Accumulator, Algorithm, Hasher},
    input::{HasHash, HashCell},
    E,
};
use log::{debug, warn};
use std::io::{self, Read};

/// Wraps `source` so that every byte read from it is digested with `algorithm`. The hash is
/// published into `target` when the returned reader is closed (or dropped).
///
/// The algorithm is resolved before anything is read, so an unknown name fails right here with
/// `E::UnsupportedAlgorithm`.
///
/// `algorithm` isn't checked against `Input::algorithm()` of the target: wrapping an input with
/// another algorithm publishes a hash of that other algorithm. To digest an input with its own
/// algorithm use `Input::open_digesting_stream`.
pub fn wrap<T: HasHash + ?Sized, R: Read>(
    target: &T,
    source: R,
    algorithm: &str,
) -> Result<DigestingReader<R>, E> {
    let algorithm = Algorithm::resolve_or_default(algorithm)?;
    Ok(wrap_with(target, source, algorithm))
}

/// Same as [`wrap`] for an already resolved algorithm.
pub fn wrap_with<T: HasHash + ?Sized, R: Read>(
    target: &T,
    source: R,
    algorithm: Algorithm,
) -> DigestingReader<R> {
    DigestingReader {
        source: Some(source),
        accumulator: algorithm.accumulator(),
        target: target.hash_cell().clone(),
        published: false,
    }
}

/// Pass-through reader which digests everything it hands out.
///
/// The hash covers exactly the bytes that were read before closing. If the reader is closed
/// before the source is drained, the hash reflects only the consumed part; checking for
/// completeness is up to the caller.
pub struct DigestingReader<R: Read> {
    source: Option<R>,
    accumulator: Accumulator,
    target: HashCell,
    published: bool,
}

impl<R: Read> DigestingReader<R> {
    /// Closes the source, finalizes the digest and publishes it into the target.
    ///
    /// Only the first call does anything; later calls return `Ok(())` and never touch the
    /// target again.
    ///
    /// # Returns
    ///
    /// - `Err(E::HashAlreadyComputed)` if the target got its hash from somewhere else meanwhile.
    pub fn close(&mut self) -> Result<(), E> {
        if self.published {
            return Ok(());
        }
        self.published = true;
        drop(self.source.take());
        self.accumulator.finish()?;
        let hash = self.accumulator.hash()?.to_vec();
        debug!(
            "Generated {} hashcode on close: {}",
            self.accumulator.algorithm(),
            hex::encode_upper(&hash)
        );
        self.target.set(hash)
    }

    /// Closes the source without publishing anything. Used when reading failed and the digest
    /// would describe only a part of the content.
    pub fn discard(mut self) {
        self.published = true;
        drop(self.source.take());
    }

    pub fn is_closed(&self) -> bool {
        self.published
    }
}

impl<R: Read> Read for DigestingReader<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let Some(source) = self.source.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "Digesting stream is already closed",
            ));
        };
        let bytes_read = source.read(buffer)?;
        self.accumulator
            .absorb(&buffer[..bytes_read])
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(bytes_read)
    }
}

impl<R: Read> Drop for DigestingReader<R> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("Fail to publish hashcode on drop: {err}");
        }
    }
}

#[cfg(test)]
mod test {
    use super::{wrap, wrap_with};
    use crate::{
        hasher::Algorithm,
        input::{HasHash, HashCell},
        Kind, E,
    };
    use sha2::{Digest, Sha256};
    use std::io::{self, Read};

    struct Target {
        hash: HashCell,
    }

    impl HasHash for Target {
        fn hash_cell(&self) -> &HashCell {
            &self.hash
        }
    }

    fn target() -> Target {
        Target {
            hash: HashCell::new(),
        }
    }

    #[test]
    fn publishes_on_close() -> Result<(), E> {
        let target = target();
        let mut reader = wrap(&target, &b"some value"[..], "SHA-256")?;
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        assert_eq!(content, b"some value");
        assert!(!target.is_hash_computed());
        reader.close()?;
        assert_eq!(target.hash()?, Sha256::digest(b"some value").as_slice());
        Ok(())
    }

    #[test]
    fn idempotent_close() -> Result<(), E> {
        let target = target();
        let mut reader = wrap_with(&target, &b"abc"[..], Algorithm::Sha256);
        io::copy(&mut reader, &mut io::sink())?;
        reader.close()?;
        let first = target.hash()?.to_vec();
        reader.close()?;
        assert!(reader.is_closed());
        assert_eq!(target.hash()?, first.as_slice());
        Ok(())
    }

    #[test]
    fn publishes_on_drop() -> Result<(), E> {
        let target = target();
        {
            let mut reader = wrap_with(&target, &b"dropped"[..], Algorithm::Blake3);
            io::copy(&mut reader, &mut io::sink())?;
        }
        assert_eq!(target.hash()?, blake3::hash(b"dropped").as_bytes());
        Ok(())
    }

    #[test]
    fn partial_read() -> Result<(), E> {
        let target = target();
        let mut reader = wrap_with(&target, &b"0123456789"[..], Algorithm::Sha256);
        let mut head = [0u8; 4];
        reader.read_exact(&mut head)?;
        reader.close()?;
        assert_eq!(target.hash()?, Sha256::digest(b"0123").as_slice());
        Ok(())
    }

    #[test]
    fn read_after_close() -> Result<(), E> {
        let target = target();
        let mut reader = wrap_with(&target, &b"abc"[..], Algorithm::Sha256);
        reader.close()?;
        let mut buffer = [0u8; 8];
        assert!(reader.read(&mut buffer).is_err());
        Ok(())
    }

    #[test]
    fn discard_publishes_nothing() -> Result<(), E> {
        let target = target();
        let mut reader = wrap_with(&target, &b"abc"[..], Algorithm::Sha256);
        let mut head = [0u8; 1];
        reader.read_exact(&mut head)?;
        reader.discard();
        assert!(!target.is_hash_computed());
        Ok(())
    }

    #[test]
    fn unknown_algorithm() {
        let target = target();
        let err = wrap(&target, &b"abc"[..], "unknown").err();
        assert_eq!(err.map(|e| e.kind()), Some(Kind::UnsupportedAlgorithm));
    }

    #[test]
    fn target_already_hashed() -> Result<(), E> {
        let target = Target {
            hash: HashCell::computed(vec![1; 32]),
        };
        let mut reader = wrap_with(&target, &b"abc"[..], Algorithm::Sha256);
        io::copy(&mut reader, &mut io::sink())?;
        assert!(matches!(reader.close(), Err(E::HashAlreadyComputed)));
        assert!(reader.close().is_ok());
        assert_eq!(target.hash()?, &[1; 32]);
        Ok(())
    }
}
