use super::{blake::Blake, rustcrypto::RustCrypto, Hasher, E};
use std::{fmt, str::FromStr};

/// Algorithm used when none (or a blank name) is given.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Sha256;

/// Named digest algorithm. Stateless; every call to [`Algorithm::accumulator`] gives a fresh
/// single-use accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[cfg(feature = "legacy")]
    Md5,
    #[cfg(feature = "legacy")]
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl Algorithm {
    /// Resolves an algorithm by name. Matching ignores case as well as `-` and `_`, so
    /// `"SHA-256"`, `"sha256"` and `"Sha_256"` are the same algorithm.
    ///
    /// # Returns
    ///
    /// - `Err(E::Unsupported)` if no implementation is available for the name.
    pub fn resolve(name: &str) -> Result<Self, E> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            #[cfg(feature = "legacy")]
            "MD5" => Ok(Algorithm::Md5),
            #[cfg(feature = "legacy")]
            "SHA1" | "SHA" => Ok(Algorithm::Sha1),
            "SHA224" => Ok(Algorithm::Sha224),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA384" => Ok(Algorithm::Sha384),
            "SHA512" => Ok(Algorithm::Sha512),
            "BLAKE3" => Ok(Algorithm::Blake3),
            _ => Err(E::Unsupported(name.to_owned())),
        }
    }

    /// Same as [`Algorithm::resolve`], but a blank name gives [`DEFAULT_ALGORITHM`].
    pub fn resolve_or_default(name: &str) -> Result<Self, E> {
        if name.trim().is_empty() {
            Ok(DEFAULT_ALGORITHM)
        } else {
            Self::resolve(name)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "legacy")]
            Algorithm::Md5 => "MD5",
            #[cfg(feature = "legacy")]
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha224 => "SHA-224",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha384 => "SHA-384",
            Algorithm::Sha512 => "SHA-512",
            Algorithm::Blake3 => "BLAKE3",
        }
    }

    pub fn digest_length(&self) -> usize {
        self.accumulator().digest_length()
    }

    /// Creates a new accumulator for one byte sequence.
    pub fn accumulator(&self) -> Accumulator {
        let repr = match self {
            #[cfg(feature = "legacy")]
            Algorithm::Md5 => AccumulatorRepr::Md5(RustCrypto::new()),
            #[cfg(feature = "legacy")]
            Algorithm::Sha1 => AccumulatorRepr::Sha1(RustCrypto::new()),
            Algorithm::Sha224 => AccumulatorRepr::Sha224(RustCrypto::new()),
            Algorithm::Sha256 => AccumulatorRepr::Sha256(RustCrypto::new()),
            Algorithm::Sha384 => AccumulatorRepr::Sha384(RustCrypto::new()),
            Algorithm::Sha512 => AccumulatorRepr::Sha512(RustCrypto::new()),
            Algorithm::Blake3 => AccumulatorRepr::Blake3(Blake::new()),
        };
        Accumulator {
            algorithm: *self,
            repr,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = E;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

enum AccumulatorRepr {
    #[cfg(feature = "legacy")]
    Md5(RustCrypto<md5::Md5>),
    #[cfg(feature = "legacy")]
    Sha1(RustCrypto<sha1::Sha1>),
    Sha224(RustCrypto<sha2::Sha224>),
    Sha256(RustCrypto<sha2::Sha256>),
    Sha384(RustCrypto<sha2::Sha384>),
    Sha512(RustCrypto<sha2::Sha512>),
    Blake3(Blake),
}

/// Single-use digest state produced by [`Algorithm::accumulator`].
pub struct Accumulator {
    algorithm: Algorithm,
    repr: AccumulatorRepr,
}

impl Accumulator {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn inner(&self) -> &dyn Hasher {
        match &self.repr {
            #[cfg(feature = "legacy")]
            AccumulatorRepr::Md5(h) => h,
            #[cfg(feature = "legacy")]
            AccumulatorRepr::Sha1(h) => h,
            AccumulatorRepr::Sha224(h) => h,
            AccumulatorRepr::Sha256(h) => h,
            AccumulatorRepr::Sha384(h) => h,
            AccumulatorRepr::Sha512(h) => h,
            AccumulatorRepr::Blake3(h) => h,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Hasher {
        match &mut self.repr {
            #[cfg(feature = "legacy")]
            AccumulatorRepr::Md5(h) => h,
            #[cfg(feature = "legacy")]
            AccumulatorRepr::Sha1(h) => h,
            AccumulatorRepr::Sha224(h) => h,
            AccumulatorRepr::Sha256(h) => h,
            AccumulatorRepr::Sha384(h) => h,
            AccumulatorRepr::Sha512(h) => h,
            AccumulatorRepr::Blake3(h) => h,
        }
    }
}

impl Hasher for Accumulator {
    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        self.inner_mut().absorb(data)
    }
    fn finish(&mut self) -> Result<(), E> {
        self.inner_mut().finish()
    }
    fn hash(&self) -> Result<&[u8], E> {
        self.inner().hash()
    }
    fn digest_length(&self) -> usize {
        self.inner().digest_length()
    }
}
