mod options;

use crate::{
    digesting,
    hasher::{Algorithm, Hasher},
    input::{AnyInput, InMemoryInput, ReferenceInput},
    reader::{Opener, Stream},
    E,
};
use log::debug;
pub use options::{Options, ReferencePolicy, DEFAULT_BUFFER_SIZE};
use std::{
    env, fmt,
    io::{BufReader, ErrorKind, Read},
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

/// Any source `InputFactory` can read from.
pub enum Source {
    Path(PathBuf),
    Url(Url),
    /// Content and its name.
    Bytes(Vec<u8>, String),
    /// Stream and its name.
    Stream(Stream, String),
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "Source::Path({})", path.display()),
            Source::Url(url) => write!(f, "Source::Url({url})"),
            Source::Bytes(bytes, name) => {
                write!(f, "Source::Bytes({name}, {} bytes)", bytes.len())
            }
            Source::Stream(_, name) => write!(f, "Source::Stream({name})"),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::Path(path)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_path_buf())
    }
}

impl From<Url> for Source {
    fn from(url: Url) -> Self {
        Source::Url(url)
    }
}

/// Reads documents into `Input`s and fingerprints their content.
///
/// Byte and stream sources are read into memory right away; the hash is computed during that
/// same single reading pass, so the returned `InMemoryInput` always has it. Paths and URLs are
/// handled according to the `ReferencePolicy` (by default they become `ReferenceInput`s whose
/// hash is computed later).
///
/// The factory has no mutable state; one instance can serve several threads.
///
/// # Example
///
/// ```
/// use hashed_input::{HasHash, InputFactory};
///
/// let input = InputFactory::new().read_bytes(b"some value", "some value").unwrap();
/// assert_eq!(input.hash().unwrap().len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct InputFactory {
    algorithm: Algorithm,
    policy: ReferencePolicy,
    opener: Arc<dyn Opener>,
    buffer_size: usize,
}

impl Default for InputFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFactory {
    /// Creates a factory with default settings (`SHA-256`, deferred hashing of references).
    pub fn new() -> Self {
        Options::new().factory()
    }

    /// Creates a factory using the given digest algorithm. A blank name gives `SHA-256`.
    ///
    /// # Returns
    ///
    /// - `Err(E::UnsupportedAlgorithm)` if there is no such algorithm. Nothing is read.
    pub fn with_algorithm<S: AsRef<str>>(name: S) -> Result<Self, E> {
        Ok(Options::new().algorithm(name)?.factory())
    }

    pub(crate) fn new_with_options(opt: Options) -> Self {
        Self {
            algorithm: opt.algorithm,
            policy: opt.policy,
            opener: opt.opener,
            buffer_size: opt.buffer_size,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    pub fn read(&self, source: Source) -> Result<AnyInput, E> {
        match source {
            Source::Path(path) => self.read_path(path),
            Source::Url(url) => self.read_url(&url),
            Source::Bytes(bytes, name) => self.read_bytes(&bytes, &name),
            Source::Stream(stream, name) => self.read_stream(stream, &name),
        }
    }

    /// Reads a file. Relative paths are resolved against the current directory; the path is
    /// then converted to a `file:` URL and read as such.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<AnyInput, E> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(E::EmptySource);
        }
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|err| E::unreadable(path.display(), err))?
                .join(path)
        };
        let url = Url::from_file_path(&absolute).map_err(|_| {
            E::MalformedLocator(
                path.display().to_string(),
                String::from("path can't be converted into URL"),
            )
        })?;
        self.read_url(&url)
    }

    /// Parses `url` and reads it with [`InputFactory::read_url`].
    pub fn read_url_str(&self, url: &str) -> Result<AnyInput, E> {
        let url = url.trim();
        if url.is_empty() {
            return Err(E::EmptySource);
        }
        let url =
            Url::parse(url).map_err(|err| E::MalformedLocator(url.to_owned(), err.to_string()))?;
        self.read_url(&url)
    }

    /// Reads a resource given by URL. The resource has to be reachable at this moment, otherwise
    /// `E::InvalidSource` is returned. What happens next depends on the `ReferencePolicy`.
    pub fn read_url(&self, url: &Url) -> Result<AnyInput, E> {
        let name = derive_name(url);
        let stream = self
            .opener
            .open(url)
            .map_err(|err| E::InvalidSource(url.to_string(), err))?;
        match self.policy {
            ReferencePolicy::Deferred => {
                drop(stream);
                debug!("{url} is reachable; hashcode generation is deferred");
                Ok(self.reference(url, name).into())
            }
            ReferencePolicy::Digest => {
                debug!("Generating hashcode for {name} using {} algorithm", self.algorithm);
                let input = self.reference(url, name);
                let mut reader = digesting::wrap_with(&input, stream, self.algorithm);
                if let Err(err) = self.consume(&mut reader, url.as_str(), |_| Ok(())) {
                    reader.discard();
                    return Err(err);
                }
                reader.close()?;
                Ok(input.into())
            }
            ReferencePolicy::Materialize => Ok(self.materialize(stream, name)?.into()),
        }
    }

    /// Reads `bytes` into memory. `name` is mandatory.
    pub fn read_bytes(&self, bytes: &[u8], name: &str) -> Result<AnyInput, E> {
        self.read_stream(bytes, name)
    }

    /// Reads `stream` to its end into memory. `name` is mandatory.
    ///
    /// The stream is read once; the hash is computed while reading. If reading fails, no input
    /// is produced.
    pub fn read_stream<R: Read>(&self, stream: R, name: &str) -> Result<AnyInput, E> {
        if name.trim().is_empty() {
            return Err(E::InvalidName);
        }
        Ok(self.materialize(stream, name.to_owned())?.into())
    }

    fn reference(&self, url: &Url, name: String) -> ReferenceInput {
        ReferenceInput::with_opener(url.clone(), name, self.algorithm, self.opener.clone())
    }

    fn materialize<R: Read>(&self, stream: R, name: String) -> Result<InMemoryInput, E> {
        debug!("Generating hashcode for {name} using {} algorithm", self.algorithm);
        let mut accumulator = self.algorithm.accumulator();
        let mut content = Vec::new();
        let mut reader = BufReader::new(stream);
        self.consume(&mut reader, &name, |chunk| {
            accumulator.absorb(chunk)?;
            content.extend_from_slice(chunk);
            Ok(())
        })?;
        accumulator.finish()?;
        let hash = accumulator.hash()?.to_vec();
        debug!("Generated hashcode for {name} is {}", hex::encode_upper(&hash));
        Ok(InMemoryInput::with_hash(content, name, self.algorithm, hash))
    }

    /// Reads `reader` to its end in chunks of `buffer_size` and hands every chunk to `apply`.
    fn consume<R: Read, F: FnMut(&[u8]) -> Result<(), E>>(
        &self,
        reader: &mut R,
        source: &str,
        mut apply: F,
    ) -> Result<(), E> {
        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(E::unreadable(source, err)),
            };
            apply(&buffer[..bytes_read])?;
        }
        Ok(())
    }
}

/// Name of a URL source: its path, plus the query if there is one.
fn derive_name(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}

/// Reads a file with a default factory.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<AnyInput, E> {
    InputFactory::new().read_path(path)
}

/// Reads a URL with a default factory.
pub fn read_url(url: &Url) -> Result<AnyInput, E> {
    InputFactory::new().read_url(url)
}

/// Reads bytes with a default factory.
pub fn read_bytes(bytes: &[u8], name: &str) -> Result<AnyInput, E> {
    InputFactory::new().read_bytes(bytes, name)
}

/// Reads a stream with a default factory.
pub fn read_stream<R: Read>(stream: R, name: &str) -> Result<AnyInput, E> {
    InputFactory::new().read_stream(stream, name)
}
