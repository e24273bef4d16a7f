use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to read: {0}")]
    IOError(io::Error),
    #[error("Scheme \"{0}\" isn't supported")]
    UnsupportedScheme(String),
    #[error("URL {0} doesn't point to a local file")]
    NotLocalFile(String),
    #[error("File is too big to be mapped into memory ({0} bytes)")]
    FileIsTooBig(u64),
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::IOError(err)
    }
}
