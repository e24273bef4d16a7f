#![doc = include_str!("../README.md")]

pub mod digesting;
mod error;
pub mod factory;
pub mod hasher;
pub mod input;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;

pub use digesting::{wrap, DigestingReader};
pub use error::{Kind, E};
pub use factory::{
    read_bytes, read_path, read_stream, read_url, InputFactory, Options, ReferencePolicy, Source,
};
pub use hasher::{Algorithm, Hasher};
pub use input::{AnyInput, HasHash, HashCell, InMemoryInput, Input, ReferenceInput};
pub use reader::Opener;
pub use url::Url;
