use crate::{
    reader::{self, Opener, Stream},
    HasHash, Input, Kind, E,
};
use std::io::{self, Read};
use url::Url;

/// Reader which counts how it's used.
pub struct Counting<R> {
    inner: R,
    pub calls: usize,
    pub bytes: usize,
    pub eof_hits: usize,
}

impl<R: Read> Counting<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: 0,
            bytes: 0,
            eof_hits: 0,
        }
    }
}

impl<R: Read> Read for Counting<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let bytes_read = self.inner.read(buffer)?;
        self.calls += 1;
        self.bytes += bytes_read;
        if bytes_read == 0 {
            self.eof_hits += 1;
        }
        Ok(bytes_read)
    }
}

/// Reader which gives `limit` bytes and then fails.
pub struct Failing {
    limit: usize,
    given: usize,
}

impl Failing {
    pub fn new(limit: usize) -> Self {
        Self { limit, given: 0 }
    }
}

impl Read for Failing {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        if self.given >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection lost"));
        }
        let n = buffer.len().min(self.limit - self.given);
        buffer[..n].fill(b'x');
        self.given += n;
        Ok(n)
    }
}

/// Opener whose every stream gives `limit` bytes and then fails.
#[derive(Debug)]
pub struct FailingOpener {
    limit: usize,
}

impl FailingOpener {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Opener for FailingOpener {
    fn open(&self, _locator: &Url) -> Result<Stream, reader::E> {
        Ok(Box::new(Failing::new(self.limit)))
    }
}

/// Reads the whole content of the input through a digesting stream and returns the hash.
pub fn drain<I: Input>(input: &I) -> Result<Vec<u8>, E> {
    let mut stream = input.open_digesting_stream()?;
    io::copy(&mut stream, &mut io::sink())?;
    stream.close()?;
    Ok(input.hash()?.to_vec())
}

pub fn kind<T>(result: Result<T, E>) -> Option<Kind> {
    result.err().map(|err| err.kind())
}
