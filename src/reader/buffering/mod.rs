use super::{local_path, Opener, Stream, E};
use std::{fs::File, io::BufReader};
use url::Url;

/// Opens local files and reads them on demand through a buffer.
#[derive(Default, Debug, Clone, Copy)]
pub struct Buffering;

impl Opener for Buffering {
    fn open(&self, locator: &Url) -> Result<Stream, E> {
        let file = File::open(local_path(locator)?)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
