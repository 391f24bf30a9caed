//! Reader for length-delimited Communication streams.
use std::io::{self, Read};
use std::path::Path;

use crate::concrete::{Communication, SCHEMA};
use crate::error::Error;
use crate::io::writer::read_varint;

/// Iterates over the communications of a stream written by [crate::io::writer::DelimitedWriter].
pub struct CommunicationReader<R>
where
    R: Read,
{
    inner: R,
}

impl<R> CommunicationReader<R>
where
    R: Read,
{
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn read_next(&mut self) -> Result<Option<Communication>, Error> {
        let len = match read_varint(&mut self.inner)? {
            Some(len) => len,
            None => return Ok(None),
        };

        let mut datum = Vec::new();
        (&mut self.inner).take(len).read_to_end(&mut datum)?;
        if (datum.len() as u64) < len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("truncated record: expected {} bytes, got {}", len, datum.len()),
            )
            .into());
        }

        let value = avro_rs::from_avro_datum(&SCHEMA, &mut datum.as_slice(), None)?;
        Ok(Some(avro_rs::from_value::<Communication>(&value)?))
    }
}

impl CommunicationReader<Box<dyn Read>> {
    /// Open a (possibly gzipped) communication file.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(super::open(src)?))
    }
}

impl<R> Iterator for CommunicationReader<R>
where
    R: Read,
{
    type Item = Result<Communication, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}
