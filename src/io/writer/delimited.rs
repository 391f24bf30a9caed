//! Varint-delimited Avro writer.
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, error};

use crate::concrete::{Communication, SCHEMA};
use crate::error::Error;

use super::WriterTrait;

/// Output file, gzipped or not.
pub enum OutputStream {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputStream {
    /// Create `path`, compressing if its name ends with `gz`.
    ///
    /// Fails if `path` already exists.
    pub fn create(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            error!("{:?} already exists!", path);
            return Err(
                io::Error::new(io::ErrorKind::AlreadyExists, format!("{:?}", path)).into(),
            );
        }

        let fh = BufWriter::new(File::create(path)?);
        if crate::io::is_gzipped(path) {
            debug!("gzipping output to {:?}", path);
            Ok(OutputStream::Gzip(GzEncoder::new(fh, Compression::default())))
        } else {
            Ok(OutputStream::Plain(fh))
        }
    }

    /// Write the gzip trailer if needed, and flush.
    pub fn finish(self) -> io::Result<()> {
        let mut inner = match self {
            OutputStream::Plain(w) => w,
            OutputStream::Gzip(enc) => enc.finish()?,
        };
        inner.flush()
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Plain(w) => w.write(buf),
            OutputStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.flush(),
            OutputStream::Gzip(w) => w.flush(),
        }
    }
}

/// Write `value` as an unsigned LEB128 varint.
pub fn write_varint<W: Write>(writer: &mut W, mut value: u64) -> io::Result<()> {
    let mut buf = [0u8; 10];
    let mut len = 0;
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf[len] = byte;
            len += 1;
            break;
        }
        buf[len] = byte | 0x80;
        len += 1;
    }
    writer.write_all(&buf[..len])
}

/// Read an unsigned LEB128 varint.
///
/// Returns [None] if the stream ends before the first byte.
pub fn read_varint<R: Read>(reader: &mut R) -> io::Result<Option<u64>> {
    let mut value = 0u64;
    let mut shift = 0;
    let mut byte = [0u8];
    loop {
        if reader.read(&mut byte)? == 0 {
            if shift == 0 {
                return Ok(None);
            }
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated length prefix",
            ));
        }
        if shift >= 64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "length prefix is too long",
            ));
        }
        value |= u64::from(byte[0] & 0x7f) << shift;
        if byte[0] & 0x80 == 0 {
            return Ok(Some(value));
        }
        shift += 7;
    }
}

/// Encode a communication as an Avro datum, without length prefix.
pub fn encode(comm: &Communication) -> Result<Vec<u8>, Error> {
    let value = avro_rs::to_value(comm)?;
    Ok(avro_rs::to_avro_datum(&SCHEMA, value)?)
}

/// Write a length-prefixed communication to `writer`, returning the number of bytes of the datum.
pub fn write_delimited<W: Write>(writer: &mut W, comm: &Communication) -> Result<usize, Error> {
    let datum = encode(comm)?;
    write_varint(writer, datum.len() as u64)?;
    writer.write_all(&datum)?;
    Ok(datum.len())
}

/// Writes length-delimited communications to a file.
pub struct DelimitedWriter {
    stream: Option<OutputStream>,
    nb_written: usize,
}

impl DelimitedWriter {
    pub fn new(stream: OutputStream) -> Self {
        Self {
            stream: Some(stream),
            nb_written: 0,
        }
    }

    /// Create a writer on a new file. See [OutputStream::create].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Ok(Self::new(OutputStream::create(path)?))
    }

    /// Number of communications written so far.
    pub fn nb_written(&self) -> usize {
        self.nb_written
    }
}

impl WriterTrait for DelimitedWriter {
    type Item = Communication;

    fn write(&mut self, vals: Vec<Communication>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &Communication) -> Result<(), Error> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| Error::Custom("writing to a closed writer".to_string()))?;
        write_delimited(stream, val)?;
        self.nb_written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        match self.stream.take() {
            Some(stream) => Ok(stream.finish()?),
            None => {
                debug!("writer already closed");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::concrete::MetadataFactory;
    use crate::convert::{fixtures, Converter};

    #[test]
    fn varint() {
        for (value, bytes) in [
            (0u64, vec![0x00]),
            (1, vec![0x01]),
            (127, vec![0x7f]),
            (128, vec![0x80, 0x01]),
            (300, vec![0xac, 0x02]),
            (16_384, vec![0x80, 0x80, 0x01]),
        ] {
            let mut buf = Vec::new();
            write_varint(&mut buf, value).unwrap();
            assert_eq!(buf, bytes);
            assert_eq!(read_varint(&mut Cursor::new(&buf)).unwrap(), Some(value));
        }
    }

    #[test]
    fn varint_eof() {
        assert_eq!(read_varint(&mut Cursor::new(vec![])).unwrap(), None);
        let truncated = read_varint(&mut Cursor::new(vec![0x80]));
        assert_eq!(
            truncated.unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn delimited_block() {
        let comm = Converter::new(MetadataFactory::new("t", 0))
            .convert(&fixtures::cat_sat())
            .unwrap();
        let mut buf = Vec::new();
        let len = write_delimited(&mut buf, &comm).unwrap();

        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_varint(&mut cursor).unwrap(), Some(len as u64));
        assert_eq!(cursor.position() as usize + len, buf.len());
    }

    #[test]
    fn refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.avro");
        std::fs::write(&path, b"").unwrap();
        assert!(matches!(
            DelimitedWriter::from_path(&path),
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::AlreadyExists
        ));
    }

    #[test]
    fn closed_writer() {
        let dir = tempfile::tempdir().unwrap();
        let mut wr = DelimitedWriter::from_path(&dir.path().join("out.avro")).unwrap();
        wr.close().unwrap();
        // closing twice is fine
        wr.close().unwrap();

        let comm = Converter::default().convert(&fixtures::cat_sat()).unwrap();
        assert!(wr.write_single(&comm).is_err());
        assert_eq!(wr.nb_written(), 0);
    }
}
