/*! Reading utilities

[DocReader] reads annotated documents from JSON Lines corpora,
[CommunicationReader] reads back the streams produced by [crate::io::writer::DelimitedWriter].
!*/
mod concrete;
mod docreader;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

pub use concrete::CommunicationReader;
pub use docreader::{DocReader, Reader};

/// Open `src`, decompressing it on the fly if it is gzipped.
fn open(src: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(src)?;
    if super::is_gzipped(src) {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(file))
    }
}
