/*! JSON Lines corpus reader.

One [Document] per line. Empty lines are skipped, and the corpus may be wrapped in a JSON array
whose brackets sit on their own lines.
!*/
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::agiga::Document;
use crate::error::Error;

/// Lazy document reader over any [Read].
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type DocReader = Reader<Box<dyn Read>>;

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(inner: T) -> Self {
        Self {
            lines: BufReader::new(inner).lines(),
        }
    }
}

impl DocReader {
    /// Open a (possibly gzipped) corpus file.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        Ok(Self::new(super::open(src)?))
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            match line.trim() {
                // empty line or beginning of a JSON array
                "" | "[" => continue,
                // end of JSON array
                "]" => return None,
                s => {
                    // array elements are comma separated
                    let s = s.strip_suffix(',').unwrap_or(s);
                    return Some(serde_json::from_str::<Document>(s).map_err(Error::Serde));
                }
            }
        }
    }
}
