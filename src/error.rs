//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    AvroError(avro_rs::Error),
    Custom(String),
    /// Input path does not exist or is not a regular file.
    InvalidInput(PathBuf),
    /// A mention points to a sentence whose tokenization has not been built.
    MissingTokenization {
        sentence: usize,
        available: usize,
    },
    /// A mention token range is empty or does not fit in its sentence.
    MentionOutOfBounds {
        sentence: usize,
        start: usize,
        end: usize,
        len: usize,
    },
    /// A converted document failed validation (strict mode only).
    Inconsistent {
        doc_id: String,
        count: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::AvroError(e) => write!(f, "avro error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::InvalidInput(p) => write!(f, "{:?} does not exist or is not a file", p),
            Error::MissingTokenization {
                sentence,
                available,
            } => write!(
                f,
                "no tokenization for sentence {} ({} built so far)",
                sentence, available
            ),
            Error::MentionOutOfBounds {
                sentence,
                start,
                end,
                len,
            } => write!(
                f,
                "mention [{}, {}) is out of bounds for sentence {} ({} tokens)",
                start, end, sentence, len
            ),
            Error::Inconsistent { doc_id, count } => {
                write!(f, "document {} has {} inconsistencies", doc_id, count)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<avro_rs::Error> for Error {
    fn from(v: avro_rs::Error) -> Self {
        Self::AvroError(v)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
