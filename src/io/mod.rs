/*!
# IO utilities

Corpus reading ([reader::DocReader]) and Communication writing/reading ([writer::DelimitedWriter], [reader::CommunicationReader]).

Files whose name ends with `gz` (case insensitive) are transparently (de)compressed.
!*/
pub mod reader;
pub mod writer;

use std::path::Path;

/// Whether `path` names a gzip file.
pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with("gz"))
        .unwrap_or(false)
}
