//! Command line arguments and parameters management/parsing.
use std::path::{Path, PathBuf};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "concrete-agiga",
    about = "Annotated Gigaword to Concrete converter."
)]
/// Converts one or more annotated corpora into a single Communication file.
pub struct ConcreteAgiga {
    #[structopt(
        parse(from_os_str),
        required = true,
        min_values = 2,
        help = "1 or more input corpus files (JSON Lines, optionally gzipped), followed by the output Communication file (gzipped if its name ends with gz)"
    )]
    pub paths: Vec<PathBuf>,

    #[structopt(
        long = "step",
        default_value = "250",
        help = "log progress every <step> documents"
    )]
    pub step: usize,

    #[structopt(long = "strict", help = "abort on inconsistent documents")]
    pub strict: bool,

    #[structopt(
        long = "parallel",
        help = "convert documents in parallel (output order is kept)"
    )]
    pub parallel: bool,

    #[structopt(
        long = "chunk-size",
        default_value = "64",
        help = "number of documents converted at once in parallel mode"
    )]
    pub chunk_size: usize,
}

impl ConcreteAgiga {
    /// Split paths into inputs and output.
    pub fn split_paths(&self) -> Option<(&[PathBuf], &Path)> {
        match self.paths.split_last() {
            Some((output, inputs)) if !inputs.is_empty() => Some((inputs, output.as_path())),
            _ => None,
        }
    }

    /// Chunk size, if parallel mode is on.
    pub fn chunk_size(&self) -> Option<usize> {
        if self.parallel {
            Some(self.chunk_size)
        } else {
            None
        }
    }
}
