//! Annotated Gigaword to Concrete conversion pipeline
//!
//! Reads every input corpus in order, converts each document into a Communication
//! and appends it to a single output stream, preserving input order.
//!
//! # Processing
//! 1. Input paths are checked: each one has to exist and be a regular file.
//! 1. Documents are converted one by one, or by chunks in parallel if a chunk size is set.
//! 1. Each Communication is validated. Inconsistencies are logged, or abort the run in strict mode.
//! 1. Communications are written, in input order.
//!
//! The writer is always closed, even when a document fails.
use std::path::{Path, PathBuf};
use std::time::Instant;

use itertools::Itertools;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::agiga::Document;
use crate::concrete::{validate, Communication, MetadataFactory};
use crate::convert::Converter;
use crate::error::Error;
use crate::io::reader::DocReader;
use crate::io::writer::{DelimitedWriter, WriterTrait};
use crate::pipeline::Pipeline;

/// Default progress reporting interval, in documents.
pub const DEFAULT_STEP: usize = 250;

pub struct AgigaToConcrete {
    inputs: Vec<PathBuf>,
    output: PathBuf,
    step: usize,
    strict: bool,
    chunk_size: Option<usize>,
}

impl AgigaToConcrete {
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            inputs,
            output,
            step: DEFAULT_STEP,
            strict: false,
            chunk_size: None,
        }
    }

    /// Log progress every `step` documents. `0` disables progress reporting.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Fail on the first inconsistent document instead of warning.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Convert documents in parallel, `chunk_size` at a time.
    pub fn with_chunk_size(mut self, chunk_size: Option<usize>) -> Self {
        self.chunk_size = chunk_size.map(|size| size.max(1));
        self
    }

    fn check_inputs(&self) -> Result<(), Error> {
        for input in &self.inputs {
            if !input.is_file() {
                error!("{:?} does not exist or is not a file", input);
                return Err(Error::InvalidInput(input.clone()));
            }
        }
        Ok(())
    }

    /// Convert and validate a document.
    fn convert(&self, converter: &Converter, doc: &Document) -> Result<Communication, Error> {
        let comm = converter.convert(doc)?;
        let inconsistencies = validate(&comm);
        if !inconsistencies.is_empty() {
            for inconsistency in &inconsistencies {
                warn!("{}: {}", doc.id, inconsistency);
            }
            if self.strict {
                return Err(Error::Inconsistent {
                    doc_id: doc.id.clone(),
                    count: inconsistencies.len(),
                });
            }
        }
        Ok(comm)
    }

    fn write(
        &self,
        writer: &mut DelimitedWriter,
        comm: &Communication,
        start: &Instant,
    ) -> Result<(), Error> {
        writer.write_single(comm)?;
        let count = writer.nb_written();
        if self.step > 0 && count % self.step == 0 {
            info!(
                "wrote {} documents in {:.1} sec",
                count,
                start.elapsed().as_secs_f64()
            );
        }
        Ok(())
    }

    fn process_file(
        &self,
        src: &Path,
        converter: &Converter,
        writer: &mut DelimitedWriter,
        start: &Instant,
    ) -> Result<(), Error> {
        info!("reading from {:?}", src);
        let docs = DocReader::from_path(src)?;

        match self.chunk_size {
            None => {
                for doc in docs {
                    let comm = self.convert(converter, &doc?)?;
                    self.write(writer, &comm, start)?;
                }
            }
            Some(chunk_size) => {
                let chunks = docs.chunks(chunk_size);
                for chunk in &chunks {
                    let chunk: Vec<Document> = chunk.collect::<Result<_, Error>>()?;
                    debug!("converting a chunk of {} documents", chunk.len());

                    // collecting keeps input order
                    let comms: Vec<Communication> = chunk
                        .par_iter()
                        .map(|doc| self.convert(converter, doc))
                        .collect::<Result<_, Error>>()?;

                    for comm in &comms {
                        self.write(writer, comm, start)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Pipeline<usize> for AgigaToConcrete {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Run the conversion, returning the number of written communications.
    fn run(&self) -> Result<usize, Error> {
        info!("concrete-agiga {}", Self::version());
        self.check_inputs()?;

        let start = Instant::now();
        let converter = Converter::new(MetadataFactory::default());
        let mut writer = DelimitedWriter::from_path(&self.output)?;

        let result = self
            .inputs
            .iter()
            .try_for_each(|src| self.process_file(src, &converter, &mut writer, &start));

        // close even on failure, so that what has been written is readable
        let closed = writer.close();
        if let Err(e) = &result {
            error!(
                "stopping after {} documents: {}",
                writer.nb_written(),
                e
            );
        }
        result?;
        closed?;

        info!(
            "done, wrote {} communications to {:?} in {:.1} seconds",
            writer.nb_written(),
            self.output,
            start.elapsed().as_secs_f64()
        );
        Ok(writer.nb_written())
    }
}
