//! # concrete-agiga
//!
//! Converts Annotated Gigaword documents (tokens, tags, constituency parses,
//! typed dependencies and coreference chains) into Concrete Communications.
//!
//! ## Getting started
//!
//! ```sh
//! concrete-agiga 0.1.0
//! Annotated Gigaword to Concrete converter.
//!
//! USAGE:
//!     concrete-agiga [FLAGS] [OPTIONS] <paths>...
//!
//! FLAGS:
//!     -h, --help        Prints help information
//!         --parallel    convert documents in parallel (output order is kept)
//!         --strict      abort on inconsistent documents
//!     -V, --version     Prints version information
//!
//! OPTIONS:
//!         --chunk-size <chunk-size>    number of documents converted at once in parallel mode [default: 64]
//!         --step <step>                log progress every <step> documents [default: 250]
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).
use concrete_agiga::error::Error;
use concrete_agiga::pipeline::{AgigaToConcrete, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ConcreteAgiga::from_args();
    debug!("cli args\n{:#?}", opt);

    let (inputs, output) = opt
        .split_paths()
        .ok_or_else(|| Error::Custom("please provide input files and an output file".to_string()))?;

    let p = AgigaToConcrete::new(inputs.to_vec(), output.to_path_buf())
        .with_step(opt.step)
        .with_strict(opt.strict)
        .with_chunk_size(opt.chunk_size());

    if let Err(e) = p.run() {
        error!("conversion failed: {}", e);
        return Err(e);
    }
    Ok(())
}
