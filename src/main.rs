//! # Tanqih
//!
//! Cleaning pipeline for the bilingual reviews sentiment corpus.
//!
//! ```sh
//! USAGE:
//!     tanqih <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help         Prints this message or the help of the given subcommand(s)
//!     languages    Split an already cleaned file into per-language files
//!     pipeline     Run the cleaning pipeline
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use tanqih::cli;
use tanqih::error;
use tanqih::pipelines::{Pipeline, ReviewClean};
use tanqih::processing;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Tanqih::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Tanqih::Pipeline(p) => {
            let pipeline = ReviewClean::new(p.src, p.mapping, p.dst, p.split_languages);
            pipeline.run()?;
        }
        cli::Tanqih::Languages(l) => {
            processing::extract_languages(&l.src, &l.dst)?;
        }
    };
    Ok(())
}
