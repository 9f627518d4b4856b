//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "tanqih", about = "review corpus cleaning tool.")]
/// Holds every command that is callable by the `tanqih` command.
pub enum Tanqih {
    #[structopt(about = "Run the cleaning pipeline")]
    Pipeline(PipelineCmd),
    #[structopt(about = "Split an already cleaned file into per-language files")]
    Languages(Languages),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct PipelineCmd {
    #[structopt(parse(from_os_str), help = "raw reviews csv")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tag mappings json")]
    pub mapping: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned csv destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "split-languages",
        help = "also write one csv per language next to dst"
    )]
    pub split_languages: bool,
}

#[derive(Debug, StructOpt)]
/// Languages command and parameters.
pub struct Languages {
    #[structopt(parse(from_os_str), help = "cleaned csv location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder for per-language files")]
    pub dst: PathBuf,
}
