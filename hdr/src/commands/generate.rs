use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use hdrgen_api::{Api, DEFAULT_API_FILE};
use hdrgen_core::auto_generated_message;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API description
    #[arg(short, long, default_value = DEFAULT_API_FILE)]
    pub api: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Header file name, relative to the output directory (defaults to <name>.h)
    #[arg(long)]
    pub header: Option<String>,

    /// Source file name, relative to the output directory (defaults to <name>.cpp)
    #[arg(long)]
    pub source: Option<String>,

    /// Only generate the header
    #[arg(long, conflicts_with = "source")]
    pub no_source: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let api = Api::from_file(&self.api).unwrap_or_exit();
        let args: Vec<String> = std::env::args().collect();

        let report = ops::generate(
            &api,
            GenerateOptions {
                output_dir: &self.output,
                header: self.header.as_deref(),
                source: self.source.as_deref(),
                with_source: !self.no_source,
                dry_run: self.dry_run,
                notice: auto_generated_message(&args),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
