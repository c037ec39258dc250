mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

use crate::logging::{LogFormat, LogLevel};

/// Loading an API description either succeeds or ends the process with a
/// source-annotated report.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hdrgen_api::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|err| {
            let report = miette::Report::new(*err);
            eprintln!("{report:?}");
            std::process::exit(1)
        })
    }
}

#[derive(Parser)]
#[command(
    name = "hdrgen",
    version,
    about = "Generate C/C++ API headers from TOML descriptions"
)]
pub(crate) struct Cli {
    /// Minimum level of log messages written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Format of log messages
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(generate) => generate.run(),
            Commands::Check(check) => check.run(),
            Commands::Completions(completions) => completions.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header and source from api.toml
    Generate(GenerateCommand),

    /// Parse and lint api.toml without generating code
    Check(CheckCommand),

    /// Print a completion script for a shell
    Completions(CompletionsCommand),
}
