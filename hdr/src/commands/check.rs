use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use hdrgen_api::{Api, DEFAULT_API_FILE};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// How check results are printed
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CheckFormat {
    /// Human-readable diagnostics and a category summary
    #[default]
    Human,
    /// A single JSON document on stdout
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the API description
    #[arg(short, long, default_value = DEFAULT_API_FILE)]
    pub api: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = CheckFormat::Human)]
    pub format: CheckFormat,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let api = Api::from_file(&self.api).unwrap_or_exit();
        let report = ops::check(&api, &self.api);

        match self.format {
            CheckFormat::Human => report.render(&mut TerminalOutput::new()),
            CheckFormat::Json => {
                let json = serde_json::to_string_pretty(&report.to_json())
                    .wrap_err("Failed to serialize check report")?;
                println!("{}", json);
            }
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
