use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::api::{self, IsRelevantOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct IsRelevantArgs {
    /// Where the paragraph comes from (e.g. "routine health data (claims, EHR, registry)")
    #[arg(short, long)]
    origin: Option<String>,
    /// Why the paragraph matters (e.g. "building or validating a computable cohort/phenotype")
    #[arg(short, long)]
    purpose: Option<String>,
    /// Actionable detail bullet; repeat to replace the defaults
    #[arg(short, long = "detail")]
    details: Vec<String>,
    /// YAML list of detail bullets replacing the defaults
    #[arg(long)]
    details_file: Option<PathBuf>,
    /// Config file (defaults to ./llmprompts.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

pub fn run_is_relevant(args: IsRelevantArgs) -> Result<(), AppError> {
    let options = IsRelevantOptions {
        data_origin: args.origin,
        purpose: args.purpose,
        details: args.details,
        details_file: args.details_file,
        config: args.config,
    };

    let output = api::is_relevant(options)?;
    match args.format {
        OutputFormat::Text => println!("{}", output.prompt),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}
