//! CLI Adapter.

mod details;
mod is_relevant;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "LLMPROMPTS_LOG";

#[derive(Parser)]
#[command(name = "llmprompts")]
#[command(version)]
#[command(
    about = "Build LLM prompts for classifying clinical-cohort documentation",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a prompt asking whether a paragraph has actionable phenotype details
    #[clap(visible_alias = "ir")]
    IsRelevant(is_relevant::IsRelevantArgs),
    /// Show the default actionable-detail bullets
    #[clap(visible_alias = "d")]
    Details {
        /// Print the rendered section instead of the bare list
        #[arg(long)]
        section: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::IsRelevant(args) => is_relevant::run_is_relevant(args),
        Commands::Details { section } => {
            details::run_details(section);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the prompt.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
