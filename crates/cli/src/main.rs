//! faqbot CLI
//!
//! Command-line entry point for the course FAQ assistant.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, CoursesCommand};
use faqbot_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Course FAQ assistant - retrieval-augmented answers over the FAQ database
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(about = "Answer course questions from the FAQ database", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: faqbot.yaml in the working directory)
    #[arg(short, long, global = true, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// URL of the FAQ document source
    #[arg(long, global = true, env = "FAQBOT_DOCS_URL")]
    docs_url: Option<String>,

    /// Retriever backend (currently: minisearch)
    #[arg(short, long, global = true, env = "FAQBOT_RETRIEVER")]
    retriever: Option<String>,

    /// Chat model (currently: gpt-4o)
    #[arg(short, long, global = true, env = "FAQBOT_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question against the FAQ database
    Ask(AskCommand),

    /// List the courses available in the document source
    Courses(CoursesCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Pick up a local .env before clap resolves env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load base configuration (file + environment), then apply CLI flags
    let config = AppConfig::load(cli.config.as_ref())?.with_overrides(
        cli.docs_url,
        cli.retriever,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("faqbot starting");
    tracing::debug!("Retriever: {}", config.retriever);
    tracing::debug!("Model: {}", config.model);

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Courses(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
