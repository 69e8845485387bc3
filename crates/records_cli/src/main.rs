mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rv")]
#[command(version, about = "Record validator CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data records against a schema
    Validate {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Path to the data file: one record, or a list of records
        data: String,

        /// Treat schema warnings as errors
        #[arg(short, long)]
        strict: bool,

        /// Only validate the first N records
        #[arg(long)]
        sample_size: Option<usize>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a schema definition without validating data
    Check {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Treat schema warnings as errors
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            schema,
            data,
            strict,
            sample_size,
            format,
        } => commands::validate::execute(&schema, &data, strict, sample_size, &format),

        Commands::Check {
            schema,
            strict,
            format,
        } => commands::check::execute(&schema, strict, &format),
    }
}
