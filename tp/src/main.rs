//! Tripplan - Multi-modal Trip Planner
//!
//! CLI entry point for the Plan and Chat operations.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripplan::cli::{Cli, Command, OutputFormat, PlanArgs};
use tripplan::config::Config;
use tripplan::render;
use tripplan::repl::{ChatSession, print_chat};
use tripplan::service::Planner;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Determine log level with priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("tripplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so its level can apply
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!(
        timeout_ms = config.pipeline.timeout_ms,
        deterministic = config.pipeline.deterministic,
        "Tripplan loaded config"
    );

    let planner = Planner::new(config).context("Failed to build planner")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan(args) => cmd_plan(&planner, &args).await,
        Command::Chat { message, format } => cmd_chat(&planner, message, format).await,
    }
}

/// Plan from explicit fields; exits non-zero when the plan fails
async fn cmd_plan(planner: &Planner, args: &PlanArgs) -> Result<()> {
    debug!(?args, "cmd_plan: called");
    let response = planner.plan(&args.to_raw()).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => match (&response.data, &response.error) {
            (Some(data), _) => {
                println!("{}", render::plan_text(data));
                println!();
                for line in data.summary.split(" | ") {
                    println!("{}", line);
                }
            }
            (None, Some(error)) => eprintln!("{} {}", "Error:".red().bold(), error),
            (None, None) => eprintln!("{}", "Error: planning failed".red().bold()),
        },
    }

    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}

/// One-shot chat when a message is given, otherwise an interactive prompt
async fn cmd_chat(planner: &Planner, message: Option<String>, format: OutputFormat) -> Result<()> {
    debug!(?message, %format, "cmd_chat: called");
    match message {
        Some(message) => {
            let response = planner.chat(&message).await;
            print_chat(&response, format)?;
            if !response.has_results {
                std::process::exit(1);
            }
            Ok(())
        }
        None => ChatSession::new(planner, format).run().await,
    }
}
