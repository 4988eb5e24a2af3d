//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::RawRequest;

/// Tripplan - Multi-modal Trip Planner
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Plan trips with flight, hotel, rail and road options plus a daily itinerary",
    version = env!("CARGO_PKG_VERSION"),
    after_help = generate_after_help(),
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan a trip from explicit fields
    Plan(PlanArgs),

    /// Plan a trip from a free-form message
    Chat {
        /// Message to plan from (omit for an interactive prompt)
        message: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Fields for `tp plan`; strings are handed to the validator as given
#[derive(Debug, Clone, clap::Args)]
pub struct PlanArgs {
    /// Departure city
    #[arg(long = "from")]
    pub origin: String,

    /// Arrival city
    #[arg(long = "to")]
    pub destination: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    pub depart: String,

    /// Return date (YYYY-MM-DD)
    #[arg(long = "return")]
    pub return_date: String,

    /// Budget tier (budget, moderate, luxury)
    #[arg(short, long, default_value = "moderate")]
    pub budget: String,

    /// Number of travelers
    #[arg(short, long, default_value = "1")]
    pub travelers: u32,

    /// Comma-separated interests
    #[arg(short, long)]
    pub interests: Option<String>,

    /// Special requests
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl PlanArgs {
    pub fn to_raw(&self) -> RawRequest {
        debug!(?self, "PlanArgs::to_raw: called");
        let raw = RawRequest::new()
            .with("origin", self.origin.clone())
            .with("destination", self.destination.clone())
            .with("departure_date", self.depart.clone())
            .with("return_date", self.return_date.clone())
            .with("budget", self.budget.clone())
            .with("travelers", self.travelers);
        let raw = match &self.interests {
            Some(interests) => raw.with("interests", interests.clone()),
            None => raw,
        };
        match &self.notes {
            Some(notes) => raw.with("special_requests", notes.clone()),
            None => raw,
        }
    }
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    debug!("get_log_path: called");
    let path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplan")
        .join("logs")
        .join("tripplan.log");
    debug!(?path, "get_log_path: returning path");
    path
}

/// Generate the after_help text with the config and log locations
pub fn generate_after_help() -> String {
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("tripplan")
        .join("tripplan.yml");

    let mut help = String::new();
    help.push_str("Config is read from: ./.tripplan.yml, then ");
    help.push_str(&config_path.display().to_string());
    help.push('\n');
    help.push_str(&format!("Logs are written to: {}\n", get_log_path().display()));
    help
}

/// Output format for plan and chat results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RequestValidator;

    #[test]
    fn test_cli_parse_plan() {
        let cli = Cli::parse_from([
            "tp",
            "plan",
            "--from",
            "Coimbatore",
            "--to",
            "Ooty",
            "--depart",
            "2025-06-15",
            "--return",
            "2025-06-17",
            "--travelers",
            "3",
            "--interests",
            "nature,food",
        ]);
        match cli.command {
            Command::Plan(args) => {
                assert_eq!(args.origin, "Coimbatore");
                assert_eq!(args.destination, "Ooty");
                assert_eq!(args.travelers, 3);
                assert_eq!(args.budget, "moderate");
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("expected plan, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_chat_without_message() {
        let cli = Cli::parse_from(["tp", "chat", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::Chat {
                message: None,
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::parse_from(["tp", "chat", "hi", "-l", "debug", "-c", "/tmp/tp.yml"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tp.yml")));
    }

    #[test]
    fn test_plan_args_validate() {
        let cli = Cli::parse_from([
            "tp", "plan", "--from", "Delhi", "--to", "Agra", "--depart", "2025-06-15", "--return", "2025-06-16",
            "--interests", "History, food", "--notes", "vegetarian",
        ]);
        let Command::Plan(args) = cli.command else {
            panic!("expected plan");
        };
        let request = RequestValidator::new().validate(&args.to_raw()).unwrap();
        assert_eq!(request.interests, vec!["history", "food"]);
        assert_eq!(request.special_requests, "vegetarian");
        assert_eq!(request.traveler_count, 1);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}
