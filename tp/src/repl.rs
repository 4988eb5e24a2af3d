//! Interactive chat session

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::domain::ChatResponse;
use crate::render;
use crate::service::Planner;

/// Print one chat response in the requested format
pub fn print_chat(response: &ChatResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => {
            for line in response.reply.split(" | ") {
                println!("{}", line);
            }
            if let Some(data) = &response.data {
                println!();
                println!("{}", render::plan_text(data));
            }
        }
    }
    Ok(())
}

/// Interactive chat prompt
pub struct ChatSession<'a> {
    planner: &'a Planner,
    format: OutputFormat,
}

impl<'a> ChatSession<'a> {
    pub fn new(planner: &'a Planner, format: OutputFormat) -> Self {
        Self { planner, format }
    }

    /// Run the prompt loop until /quit or Ctrl+D
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            match rl.readline(&format!("{} ", ">".bright_green())) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    match input {
                        "/quit" | "/q" | "/exit" => break,
                        "/help" | "/h" => self.print_help(),
                        _ if input.starts_with('/') => {
                            println!("{} Unknown command: {}", "?".yellow(), input);
                            println!("Type {} for available commands", "/help".yellow());
                        }
                        _ => {
                            debug!(%input, "ChatSession::run: planning");
                            let response = self.planner.chat(input).await;
                            print_chat(&response, self.format)?;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Tripplan Chat".bright_cyan().bold());
        println!("Describe a trip, e.g. {}", "\"weekend in Jaipur from Delhi for 2 people\"".dimmed());
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:14} Show this help", "/help".yellow());
        println!("  {:14} Exit the chat", "/quit".yellow());
        println!();
        println!("{}", "Things you can mention:".bright_cyan());
        println!("  {:14} from Chennai to Ooty", "cities".yellow());
        println!("  {:14} 2025-07-01, March 3rd, tomorrow, next week, this weekend", "dates".yellow());
        println!("  {:14} for 4 days, a week, weekend", "length".yellow());
        println!("  {:14} budget, moderate, luxury", "budget".yellow());
        println!("  {:14} 3 people, couple, solo, family of 4", "travelers".yellow());
        println!("  {:14} history, food, beaches, temples...", "interests".yellow());
        println!();
    }
}
