//! Signup CLI
//!
//! Drives the signup form controller from the terminal. The draft lives in
//! `~/.signup/drafts`, so values accumulate across invocations.
//!
//! # Usage
//!
//! ```bash
//! signup fill --name "Aino Virtanen" --email aino@example.fi
//! signup fill --password Secret123 --phone "040 123 4567"
//! signup fill --company-mode true --company "Virtanen Oy"
//! signup status
//! signup submit
//! signup clear
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version)]
#[command(about = "Signup form controller", long_about = None)]
struct Cli {
    /// Submission endpoint URL
    #[arg(long, env = "SIGNUP_ENDPOINT")]
    endpoint: Option<String>,

    /// Directory holding the draft
    #[arg(long, env = "SIGNUP_DRAFTS_DIR")]
    drafts_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type into the form and save the draft
    Fill(FillArgs),
    /// Show field values and the error summary
    Status,
    /// Validate and submit the form
    Submit {
        /// Value for the hidden bot-trap field
        #[arg(long, hide = true)]
        honeypot: Option<String>,
    },
    /// Reset the form and delete the draft
    Clear,
    /// Print the canonical form of a phone number
    NormalizePhone { value: String },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args)]
pub struct FillArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    /// Register as a company
    #[arg(long)]
    pub company_mode: Option<bool>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file
    Init,
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match config::load(cli.profile.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}, using defaults", e);
            Default::default()
        }
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Fill(args) => commands::fill::handle(args, config, cli.drafts_dir, cli.format),
        Commands::Status => commands::status::handle(config, cli.drafts_dir, cli.format),
        Commands::Submit { honeypot } => {
            commands::submit::handle(honeypot, config, cli.drafts_dir, cli.format).await
        }
        Commands::Clear => commands::clear::handle(config, cli.drafts_dir),
        Commands::NormalizePhone { value } => commands::phone::handle(&value, &config),
        Commands::Config { action } => {
            commands::config::handle(action, cli.profile.as_deref(), &config, cli.format)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
