//! Kata Lab - command-line entry point.
//!
//! `kata-lab add` runs the string calculator, `kata-lab user` fetches a user
//! from the configured user API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata_lab::{AsyncUserClientImpl, Calculator, Config, UserClient, UserService};
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kata-lab", version, about = "String calculator and user-fetch katas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum a delimiter-separated string of numbers
    Add {
        /// Expression to sum; read from stdin when omitted
        expression: Option<String>,

        /// Read the two characters `\n` in EXPRESSION as a newline
        #[arg(short, long)]
        escapes: bool,
    },
    /// Fetch a user by ID and print it as JSON
    User {
        /// User ID
        id: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // stderr only, stdout carries results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Add {
            expression,
            escapes,
        } => run_add(&config, expression, escapes),
        Command::User { id } => run_user(&config, id).await,
    }
}

fn run_add(config: &Config, expression: Option<String>, escapes: bool) -> Result<()> {
    let input = match expression {
        Some(expr) if escapes => expr.replace("\\n", "\n"),
        Some(expr) => expr,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let calculator = Calculator::from_config(config);
    match calculator.add(&input) {
        Ok(sum) => {
            println!("{}", sum);
            Ok(())
        }
        Err(e) => {
            error!("Calculation failed: {}", e);
            Err(e.into())
        }
    }
}

async fn run_user(config: &Config, id: u64) -> Result<()> {
    info!("Fetching user {} from {}", id, config.user_api_url);

    let client = Arc::new(AsyncUserClientImpl::new(UserClient::new(config)));
    let service = UserService::new(client.clone(), config.user_cache_ttl_secs);

    let result = service.get_user(id).await;
    debug!(metrics = ?client.inner().metrics().summary(), "User API requests");

    let user = result?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}
