//! Uplift CLI - the storefront basket from your terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a product to the basket
//! uplift basket add "Essential Desk" 300
//!
//! # Show basket contents and totals
//! uplift basket show
//!
//! # Change line 0 by -1 unit (dropping below one removes the line)
//! uplift basket update 0 -1
//!
//! # Place the order and clear the basket
//! uplift basket checkout
//!
//! # Validate and submit a contact enquiry
//! uplift contact --first-name Ada --last-name Lovelace \
//!     --email ada@example.com --message "Do you ship to Manchester?"
//! ```
//!
//! # Commands
//!
//! - `basket` - Add, remove, update, show, and checkout
//! - `contact` - Validate a contact enquiry
//!
//! The basket is stored in a JSON file (`UPLIFT_BASKET_FILE`, default
//! `uplift-basket.json`); every invocation loads it, performs one
//! operation, and writes it back.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)] // terminal output is this binary's purpose

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod contact;
mod views;

use config::CliConfig;
use contact::ContactForm;

#[derive(Parser)]
#[command(name = "uplift")]
#[command(author, version, about = "Uplift storefront basket and contact tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping basket
    Basket {
        #[command(subcommand)]
        action: BasketAction,
    },
    /// Validate and submit a contact enquiry
    Contact {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum BasketAction {
    /// Add one unit of a product to the basket
    Add {
        /// Product name
        name: String,

        /// Unit price in pounds, e.g. 300 or 299.99
        price: String,
    },
    /// Remove the line at the given index (as shown by `show`)
    Remove {
        /// Line index, starting at 0
        index: usize,
    },
    /// Change a line's quantity by a signed amount
    Update {
        /// Line index, starting at 0
        index: usize,

        /// Signed change, e.g. 1 or -1
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Show basket contents and totals
    Show,
    /// Place the order and clear the basket
    Checkout,
}

fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "uplift=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Basket { action } => match action {
            BasketAction::Add { name, price } => commands::basket::add(&config, &name, &price)?,
            BasketAction::Remove { index } => commands::basket::remove(&config, index)?,
            BasketAction::Update { index, delta } => {
                commands::basket::update(&config, index, delta)?;
            }
            BasketAction::Show => commands::basket::show(&config),
            BasketAction::Checkout => commands::basket::checkout(&config)?,
        },
        Commands::Contact {
            first_name,
            last_name,
            email,
            message,
        } => {
            commands::contact::submit(&ContactForm {
                first_name,
                last_name,
                email,
                message,
            })?;
        }
    }

    Ok(())
}
