use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "transaction-ledger")]
#[command(about = "Transaction Ledger - in-memory transaction store over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on, overriding SERVER_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Configuration validation
    Config,
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    println!("Configuration:");
    println!("  Server Port: {}", config.server_port);
    match &config.cors_allowed_origins {
        Some(origins) => println!("  CORS Allowed Origins: {}", origins.join(", ")),
        None => println!("  CORS Allowed Origins: *"),
    }
    println!("  Log Format: {:?}", config.log_format);

    if config.server_port == 0 {
        anyhow::bail!("SERVER_PORT must be greater than 0");
    }
    crate::middleware::cors::cors_layer(config.cors_allowed_origins.as_deref())?;

    tracing::info!("Configuration is valid");
    println!("✓ Configuration is valid");

    Ok(())
}
