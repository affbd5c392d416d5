use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{check_config, serve};

#[derive(Parser)]
#[command(name = "carelink")]
#[command(about = "CareLink website backend: form submissions and static frontend")]
#[command(version)]
pub struct Cli {
    /// Configuration file layered over config/default.toml
    #[arg(short, long, global = true, env = "CARELINK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,

        /// Directory holding the built frontend
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Print the effective configuration (secrets redacted) and exit
    CheckConfig,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir } => {
                serve(self.config.as_deref(), bind_address, static_dir).await?;
            }
            Commands::CheckConfig => {
                check_config(self.config.as_deref())?;
            }
        }
        Ok(())
    }
}
