use clap::{Parser, Subcommand};

pub const ADDR_ENV: &str = "BURROW_ADDR";
pub const DEFAULT_ADDR: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "burrow", about = "Command-line client for a Burrow gateway")]
pub struct Cli {
    /// The gateway instance to connect to.
    #[arg(long, global = true, env = ADDR_ENV, default_value = DEFAULT_ADDR)]
    pub addr: String,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Shorten a URL and print the gateway's response.
    Shorten {
        #[arg(long)]
        original_url: String,
    },
    /// Print where a short code redirects to.
    Lookup {
        #[arg(long)]
        hash: String,
    },
}
