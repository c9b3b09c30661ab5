mod cli;

use crate::cli::{Cli, Operation};
use anyhow::Context;
use burrow_cli::Client;
use burrow_telemetry::LogFormat;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    burrow_telemetry::init(LogFormat::Pretty)?;

    let client = Client::new(cli.addr);
    info!(addr = client.addr(), "connecting to gateway");

    match cli.operation {
        Operation::Shorten { original_url } => {
            let response = client
                .shorten(&original_url)
                .with_context(|| format!("operation shorten failed for {original_url}"))?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Operation::Lookup { hash } => {
            let location = client
                .lookup(&hash)
                .with_context(|| format!("operation lookup failed for {hash}"))?;
            println!("{hash} redirects to {location}");
        }
    }

    Ok(())
}
