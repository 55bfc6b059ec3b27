//! # luxqr CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use luxqr_cli::config::CliConfig;
use luxqr_cli::decode::{run_decode, DecodeArgs};
use luxqr_cli::encode::{run_encode, EncodeArgs};
use luxqr_cli::sample::{run_sample, SampleArgs};
use luxqr_core::Timestamp;

/// luxqr: luxury product QR payload toolkit.
///
/// Encodes product records (identity, supply chain, quality, retail,
/// warranty) into compact QR payloads and decodes pasted payloads back
/// into a readable record.
#[derive(Parser, Debug)]
#[command(name = "luxqr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Warn when a payload is larger than this many bytes.
    #[arg(long, global = true, value_name = "BYTES")]
    warn_bytes: Option<usize>,

    /// Stamp payloads with this RFC 3339 UTC time instead of the clock.
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    generated_at: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a product record and encode it as a QR payload.
    Encode(EncodeArgs),

    /// Decode pasted QR payload text and display the record.
    Decode(DecodeArgs),

    /// Print the preset sample record.
    Sample(SampleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "luxqr CLI starting");

    let result = resolve_config(&cli).and_then(|config| {
        let mut out = std::io::stdout().lock();
        match &cli.command {
            Commands::Encode(args) => run_encode(args, &config, &mut out),
            Commands::Decode(args) => run_decode(args, &mut out),
            Commands::Sample(args) => run_sample(args, &config, &mut out),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Environment first, then global flags on top.
fn resolve_config(cli: &Cli) -> Result<CliConfig> {
    let mut config = CliConfig::from_env().context("invalid environment configuration")?;
    if let Some(bytes) = cli.warn_bytes {
        config.payload_warn_bytes = bytes;
    }
    if let Some(ref ts) = cli.generated_at {
        config.fixed_time = Some(Timestamp::parse(ts).context("invalid --generated-at")?);
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
