//! # Sample Subcommand
//!
//! Prints the preset demo record, either as the editable candidate (pretty
//! JSON, no `generatedAt`) or as a stamped payload ready to decode.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use luxqr_codec::Codec;
use luxqr_core::sample::preset_candidate;
use luxqr_schema::validate_candidate;

use crate::config::CliConfig;

/// Arguments for the `luxqr sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Print the stamped payload instead of the editable record.
    #[arg(long)]
    pub payload: bool,
}

/// Execute the sample subcommand.
pub fn run_sample(args: &SampleArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let candidate = preset_candidate();

    if !args.payload {
        let pretty = serde_json::to_string_pretty(&candidate)
            .context("failed to render preset record")?;
        writeln!(out, "{pretty}")?;
        return Ok(0);
    }

    let mut record = validate_candidate(&candidate).context("preset record is invalid")?;
    let payload = Codec::with_clock(config.clock()).serialize(&mut record);
    writeln!(out, "{payload}")?;
    Ok(0)
}
