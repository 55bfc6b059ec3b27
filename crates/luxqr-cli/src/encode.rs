//! # Encode Subcommand
//!
//! Producer side of the flow: load a candidate, validate it, stamp and
//! serialize it, and report the payload with its size.
//!
//! An invalid candidate is never serialized. Every field error is printed
//! as a `FAIL:` line and the command exits with status 1.
//!
//! `generatedAt` is not an input. A candidate that carries one has it
//! dropped, so every encoded record gets a fresh stamp.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use luxqr_codec::{Codec, Payload};
use luxqr_core::sample::preset_candidate;
use luxqr_core::{Candidate, Field};
use luxqr_schema::validate_candidate;

use crate::config::CliConfig;

/// Arguments for the `luxqr encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Candidate record file (.json, .yaml or .yml).
    #[arg(value_name = "PATH", conflicts_with = "sample")]
    pub path: Option<PathBuf>,

    /// Encode the preset sample record instead of a file.
    #[arg(long)]
    pub sample: bool,

    /// Also write the payload to `<product-name>-qr.json` in this directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Execute the encode subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure or missing input.
pub fn run_encode(args: &EncodeArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let candidate = match (&args.path, args.sample) {
        (_, true) => preset_candidate(),
        (Some(path), false) => crate::input::load_candidate(path)?,
        (None, false) => {
            writeln!(out, "Usage: luxqr encode [--sample] [--output-dir DIR] [PATH]")?;
            return Ok(1);
        }
    };
    encode_candidate(&candidate, args.output_dir.as_deref(), config, out)
}

/// Validate and encode one candidate, writing the report to `out`.
pub fn encode_candidate(
    candidate: &Candidate,
    output_dir: Option<&Path>,
    config: &CliConfig,
    out: &mut impl Write,
) -> Result<u8> {
    let unknown = candidate.unknown_keys();
    if !unknown.is_empty() {
        tracing::warn!(keys = ?unknown, "ignoring unknown fields");
    }

    let mut candidate = candidate.clone();
    if let Some(stale) = candidate.remove(Field::GeneratedAt.as_str()) {
        tracing::warn!(value = %stale, "ignoring supplied generatedAt, restamping");
    }

    let mut record = match validate_candidate(&candidate) {
        Ok(record) => record,
        Err(errors) => {
            tracing::info!(count = errors.len(), "candidate failed validation");
            crate::report_field_errors(out, &errors)?;
            return Ok(1);
        }
    };

    let payload = Codec::with_clock(config.clock()).serialize(&mut record);
    tracing::info!(sku = %record.sku, bytes = payload.len_bytes(), "encoded record");

    writeln!(out, "{payload}")?;
    writeln!(out, "Data size: {} bytes", payload.len_bytes())?;
    if let Some(warning) = payload.size_warning(config.payload_warn_bytes) {
        tracing::warn!(size = warning.size, limit = warning.limit, "payload over size threshold");
        writeln!(out, "Warning: {warning}")?;
    }

    if let Some(dir) = output_dir {
        let path = write_payload(dir, &record.product_name, &payload)?;
        writeln!(out, "Wrote {}", path.display())?;
    }

    Ok(0)
}

/// File stem for exported payloads: the product name with each run of
/// whitespace replaced by a single `-`.
pub fn export_stem(product_name: &str) -> String {
    product_name.split_whitespace().collect::<Vec<_>>().join("-")
}

fn write_payload(dir: &Path, product_name: &str, payload: &Payload) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}-qr.json", export_stem(product_name)));
    std::fs::write(&path, payload.as_str())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
