//! # Decode Subcommand
//!
//! Reader side of the flow: take pasted payload text, parse it, and render
//! the record. Rendering is lenient by default; `--strict` runs the schema
//! first and refuses to render a record that does not pass.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use luxqr_codec::parse;
use luxqr_schema::validate_candidate;

use crate::render::View;

/// Shown instead of any record when the pasted text cannot be decoded.
pub const MALFORMED_MESSAGE: &str = "Invalid JSON data. Please paste valid QR code data.";

/// Arguments for the `luxqr decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding the pasted payload. Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Validate the decoded record and refuse to render it on errors.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the decode subcommand.
///
/// Returns exit code: 0 on success, 1 on a malformed payload or (with
/// `--strict`) a record that fails validation.
pub fn run_decode(args: &DecodeArgs, out: &mut impl Write) -> Result<u8> {
    let text = crate::input::read_text(args.path.as_deref())?;
    decode_text(&text, args.strict, out)
}

/// Decode `text` and write either the view or the errors to `out`.
pub fn decode_text(text: &str, strict: bool, out: &mut impl Write) -> Result<u8> {
    let candidate = match parse(text) {
        Ok(c) => c,
        Err(e) => {
            tracing::info!(error = %e, "could not decode payload");
            writeln!(out, "{MALFORMED_MESSAGE}")?;
            return Ok(1);
        }
    };

    let unknown = candidate.unknown_keys();
    if !unknown.is_empty() {
        tracing::info!(keys = ?unknown, "payload carries fields this version does not know");
    }

    if strict {
        if let Err(errors) = validate_candidate(&candidate) {
            crate::report_field_errors(out, &errors)?;
            return Ok(1);
        }
    }

    write!(out, "{}", View::build(&candidate))?;
    Ok(0)
}
