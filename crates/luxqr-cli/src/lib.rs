//! # luxqr-cli: Command-Line Surface for luxqr
//!
//! Provides the `luxqr` binary: the producer and reader sides of the QR
//! payload flow, driven from files, stdin and the terminal.
//!
//! ## Subcommands
//!
//! - `luxqr encode`: validate a candidate record and print its payload.
//! - `luxqr decode`: parse pasted payload text and render it.
//! - `luxqr sample`: print the preset record (or its payload).
//!
//! ```bash
//! luxqr encode product.yaml --output-dir out/
//! luxqr sample --payload | luxqr decode --strict
//! ```
//!
//! ## Exit Codes
//!
//! `0` on success, `1` on a validation or parse failure, and `1` on an
//! operational error (unreadable file, bad configuration), which is also
//! logged.

pub mod config;
pub mod decode;
pub mod encode;
pub mod input;
pub mod render;
pub mod sample;

use std::io::Write;

use luxqr_schema::FieldErrors;

/// Print one `FAIL:` line per field error.
pub(crate) fn report_field_errors(
    out: &mut impl Write,
    errors: &FieldErrors,
) -> std::io::Result<()> {
    for e in errors.errors() {
        writeln!(out, "FAIL: {e}")?;
    }
    Ok(())
}
