//! # luxqr-core: Shared Record Shape
//!
//! This crate is the leaf of the luxqr workspace. It defines the product
//! record that the schema validator produces and the codec consumes, plus
//! the primitives both sides agree on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit presence.** Every optional field is an `Option<_>`. An
//!    absent field and an empty string are different values and stay
//!    different through encode and decode.
//!
//! 2. **Closed value sets.** `Category`, `QualityStatus` and
//!    `WarehouseAction` are enums. Membership is a `FromStr` match, not a
//!    comparison against a mutable list.
//!
//! 3. **One field order.** [`Field::all()`] is the declaration order used
//!    for error reporting, wire emission and display.
//!
//! 4. **Injectable time.** The only non-determinism in the workspace is
//!    reading the clock when a record is stamped. That read goes through
//!    the [`Clock`] trait.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `luxqr-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod candidate;
pub mod clock;
pub mod error;
pub mod field;
pub mod record;
pub mod sample;
pub mod temporal;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use candidate::Candidate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LuxqrError;
pub use field::{Field, FieldKind, FIELD_COUNT};
pub use record::ProductRecord;
pub use temporal::{EventDate, Timestamp};
pub use vocabulary::{Category, QualityStatus, WarehouseAction};
