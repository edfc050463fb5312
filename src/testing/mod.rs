//! Plain-text dumps of parse results for snapshot-style assertions.
//!
//! Use [`nodes_to_string`] and [`stylesheet_to_string`] to capture a parsed
//! tree or stylesheet as deterministic text, suitable for `insta` snapshots.

pub mod snapshot;

pub use snapshot::{nodes_to_string, stylesheet_to_string};
