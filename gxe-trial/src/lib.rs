//! Core types for crop variety trial data.
//!
//! Holds the statically-typed record shape every other crate works with,
//! the schema validation that guards the load boundary, the built-in
//! example table and the user's filter selection.

pub mod error;
pub mod record;
pub mod schema;
pub mod selection;

pub use error::{NoDataError, SchemaError};
pub use record::TrialRecord;
pub use selection::FilterSelection;
