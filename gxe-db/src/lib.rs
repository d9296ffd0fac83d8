//! In-memory SQLite record store for crop variety trial data.
//!
//! This crate holds the Trial Table for one session. It is the only
//! component that writes trial rows; everything downstream reads the table
//! back as typed [`TrialRecord`](gxe_trial::TrialRecord)s.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in a
//!   single-threaded session
//! - In-memory SQLite via `rusqlite`, nothing touches disk
//! - Supplied CSV is schema-validated by `gxe-trial` before any row is
//!   inserted, so a bad upload never leaves a half-loaded table
//! - Row order is kept through an insertion ordinal, distinct-value queries
//!   return values in first-appearance order
//!
//! # Usage
//!
//! ```rust
//! use gxe_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_example().unwrap();
//!
//! let trials = db.query_trials().unwrap();
//! assert_eq!(trials.len(), 7);
//!
//! let selection = db.query_default_selection().unwrap();
//! assert_eq!(selection.genotypes.len(), 3);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding one session's trial table.
///
/// This struct is cheaply cloneable (via `Rc`); clones share the same
/// table. Sessions that must not share data create their own `Database`.
///
/// # Example
///
/// ```rust
/// use gxe_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_trial_csv("Year,Location,Genotype,Yield,Days_to_Flowering,Disease_Score\n2022,Bhakkar,Line-1,2400,92,3\n").unwrap();
/// let trials = db.query_trials().unwrap();
/// assert_eq!(trials.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_example().unwrap();
        let trials = db2.query_trials().unwrap();
        assert_eq!(trials.len(), 7, "Clone should see same data via shared Rc");
    }

    #[test]
    fn separate_databases_do_not_share_rows() {
        let db = Database::new().unwrap();
        let other = Database::new().unwrap();
        db.load_example().unwrap();
        assert!(other.query_trials().unwrap().is_empty());
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let trials = db.query_trials().unwrap();
        assert!(trials.is_empty(), "New database should have no trials");
    }
}
