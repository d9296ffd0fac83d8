//! SQL schema definitions for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// `trials` holds one row per trial record. `ordinal` is the load position
/// and gives the table its display order; it carries no other meaning.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS trials (
        ordinal INTEGER PRIMARY KEY AUTOINCREMENT,
        year INTEGER NOT NULL,
        location TEXT NOT NULL,
        genotype TEXT NOT NULL,
        yield REAL NOT NULL,
        days_to_flowering REAL NOT NULL,
        disease_score REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_trials_genotype ON trials(genotype);
    CREATE INDEX IF NOT EXISTS idx_trials_location ON trials(location);
    "#
}
