//! Loading functions for populating the in-memory SQLite database.
//!
//! Every loader replaces the current table: a session holds exactly one
//! trial table at a time, and a new upload starts from scratch.
//!
//! # CSV Format
//!
//! Header row required, field names case-sensitive, column order free:
//! `Year,Location,Genotype,Yield,Days_to_Flowering,Disease_Score`

use crate::Database;
use gxe_trial::schema::parse_trial_csv;
use gxe_trial::TrialRecord;
use rusqlite::params;

impl Database {
    /// Load the built-in seven-row example table.
    pub fn load_example(&self) -> anyhow::Result<()> {
        let trials = TrialRecord::example_table()?;
        log::info!("[GxE Debug] loader: Using built-in example table");
        self.load_trials(&trials)
    }

    /// Load a supplied trial table from a CSV string.
    ///
    /// The text is validated against the trial schema before anything is
    /// written. On a [`SchemaError`](gxe_trial::SchemaError) the previously
    /// loaded table is left untouched and the error can be recovered with
    /// `err.downcast_ref::<SchemaError>()`.
    ///
    /// # Example CSV
    /// ```text
    /// Year,Location,Genotype,Yield,Days_to_Flowering,Disease_Score
    /// 2022,Bhakkar,Line-1,2400,92,3
    /// ```
    pub fn load_trial_csv(&self, csv_data: &str) -> anyhow::Result<()> {
        let trials = parse_trial_csv(csv_data)?;
        self.load_trials(&trials)
    }

    /// Replace the trial table with already-typed records, keeping their order.
    pub fn load_trials(&self, trials: &[TrialRecord]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM trials", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO trials (year, location, genotype, yield, days_to_flowering, disease_score)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for t in trials {
                stmt.execute(params![
                    t.year,
                    t.location,
                    t.genotype,
                    t.grain_yield,
                    t.days_to_flowering,
                    t.disease_score
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[GxE Debug] loader: Loaded {} trial records", trials.len());
        Ok(())
    }
}
