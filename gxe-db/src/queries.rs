//! Typed query methods for reading the trial table back out.
//!
//! Trial rows always come back in load order. Distinct-value queries list
//! each value once, in the order it first appears in the table, which is the
//! order the filter choices are offered in.

use crate::models::TrialOverview;
use crate::Database;
use gxe_trial::{FilterSelection, TrialRecord};

impl Database {
    /// Get the full trial table in load order.
    pub fn query_trials(&self) -> anyhow::Result<Vec<TrialRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, location, genotype, yield, days_to_flowering, disease_score
             FROM trials
             ORDER BY ordinal",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TrialRecord {
                    year: row.get(0)?,
                    location: row.get(1)?,
                    genotype: row.get(2)?,
                    grain_yield: row.get(3)?,
                    days_to_flowering: row.get(4)?,
                    disease_score: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GxE Debug] query: query_trials returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct trial years in first-appearance order.
    pub fn query_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year FROM trials
             GROUP BY year
             ORDER BY MIN(ordinal)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        log::debug!("[GxE Debug] query: query_years returned {} values", rows.len());
        Ok(rows)
    }

    /// Distinct trial locations in first-appearance order.
    pub fn query_locations(&self) -> anyhow::Result<Vec<String>> {
        self.query_distinct_text("location")
    }

    /// Distinct genotypes in first-appearance order.
    pub fn query_genotypes(&self) -> anyhow::Result<Vec<String>> {
        self.query_distinct_text("genotype")
    }

    /// The default filter: every distinct year, location and genotype selected.
    pub fn query_default_selection(&self) -> anyhow::Result<FilterSelection> {
        Ok(FilterSelection {
            years: self.query_years()?.into_iter().collect(),
            locations: self.query_locations()?.into_iter().collect(),
            genotypes: self.query_genotypes()?.into_iter().collect(),
        })
    }

    /// Row count and distinct counts for the loaded table.
    pub fn query_overview(&self) -> anyhow::Result<TrialOverview> {
        let conn = self.conn.borrow();
        let overview = conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT year), COUNT(DISTINCT location), COUNT(DISTINCT genotype)
             FROM trials",
            [],
            |row| {
                Ok(TrialOverview {
                    rows: row.get::<_, i64>(0)? as usize,
                    years: row.get::<_, i64>(1)? as usize,
                    locations: row.get::<_, i64>(2)? as usize,
                    genotypes: row.get::<_, i64>(3)? as usize,
                })
            },
        )?;
        log::debug!("[GxE Debug] query: query_overview returned {:?}", overview);
        Ok(overview)
    }

    fn query_distinct_text(&self, column: &str) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {column} FROM trials
             GROUP BY {column}
             ORDER BY MIN(ordinal)"
        ))?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::debug!(
            "[GxE Debug] query: distinct {} returned {} values",
            column,
            rows.len()
        );
        Ok(rows)
    }
}
