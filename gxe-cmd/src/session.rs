//! Loading the trial table and building the filter selection for one run.

use anyhow::Context;
use gxe_data::pipeline::{self, PipelineOutput};
use gxe_db::models::TrialOverview;
use gxe_db::Database;
use gxe_trial::{FilterSelection, TrialRecord};

use crate::DataArgs;

/// One user session: a freshly loaded table plus the selection to apply.
pub struct Session {
    db: Database,
    table: Vec<TrialRecord>,
    selection: FilterSelection,
}

impl Session {
    /// Load the table named by `data` (or the example) and narrow the
    /// all-values selection to the requested filters.
    pub fn open(data: &DataArgs) -> anyhow::Result<Self> {
        let db = Database::new()?;
        match &data.csv {
            Some(path) => {
                let csv_data = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read trial table {}", path))?;
                db.load_trial_csv(&csv_data)
                    .with_context(|| format!("Trial table {} does not match the schema", path))?;
                log::info!("[GxE Debug] session: Loaded trial table from {}", path);
            }
            None => db.load_example()?,
        }

        let table = db.query_trials()?;
        let selection = db.query_default_selection()?.narrow(
            data.years.as_deref(),
            data.locations.as_deref(),
            data.genotypes.as_deref(),
        );
        Ok(Self {
            db,
            table,
            selection,
        })
    }

    pub fn overview(&self) -> anyhow::Result<TrialOverview> {
        self.db.query_overview()
    }

    pub fn run_pipeline(&self) -> PipelineOutput {
        pipeline::run(&self.table, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gxe_trial::SchemaError;
    use std::collections::BTreeSet;

    fn temp_csv(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("gxe-session-{}-{}.csv", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_to_example_table_and_all_values() {
        let session = Session::open(&DataArgs::default()).unwrap();
        assert_eq!(session.table.len(), 7);
        assert_eq!(session.selection, FilterSelection::all(&session.table));
    }

    #[test]
    fn filters_narrow_the_selection() {
        let data = DataArgs {
            years: Some(vec![2023]),
            genotypes: Some(vec!["Line-1".to_string(), "Line-3".to_string()]),
            ..DataArgs::default()
        };
        let session = Session::open(&data).unwrap();
        assert_eq!(session.selection.years, BTreeSet::from([2023]));
        assert_eq!(session.selection.locations.len(), 3);

        let output = session.run_pipeline();
        assert_eq!(output.filtered.len(), 2);
        assert_eq!(output.recommendation.unwrap().genotype, "Line-3");
    }

    #[test]
    fn loads_supplied_csv() {
        let path = temp_csv(
            "ok",
            "\
Year,Location,Genotype,Yield,Days_to_Flowering,Disease_Score
2024,Multan,Line-8,3100,88,1
2024,Layyah,Line-8,2900,89,2
",
        );
        let data = DataArgs {
            csv: Some(path.clone()),
            ..DataArgs::default()
        };
        let session = Session::open(&data).unwrap();
        assert_eq!(session.table.len(), 2);
        assert_eq!(session.overview().unwrap().locations, 2);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn supplied_csv_schema_error_is_recoverable() {
        let path = temp_csv("bad", "Year,Location,Genotype\n2024,Multan,Line-8\n");
        let data = DataArgs {
            csv: Some(path.clone()),
            ..DataArgs::default()
        };
        let err = Session::open(&data).err().expect("schema mismatch should fail");
        assert!(matches!(
            err.downcast_ref::<SchemaError>(),
            Some(SchemaError::MissingFields { .. })
        ));
        std::fs::remove_file(path).unwrap();
    }
}
