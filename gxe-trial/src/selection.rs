use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

use crate::record::TrialRecord;

/// The user's inclusion sets over the three categorical trial dimensions.
///
/// A record passes when its year, location and genotype are all selected.
/// An empty set on any dimension therefore selects nothing.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub locations: BTreeSet<String>,
    pub genotypes: BTreeSet<String>,
}

impl FilterSelection {
    /// Select every distinct value present in `table`.
    pub fn all(table: &[TrialRecord]) -> Self {
        Self {
            years: table.iter().map(|t| t.year).collect(),
            locations: table.iter().map(|t| t.location.clone()).collect(),
            genotypes: table.iter().map(|t| t.genotype.clone()).collect(),
        }
    }

    /// Whether `record` satisfies all three inclusion sets.
    pub fn contains(&self, record: &TrialRecord) -> bool {
        self.years.contains(&record.year)
            && self.locations.contains(&record.location)
            && self.genotypes.contains(&record.genotype)
    }

    /// True when any dimension has nothing selected.
    pub fn selects_nothing(&self) -> bool {
        self.years.is_empty() || self.locations.is_empty() || self.genotypes.is_empty()
    }

    /// Narrow this (all-values) selection to the user's choices.
    ///
    /// `None` keeps a dimension fully selected. Chosen values that are not
    /// offered by `self` are dropped with a warning, so the result is always
    /// a subset of the available values.
    pub fn narrow(
        &self,
        years: Option<&[i32]>,
        locations: Option<&[String]>,
        genotypes: Option<&[String]>,
    ) -> Self {
        Self {
            years: narrow_dimension("year", &self.years, years),
            locations: narrow_dimension("location", &self.locations, locations),
            genotypes: narrow_dimension("genotype", &self.genotypes, genotypes),
        }
    }
}

fn narrow_dimension<T>(name: &str, available: &BTreeSet<T>, chosen: Option<&[T]>) -> BTreeSet<T>
where
    T: Ord + Clone + Display,
{
    let Some(chosen) = chosen else {
        return available.clone();
    };
    chosen
        .iter()
        .filter(|value| {
            let known = available.contains(*value);
            if !known {
                log::warn!(
                    "[GxE Debug] selection: Ignoring unknown {} '{}' in filter selection",
                    name,
                    value
                );
            }
            known
        })
        .cloned()
        .collect()
}
