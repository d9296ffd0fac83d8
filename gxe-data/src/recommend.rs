//! Ranking genotypes and picking the recommended one.
//!
//! Order: `mean_yield` descending, then `yield_sd` ascending. A genotype
//! with a missing SD (a single filtered row) sorts after every genotype with
//! a numeric SD at the same mean yield, so an under-sampled line never wins
//! a tie on stability it has not shown. Remaining ties keep input order.

use std::cmp::Ordering;

use gxe_trial::NoDataError;

use crate::models::GenotypeSummary;

/// Ranking comparator: best genotype first.
pub fn ranking_order(a: &GenotypeSummary, b: &GenotypeSummary) -> Ordering {
    b.mean_yield
        .total_cmp(&a.mean_yield)
        .then_with(|| compare_sd(a.yield_sd, b.yield_sd))
}

fn compare_sd(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// All summaries in ranking order.
pub fn rank(summaries: &[GenotypeSummary]) -> Vec<GenotypeSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(ranking_order);
    ranked
}

/// The top-ranked genotype.
///
/// Fails with [`NoDataError`] when there is nothing to rank.
pub fn recommend(summaries: &[GenotypeSummary]) -> Result<GenotypeSummary, NoDataError> {
    let best = summaries
        .iter()
        .min_by(|a, b| ranking_order(a, b))
        .cloned()
        .ok_or(NoDataError)?;
    log::info!(
        "[GxE Debug] recommend: {} (mean yield {:.1}) out of {} genotypes",
        best.genotype,
        best.mean_yield,
        summaries.len()
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::genotype_summaries;
    use gxe_trial::TrialRecord;

    fn summary(genotype: &str, mean_yield: f64, yield_sd: Option<f64>) -> GenotypeSummary {
        GenotypeSummary {
            genotype: genotype.to_string(),
            n: if yield_sd.is_some() { 3 } else { 1 },
            mean_yield,
            yield_sd,
            mean_flowering: 90.0,
            mean_disease: 2.0,
        }
    }

    #[test]
    fn highest_mean_yield_wins() {
        let summaries = vec![
            summary("A", 2400.0, Some(10.0)),
            summary("B", 2900.0, Some(400.0)),
            summary("C", 2600.0, Some(5.0)),
        ];
        assert_eq!(recommend(&summaries).unwrap().genotype, "B");
    }

    #[test]
    fn equal_mean_smaller_sd_wins() {
        let summaries = vec![
            summary("A", 2700.0, Some(80.0)),
            summary("B", 2700.0, Some(20.0)),
        ];
        assert_eq!(recommend(&summaries).unwrap().genotype, "B");
    }

    #[test]
    fn missing_sd_loses_ties() {
        let summaries = vec![
            summary("Single", 2700.0, None),
            summary("Replicated", 2700.0, Some(500.0)),
        ];
        assert_eq!(recommend(&summaries).unwrap().genotype, "Replicated");
    }

    #[test]
    fn missing_sd_does_not_outweigh_mean_yield() {
        let summaries = vec![
            summary("Replicated", 2600.0, Some(5.0)),
            summary("Single", 2650.0, None),
        ];
        assert_eq!(recommend(&summaries).unwrap().genotype, "Single");
    }

    #[test]
    fn full_ties_keep_input_order() {
        let summaries = vec![
            summary("First", 2500.0, None),
            summary("Second", 2500.0, None),
        ];
        assert_eq!(recommend(&summaries).unwrap().genotype, "First");
        let ranked: Vec<String> = rank(&summaries).into_iter().map(|s| s.genotype).collect();
        assert_eq!(ranked, vec!["First", "Second"]);
    }

    #[test]
    fn rank_orders_everything() {
        let summaries = vec![
            summary("A", 2400.0, Some(10.0)),
            summary("B", 2700.0, None),
            summary("C", 2700.0, Some(30.0)),
            summary("D", 2800.0, Some(90.0)),
        ];
        let ranked: Vec<String> = rank(&summaries).into_iter().map(|s| s.genotype).collect();
        assert_eq!(ranked, vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn recommend_agrees_with_rank() {
        let summaries = genotype_summaries(&TrialRecord::example_table().unwrap());
        assert_eq!(recommend(&summaries).unwrap(), rank(&summaries)[0]);
    }

    #[test]
    fn example_table_recommends_line_2() {
        let summaries = genotype_summaries(&TrialRecord::example_table().unwrap());
        let best = recommend(&summaries).unwrap();
        assert_eq!(best.genotype, "Line-2");
        assert_eq!(best.mean_yield, 2700.0);
    }

    #[test]
    fn empty_summaries_is_no_data() {
        assert_eq!(recommend(&[]), Err(NoDataError));
        assert!(rank(&[]).is_empty());
    }
}
