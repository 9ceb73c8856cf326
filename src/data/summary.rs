use super::filter::SiteSelection;
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Pie chart summary
// ---------------------------------------------------------------------------

/// Chart-ready outcome summary for the pie chart.
///
/// Returned inside `Option`: `None` is the explicit empty state (no matching
/// records, or zero successes in the all-sites case) so the rendering layer
/// can show a placeholder instead of a degenerate chart.
#[derive(Debug, Clone, PartialEq)]
pub enum PieSummary {
    /// All-sites view: successful launch count per site, in dataset site
    /// order, zero-count sites omitted.
    SuccessesBySite(Vec<(String, usize)>),
    /// Single-site view: success vs failure breakdown.
    SiteOutcomes {
        site: String,
        successes: usize,
        failures: usize,
    },
}

impl PieSummary {
    /// Slices as (label, count) pairs for rendering.
    pub fn slices(&self) -> Vec<(String, usize)> {
        match self {
            PieSummary::SuccessesBySite(counts) => counts.clone(),
            PieSummary::SiteOutcomes {
                successes,
                failures,
                ..
            } => vec![
                (Outcome::Success.to_string(), *successes),
                (Outcome::Failure.to_string(), *failures),
            ],
        }
    }

    pub fn title(&self) -> String {
        match self {
            PieSummary::SuccessesBySite(_) => "Total Success Launches by Site".to_string(),
            PieSummary::SiteOutcomes { site, .. } => {
                format!("Success vs. Failed Launches for {site}")
            }
        }
    }
}

/// Reduce the filtered subset (`indices` into `dataset`) to a pie summary.
///
/// All-sites: counts successes per site; `None` when no successes exist.
/// Single site: counts success/failure; `None` when the subset is empty.
pub fn pie_summary(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    indices: &[usize],
) -> Option<PieSummary> {
    match selection {
        SiteSelection::All => {
            let mut counts: Vec<(String, usize)> = Vec::new();
            for site in &dataset.sites {
                let n = indices
                    .iter()
                    .filter(|&&i| {
                        let rec = &dataset.records[i];
                        rec.site == *site && rec.outcome.is_success()
                    })
                    .count();
                if n > 0 {
                    counts.push((site.clone(), n));
                }
            }
            if counts.is_empty() {
                None
            } else {
                Some(PieSummary::SuccessesBySite(counts))
            }
        }
        SiteSelection::Site(site) => {
            if indices.is_empty() {
                return None;
            }
            let successes = indices
                .iter()
                .filter(|&&i| dataset.records[i].outcome.is_success())
                .count();
            Some(PieSummary::SiteOutcomes {
                site: site.clone(),
                successes,
                failures: indices.len() - successes,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart points
// ---------------------------------------------------------------------------

/// One scatter point: payload mass (x) vs outcome (y), colored by booster
/// category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Pass the filtered subset through unchanged for point-plotting.  No
/// aggregation beyond the filtering already applied.
pub fn scatter_points(dataset: &LaunchDataset, indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            ScatterPoint {
                payload_mass: rec.payload_mass,
                outcome: rec.outcome,
                booster_category: rec.booster_category.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, PayloadRange};
    use crate::data::model::LaunchRecord;

    fn sample_dataset() -> LaunchDataset {
        let rows = [
            ("CCAFS LC-40", 500.0, 0, "v1.0"),
            ("CCAFS LC-40", 3200.0, 1, "FT"),
            ("VAFB SLC-4E", 9600.0, 1, "FT"),
            ("KSC LC-39A", 2200.0, 1, "B4"),
            ("CCAFS LC-40", 4000.0, 1, "FT"),
        ];
        LaunchDataset::from_records(
            rows.iter()
                .map(|&(site, mass, class, booster)| {
                    LaunchRecord::new(site.into(), mass, class, booster.into()).unwrap()
                })
                .collect(),
        )
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let ds = sample_dataset();
        let idx: Vec<usize> = (0..ds.len()).collect();
        let summary = pie_summary(&ds, &SiteSelection::All, &idx).unwrap();
        assert_eq!(
            summary,
            PieSummary::SuccessesBySite(vec![
                ("CCAFS LC-40".into(), 2),
                ("VAFB SLC-4E".into(), 1),
                ("KSC LC-39A".into(), 1),
            ])
        );
    }

    #[test]
    fn single_site_counts_sum_to_subset_size() {
        let ds = sample_dataset();
        let sel = SiteSelection::Site("CCAFS LC-40".into());
        let idx = filtered_indices(&ds, &sel, PayloadRange::new(0.0, 10000.0));
        let summary = pie_summary(&ds, &sel, &idx).unwrap();
        match summary {
            PieSummary::SiteOutcomes {
                successes,
                failures,
                ..
            } => assert_eq!(successes + failures, idx.len()),
            other => panic!("expected SiteOutcomes, got {other:?}"),
        }
    }

    #[test]
    fn empty_subset_is_explicit_empty_state() {
        let ds = sample_dataset();
        let sel = SiteSelection::Site("KSC LC-39A".into());
        assert_eq!(pie_summary(&ds, &sel, &[]), None);
    }

    #[test]
    fn all_sites_with_zero_successes_is_empty_state() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40".into(), 100.0, 0, "v1.0".into()).unwrap(),
            LaunchRecord::new("VAFB SLC-4E".into(), 200.0, 0, "v1.0".into()).unwrap(),
        ]);
        let idx: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(pie_summary(&ds, &SiteSelection::All, &idx), None);
    }

    #[test]
    fn scatter_passes_tuples_through_unchanged() {
        let ds = sample_dataset();
        let pts = scatter_points(&ds, &[1, 2]);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0].payload_mass, 3200.0);
        assert_eq!(pts[0].outcome, Outcome::Success);
        assert_eq!(pts[0].booster_category, "FT");
        assert_eq!(pts[1].payload_mass, 9600.0);
    }
}
