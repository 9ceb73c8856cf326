use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Filter criteria: site selection + payload range
// ---------------------------------------------------------------------------

/// Which launch site is selected in the dropdown.
/// `All` is the sentinel meaning "no site filter applied".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record from `site` passes the selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }
}

/// Inclusive payload mass range [lo, hi] in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.lo && mass <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records matching the selected site (or all sites) whose
/// payload mass lies within the range.  Pure; no side effects.  An empty
/// result is meaningful and must be handled by the caller (empty-state
/// placeholder, not a zero-length chart).
pub fn filtered_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.site) && range.contains(rec.payload_mass))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchDataset, LaunchRecord};

    fn sample_dataset() -> LaunchDataset {
        let rows = [
            ("CCAFS LC-40", 500.0, 0, "v1.0"),
            ("CCAFS LC-40", 3200.0, 1, "FT"),
            ("VAFB SLC-4E", 9600.0, 1, "FT"),
            ("KSC LC-39A", 2200.0, 1, "B4"),
            ("CCAFS SLC-40", 4000.0, 0, "B4"),
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
    fn all_sentinel_returns_full_dataset() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn site_filter_returns_only_that_site() {
        let ds = sample_dataset();
        let sel = SiteSelection::Site("CCAFS LC-40".into());
        let idx = filtered_indices(&ds, &sel, PayloadRange::new(0.0, 10000.0));
        assert_eq!(idx, vec![0, 1]);
        for &i in &idx {
            assert_eq!(ds.records[i].site, "CCAFS LC-40");
        }
    }

    #[test]
    fn payload_range_is_inclusive() {
        let ds = sample_dataset();
        let idx = filtered_indices(&ds, &SiteSelection::All, PayloadRange::new(500.0, 3200.0));
        assert_eq!(idx, vec![0, 1, 3]);
        for &i in &idx {
            let m = ds.records[i].payload_mass;
            assert!((500.0..=3200.0).contains(&m));
        }
    }

    #[test]
    fn no_match_yields_empty_indices() {
        let ds = sample_dataset();
        let sel = SiteSelection::Site("VAFB SLC-4E".into());
        let idx = filtered_indices(&ds, &sel, PayloadRange::new(0.0, 1000.0));
        assert!(idx.is_empty());
    }
}
