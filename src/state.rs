use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection, filtered_indices};
use crate::data::model::LaunchDataset;

/// Fixed upper limit of the payload slider (kg).  The dataset's observed
/// maximum is clamped to this ceiling.
pub const PAYLOAD_CEILING_KG: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Selected launch site ("All Sites" sentinel or one site).
    pub site_selection: SiteSelection,

    /// Selected payload range [lo, hi], inclusive.
    pub payload_range: PayloadRange,

    /// Slider bounds: dataset minimum .. fixed ceiling.
    pub slider_bounds: (f64, f64),

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Colours for pie slices (per site and per outcome label).
    pub site_colors: ColorMap,

    /// Colours for scatter points (per booster category).
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site_selection: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, PAYLOAD_CEILING_KG),
            slider_bounds: (0.0, PAYLOAD_CEILING_KG),
            visible_indices: Vec::new(),
            site_colors: ColorMap::default(),
            booster_colors: ColorMap::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise the controls and colours.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        let (min, max) = dataset.payload_bounds;
        self.slider_bounds = (min, PAYLOAD_CEILING_KG);
        self.payload_range = PayloadRange::new(min, max.min(PAYLOAD_CEILING_KG));
        self.site_selection = SiteSelection::All;

        self.site_colors = ColorMap::new(&dataset.sites);
        self.booster_colors = ColorMap::new(&dataset.booster_categories);

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Recompute `visible_indices` after a control change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.site_selection, self.payload_range);
        }
    }

    /// Select a site (or the "All Sites" sentinel) and refilter.
    pub fn set_site(&mut self, selection: SiteSelection) {
        self.site_selection = selection;
        self.refilter();
    }

    /// Move the lower payload bound; the upper bound follows if crossed.
    pub fn set_payload_lo(&mut self, lo: f64) {
        self.payload_range.lo = lo;
        if self.payload_range.hi < lo {
            self.payload_range.hi = lo;
        }
        self.refilter();
    }

    /// Move the upper payload bound; the lower bound follows if crossed.
    pub fn set_payload_hi(&mut self, hi: f64) {
        self.payload_range.hi = hi;
        if self.payload_range.lo > hi {
            self.payload_range.lo = hi;
        }
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40".into(), 1500.0, 1, "FT".into()).unwrap(),
            LaunchRecord::new("KSC LC-39A".into(), 9600.0, 1, "B5".into()).unwrap(),
            LaunchRecord::new("KSC LC-39A".into(), 15_600.0, 0, "B5".into()).unwrap(),
        ])
    }

    #[test]
    fn set_dataset_clamps_range_to_ceiling() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.slider_bounds, (1500.0, PAYLOAD_CEILING_KG));
        assert_eq!(state.payload_range.lo, 1500.0);
        assert_eq!(state.payload_range.hi, PAYLOAD_CEILING_KG);
        // The 15 600 kg launch falls outside the clamped range.
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn crossed_bounds_follow_each_other() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_payload_lo(12_000.0);
        assert_eq!(state.payload_range.hi, 12_000.0);
        state.set_payload_hi(2_000.0);
        assert_eq!(state.payload_range.lo, 2_000.0);
    }

    #[test]
    fn site_change_refilters() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_site(SiteSelection::Site("KSC LC-39A".into()));
        assert_eq!(state.visible_indices, vec![1]);
    }
}
