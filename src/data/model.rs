use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Outcome – binary launch result (the `class` column)
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the numeric `class` column (1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Parse the `class` column value.  Anything other than 0 or 1 is a
    /// schema violation.
    pub fn from_class(class: i64) -> Result<Self, SchemaError> {
        match class {
            1 => Ok(Outcome::Success),
            0 => Ok(Outcome::Failure),
            other => Err(SchemaError::BadOutcomeClass(other)),
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric value used as the scatter chart's y coordinate.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Success => 1.0,
            Outcome::Failure => 0.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// Violations of the fixed launch-record schema, reported per row by the
/// loaders.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("outcome class must be 0 or 1, got {0}")]
    BadOutcomeClass(i64),
    #[error("payload mass must be non-negative, got {0}")]
    NegativePayload(f64),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, one of a fixed small set.
    pub site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass: f64,
    /// Binary success/failure outcome.
    pub outcome: Outcome,
    /// Booster version category (e.g. "FT", "v1.1").
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: String,
        payload_mass: f64,
        class: i64,
        booster_category: String,
    ) -> Result<Self, SchemaError> {
        if payload_mass < 0.0 {
            return Err(SchemaError::NegativePayload(payload_mass));
        }
        Ok(LaunchRecord {
            site,
            payload_mass,
            outcome: Outcome::from_class(class)?,
            booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site list and payload bounds.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records, in file order.
    pub records: Vec<LaunchRecord>,
    /// Ordered list of distinct launch sites (first-appearance order).
    pub sites: Vec<String>,
    /// Ordered list of distinct booster categories.
    pub booster_categories: Vec<String>,
    /// Observed payload mass bounds (min, max); (0, 0) for an empty dataset.
    pub payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build site/category indices and payload bounds from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min = min.min(rec.payload_mass);
            max = max.max(rec.payload_mass);
        }

        let payload_bounds = if records.is_empty() { (0.0, 0.0) } else { (min, max) };

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord::new(site.to_string(), payload, class, booster.to_string()).unwrap()
    }

    #[test]
    fn outcome_class_parsing() {
        assert_eq!(Outcome::from_class(1).unwrap(), Outcome::Success);
        assert_eq!(Outcome::from_class(0).unwrap(), Outcome::Failure);
        assert!(Outcome::from_class(2).is_err());
        assert!(Outcome::from_class(-1).is_err());
    }

    #[test]
    fn negative_payload_rejected() {
        let err = LaunchRecord::new("KSC LC-39A".into(), -1.0, 1, "FT".into());
        assert!(matches!(err, Err(SchemaError::NegativePayload(_))));
    }

    #[test]
    fn dataset_indices_and_bounds() {
        let ds = LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 500.0, 0, "v1.0"),
            rec("KSC LC-39A", 9600.0, 1, "FT"),
            rec("CCAFS LC-40", 2500.0, 1, "FT"),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.booster_categories, vec!["v1.0", "FT"]);
        assert_eq!(ds.payload_bounds, (500.0, 9600.0));
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds, (0.0, 0.0));
    }
}
