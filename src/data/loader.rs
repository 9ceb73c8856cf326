use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord, SchemaError};

/// Required column names, matching the fixed source schema.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the fixed column names (recommended)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – flat columns with the same names
///
/// Extra columns are ignored in all formats.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row deserialization (shared by CSV and JSON)
// ---------------------------------------------------------------------------

/// One source row before schema validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    fn into_record(self) -> Result<LaunchRecord, SchemaError> {
        LaunchRecord::new(self.site, self.payload_mass, self.class, self.booster_category)
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for required in [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER] {
        if !headers.iter().any(|h| h == required) {
            return Err(SchemaError::MissingColumn(required))
                .context("validating CSV headers");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        let rec = raw
            .into_record()
            .with_context(|| format!("CSV row {row_no}"))?;
        records.push(rec);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 2500.0,
///     "class": 1,
///     "Booster Version Category": "FT"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    let mut records = Vec::with_capacity(raw.len());
    for (i, row) in raw.into_iter().enumerate() {
        let rec = row
            .into_record()
            .with_context(|| format!("JSON row {i}"))?;
        records.push(rec);
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launch records from a Parquet file with flat columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): integer columns may be Int32 or Int64,
/// payload mass may be Float32, Float64, or an integer type.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = batch_column(&batch, COL_SITE)?;
        let payload_col = batch_column(&batch, COL_PAYLOAD)?;
        let class_col = batch_column(&batch, COL_CLASS)?;
        let booster_col = batch_column(&batch, COL_BOOSTER)?;

        for row in 0..batch.num_rows() {
            let site = extract_string(site_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_SITE}'"))?;
            let payload = extract_f64(payload_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_PAYLOAD}'"))?;
            let class = extract_i64(class_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_CLASS}'"))?;
            let booster = extract_string(booster_col, row)
                .with_context(|| format!("Row {row}: reading '{COL_BOOSTER}'"))?;

            let rec = LaunchRecord::new(site, payload, class, booster)
                .with_context(|| format!("Parquet row {row}"))?;
            records.push(rec);
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Parquet / Arrow helpers --

fn batch_column<'a>(
    batch: &'a arrow::record_batch::RecordBatch,
    name: &'static str,
) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema_ref()
        .index_of(name)
        .map_err(|_| SchemaError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row) as f64)
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as f64)
    } else {
        bail!("Expected a numeric column, got {:?}", col.data_type())
    }
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(arr.value(row))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int32Array>() {
        Ok(arr.value(row) as i64)
    } else {
        bail!("Expected an integer column, got {:?}", col.data_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("launchdash-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_roundtrip() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,500.0,v1.0
2,KSC LC-39A,1,4200.5,FT
";
        let path = write_temp("ok.csv", csv);
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].site, "CCAFS LC-40");
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[1].payload_mass, 4200.5);
        assert_eq!(ds.records[1].booster_category, "FT");
        assert_eq!(ds.payload_bounds, (500.0, 4200.5));
    }

    #[test]
    fn csv_missing_column_is_rejected() {
        let csv = "\
Launch Site,class,Booster Version Category
CCAFS LC-40,1,FT
";
        let path = write_temp("missing.csv", csv);
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("CSV headers"));
    }

    #[test]
    fn csv_bad_outcome_class_is_rejected() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,3,500.0,v1.0
";
        let path = write_temp("badclass.csv", csv);
        assert!(load_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn json_roundtrip() {
        let json = r#"[
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 9600.0,
             "class": 1, "Booster Version Category": "FT"}
        ]"#;
        let path = write_temp("ok.json", json);
        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].site, "VAFB SLC-4E");
        assert_eq!(ds.records[0].outcome, Outcome::Success);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("data.xlsx", "");
        assert!(load_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
