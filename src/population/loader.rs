//! CSV loading for the reference population
//!
//! The dataset is assumed cleansed and column-aligned; loading only parses
//! cell types and rewrites survey-export headers to canonical field names.

use super::{FieldValue, PopulationDataset};
use crate::analysis::fields::canonical_name;
use crate::error::LoadError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the cleansed survey export
pub const DEFAULT_DATASET_PATH: &str = "data/clean_df.csv";

/// Load a population dataset from a CSV file
pub fn load_dataset(path: impl AsRef<Path>) -> Result<PopulationDataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_dataset_from_reader(file)
}

/// Load a population dataset from any reader producing CSV with a header row
///
/// Cells that parse as a float become numeric values, everything else is
/// kept as text. Empty cells are treated as missing and omitted from the
/// record.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<PopulationDataset, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| canonical_name(h.trim()).to_string())
        .collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut record = HashMap::with_capacity(headers.len());
        for (column, cell) in headers.iter().zip(row.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let value = match cell.parse::<f64>() {
                Ok(n) => FieldValue::Number(n),
                Err(_) => FieldValue::Text(cell.to_string()),
            };
            record.insert(column.clone(), value);
        }
        records.push(record);
    }

    log::info!(
        "loaded population dataset: {} records, {} columns",
        records.len(),
        headers.len()
    );

    Ok(PopulationDataset::new(headers, records))
}

/// Load the dataset from its default path
pub fn load_default_dataset() -> Result<PopulationDataset, LoadError> {
    load_dataset(DEFAULT_DATASET_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let csv = "\
Age,CGPA,Gender
20,8.5,Male
22,,Female
24,6.75,Male
";
        let dataset = load_dataset_from_reader(csv.as_bytes()).expect("valid CSV");

        assert_eq!(dataset.len(), 3);
        assert!(dataset.has_column("Age"));
        assert!(dataset.has_column("Gender"));

        // The empty CGPA cell in record 2 is missing, not zero
        assert_eq!(dataset.numeric_column("CGPA"), vec![8.5, 6.75]);
        assert_eq!(
            dataset.count_matching("Gender", &FieldValue::Text("Male".into())),
            2
        );
    }

    #[test]
    fn test_survey_header_is_canonicalized() {
        let csv = "\
Have you ever had suicidal thoughts ?,Age
Yes,20
No,22
";
        let dataset = load_dataset_from_reader(csv.as_bytes()).expect("valid CSV");

        assert!(dataset.has_column("Suicidal Thoughts"));
        assert!(!dataset.has_column("Have you ever had suicidal thoughts ?"));
        assert_eq!(
            dataset.count_matching("Suicidal Thoughts", &FieldValue::Text("Yes".into())),
            1
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_dataset("data/does_not_exist.csv").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.contains("does_not_exist")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
