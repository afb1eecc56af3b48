//! Core data model: field values, the reference population, and one
//! respondent's profile

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single survey value, numeric or categorical
///
/// Untagged so JSON profiles read naturally: `21` becomes `Number`,
/// `"5-6 hours"` becomes `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value
    ///
    /// Text that parses as a float is accepted, since form submissions
    /// often deliver numbers as strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Exact equality used for prevalence counting
    ///
    /// Case-sensitive for text, no cross-type coercion.
    pub fn matches(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One respondent's answers, keyed by canonical field name
///
/// Partial profiles are allowed; fields the comparator does not recognize
/// are simply never read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    values: HashMap<String, FieldValue>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Rewrite external survey-export field names to their canonical form
    ///
    /// Applied once at intake; the comparator only ever sees canonical
    /// names.
    pub fn canonicalize(self) -> Self {
        let values = self
            .values
            .into_iter()
            .map(|(k, v)| (crate::analysis::fields::canonical_name(&k).to_string(), v))
            .collect();
        Self { values }
    }
}

/// In-memory reference population
///
/// Owned externally and borrowed read-only by the comparator; immutable for
/// the duration of one comparison. Records are assumed column-aligned:
/// a cell may be missing from an individual record, but every column the
/// comparator cares about exists in the header row.
#[derive(Debug, Clone, Default)]
pub struct PopulationDataset {
    columns: Vec<String>,
    records: Vec<HashMap<String, FieldValue>>,
}

impl PopulationDataset {
    pub fn new(columns: Vec<String>, records: Vec<HashMap<String, FieldValue>>) -> Self {
        Self { columns, records }
    }

    /// Build from records alone, deriving the column list from the keys
    /// in first-seen order. Convenient for tests and programmatic callers.
    pub fn from_records(records: Vec<HashMap<String, FieldValue>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c == field)
    }

    pub fn records(&self) -> &[HashMap<String, FieldValue>] {
        &self.records
    }

    /// Present numeric values of a column, in record order
    ///
    /// Records missing the value, or holding text that does not parse as a
    /// number, are skipped.
    pub fn numeric_column(&self, field: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.get(field).and_then(FieldValue::as_number))
            .collect()
    }

    /// Maximum observed numeric value of a column, if any value is present
    pub fn column_max(&self, field: &str) -> Option<f64> {
        self.numeric_column(field)
            .into_iter()
            .fold(None, |max, v| match max {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }

    /// Count of records whose value for `field` matches `value` exactly
    pub fn count_matching(&self, field: &str, value: &FieldValue) -> usize {
        self.records
            .iter()
            .filter(|r| r.get(field).is_some_and(|v| v.matches(value)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_field_value_as_number() {
        assert_eq!(FieldValue::Number(8.5).as_number(), Some(8.5));
        assert_eq!(FieldValue::Text("7".into()).as_number(), Some(7.0));
        assert_eq!(FieldValue::Text(" 3.25 ".into()).as_number(), Some(3.25));
        assert_eq!(FieldValue::Text("Healthy".into()).as_number(), None);
    }

    #[test]
    fn test_field_value_matches_is_case_sensitive() {
        let male = FieldValue::Text("Male".into());
        assert!(male.matches(&FieldValue::Text("Male".into())));
        assert!(!male.matches(&FieldValue::Text("male".into())));
        // No cross-type coercion: 5 does not match "5"
        assert!(!FieldValue::Number(5.0).matches(&FieldValue::Text("5".into())));
    }

    #[test]
    fn test_numeric_column_skips_missing() {
        let dataset = PopulationDataset::from_records(vec![
            record(&[("Age", FieldValue::Number(20.0))]),
            record(&[("Gender", FieldValue::Text("Male".into()))]),
            record(&[("Age", FieldValue::Number(24.0))]),
        ]);
        assert_eq!(dataset.numeric_column("Age"), vec![20.0, 24.0]);
        assert_eq!(dataset.column_max("Age"), Some(24.0));
        assert_eq!(dataset.column_max("CGPA"), None);
    }

    #[test]
    fn test_count_matching() {
        let dataset = PopulationDataset::from_records(vec![
            record(&[("Gender", FieldValue::Text("Male".into()))]),
            record(&[("Gender", FieldValue::Text("Female".into()))]),
            record(&[("Gender", FieldValue::Text("Male".into()))]),
        ]);
        let male = FieldValue::Text("Male".into());
        assert_eq!(dataset.count_matching("Gender", &male), 2);
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_profile_json_roundtrip() {
        let json = r#"{"Age": 21, "Sleep Duration": "5-6 hours"}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile JSON");
        assert_eq!(profile.get("Age"), Some(&FieldValue::Number(21.0)));
        assert_eq!(
            profile.get("Sleep Duration"),
            Some(&FieldValue::Text("5-6 hours".into()))
        );
        assert!(!profile.contains("CGPA"));
    }

    #[test]
    fn test_profile_canonicalize() {
        let mut profile = UserProfile::new();
        profile.set("Have you ever had suicidal thoughts ?", "Yes");
        let profile = profile.canonicalize();
        assert_eq!(
            profile.get("Suicidal Thoughts"),
            Some(&FieldValue::Text("Yes".into()))
        );
    }
}
