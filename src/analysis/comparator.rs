//! Metric comparator: percentile ranks and prevalence ratios
//!
//! A pure function of the profile, the dataset, and the fixed field lists.
//! Same inputs always produce the same `ComparisonResult`.

use super::fields::{CATEGORICAL_FIELDS, NUMERIC_FIELDS};
use super::RARITY_THRESHOLD_PCT;
use crate::error::AnalysisError;
use crate::population::{FieldValue, PopulationDataset, UserProfile};
use serde::Serialize;

/// Comparison outcome for one numeric metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericFieldResult {
    pub field: String,
    pub user_value: f64,
    pub population_mean: f64,
    /// Percentage of records strictly below the user's value, in [0, 100].
    /// Ties are excluded from the numerator.
    pub percentile: f64,
}

/// Comparison outcome for one categorical attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalFieldResult {
    pub field: String,
    /// The user's value as given, not coerced
    pub user_value: FieldValue,
    /// Percentage of records sharing the value exactly, in [0, 100]
    pub prevalence: f64,
    /// Set when prevalence is strictly below 10%
    pub rare: bool,
}

/// Canonical output of one comparison call
///
/// Report text and chart data are both derived views of this value, so
/// percentiles and prevalences are computed exactly once. Field order
/// follows the fixed lists in [`super::fields`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComparisonResult {
    pub numeric: Vec<NumericFieldResult>,
    pub categorical: Vec<CategoricalFieldResult>,
}

/// Compare one respondent's profile against the reference population
///
/// Fields absent from either the profile or the dataset columns are
/// skipped; that is the normal partial-input path, not an error. The call
/// fails as a whole on an empty population or a numeric field whose user
/// value cannot be converted.
pub fn compare_user_to_population(
    profile: &UserProfile,
    dataset: &PopulationDataset,
) -> Result<ComparisonResult, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyPopulation);
    }
    let total = dataset.len() as f64;

    let mut numeric = Vec::with_capacity(NUMERIC_FIELDS.len());
    for field in NUMERIC_FIELDS {
        if !dataset.has_column(field) {
            log::debug!("numeric field '{}' not in dataset, skipping", field);
            continue;
        }
        let Some(raw) = profile.get(field) else {
            log::debug!("numeric field '{}' not in profile, skipping", field);
            continue;
        };
        let user_value = raw
            .as_number()
            .ok_or_else(|| AnalysisError::ValueConversion {
                field: field.to_string(),
                value: raw.to_string(),
            })?;

        let column = dataset.numeric_column(field);
        if column.is_empty() {
            // Column exists in the header but holds no numeric values;
            // nothing to compare against.
            log::debug!("numeric field '{}' has no recorded values, skipping", field);
            continue;
        }
        let population_mean = column.iter().sum::<f64>() / column.len() as f64;

        // Strict less-than percentile: a record equal to the user's value
        // does not count. A value below every record yields 0, above every
        // record yields 100.
        let below = column.iter().filter(|&&v| v < user_value).count();
        let percentile = below as f64 / total * 100.0;

        numeric.push(NumericFieldResult {
            field: field.to_string(),
            user_value,
            population_mean,
            percentile,
        });
    }

    let mut categorical = Vec::with_capacity(CATEGORICAL_FIELDS.len());
    for field in CATEGORICAL_FIELDS {
        if !dataset.has_column(field) {
            log::debug!("categorical field '{}' not in dataset, skipping", field);
            continue;
        }
        let Some(user_value) = profile.get(field) else {
            log::debug!("categorical field '{}' not in profile, skipping", field);
            continue;
        };

        let count = dataset.count_matching(field, user_value);
        let prevalence = count as f64 / total * 100.0;

        categorical.push(CategoricalFieldResult {
            field: field.to_string(),
            user_value: user_value.clone(),
            prevalence,
            rare: prevalence < RARITY_THRESHOLD_PCT,
        });
    }

    Ok(ComparisonResult {
        numeric,
        categorical,
    })
}
