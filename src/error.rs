//! Error types for the comparison core

use thiserror::Error;

/// Errors raised by the metric comparator
///
/// A field missing from the profile or the dataset is not an error: the
/// field is skipped and the comparison continues. These variants cover the
/// cases where the whole comparison call must fail.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The user supplied a value for a numeric field that cannot be
    /// converted to a number. The comparison fails as a whole; no partial
    /// report is produced.
    #[error("value '{value}' for field '{field}' is not numeric")]
    ValueConversion { field: String, value: String },

    /// The population dataset holds zero records, so means, percentiles
    /// and prevalences are undefined.
    #[error("population dataset contains no records")]
    EmptyPopulation,
}

/// Errors raised while loading a population dataset from CSV
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset CSV")]
    Csv(#[from] csv::Error),
}
