//! Student wellness comparison engine
//!
//! Compares one respondent's self-reported academic/lifestyle profile
//! against a reference population of prior respondents:
//! - percentile ranks (strict less-than) for the numeric metrics
//! - prevalence ratios with a rarity flag for the categorical traits
//! - a localized, human-readable comparison report
//! - a normalized radar-chart series for visualization
//! - an advice prompt handed to an external language model
//!
//! The core is pure and single-threaded: one `ComparisonResult` per call,
//! derived views for text and chart data, no shared mutable state. Only
//! the advice boundary suspends, and it starts strictly after the
//! comparison is finished.

pub mod advice;
pub mod analysis;
pub mod classifier;
pub mod error;
pub mod population;
pub mod report;

pub use analysis::{
    compare_user_to_population, radar_series, CategoricalFieldResult, ComparisonResult,
    NumericFieldResult, RadarSeries,
};
pub use classifier::{RiskClassifier, RiskLabel};
pub use error::{AnalysisError, LoadError};
pub use population::{FieldValue, PopulationDataset, UserProfile};
pub use report::{render_report, Language};
