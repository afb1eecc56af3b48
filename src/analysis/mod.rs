//! Statistical comparison of one profile against the reference population

pub mod fields;
mod comparator;
mod radar;

pub use comparator::{
    compare_user_to_population, CategoricalFieldResult, ComparisonResult, NumericFieldResult,
};
pub use radar::{radar_series, RadarSeries};

/// Prevalence below this percentage marks a categorical value as rare
pub const RARITY_THRESHOLD_PCT: f64 = 10.0;

/// Upper bound of the normalized radar scale
pub const RADAR_SCALE_MAX: f64 = 10.0;
