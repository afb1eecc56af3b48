//! Canonical field vocabulary for the student wellness domain
//!
//! The comparator walks these fixed lists in order; result ordering follows
//! them, not discovery order. External spellings from survey exports are
//! rewritten to canonical names at the input boundary only.

/// Numeric academic/lifestyle metrics, in report order
pub const NUMERIC_FIELDS: [&str; 6] = [
    "Age",
    "Academic Pressure",
    "CGPA",
    "Study Satisfaction",
    "Work/Study Hours",
    "Financial Stress",
];

/// Categorical demographic/lifestyle attributes, in report order
pub const CATEGORICAL_FIELDS: [&str; 6] = [
    "Gender",
    "Sleep Duration",
    "Dietary Habits",
    "Degree",
    "Suicidal Thoughts",
    "Family History of Mental Illness",
];

/// Verbose survey-export spelling of the suicidal-thoughts column
const SUICIDAL_THOUGHTS_SURVEY_HEADER: &str = "Have you ever had suicidal thoughts ?";

/// Map an external field name to its canonical form
///
/// Unknown names pass through unchanged; the comparator ignores anything
/// outside the fixed lists anyway.
pub fn canonical_name(external: &str) -> &str {
    if external == SUICIDAL_THOUGHTS_SURVEY_HEADER {
        "Suicidal Thoughts"
    } else {
        external
    }
}
