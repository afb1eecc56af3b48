//! Localized report rendering

mod formatter;
mod locale;

pub use formatter::render_report;
pub use locale::{Language, ReportStrings};

/// Width of the "=" banner framing the report title
pub(crate) const BANNER_WIDTH: usize = 40;

/// Width of the "-" rule separating numeric blocks
pub(crate) const RULE_WIDTH: usize = 30;
