//! Deterministic assembly of the human-readable comparison report
//!
//! The formatter only renders a finished `ComparisonResult`; it computes
//! nothing. Section markers ("=" banner, "---" headers, "-" rules) are a
//! stable contract for callers that parse the text instead of consuming
//! the structured result.

use super::locale::Language;
use super::{BANNER_WIDTH, RULE_WIDTH};
use crate::analysis::ComparisonResult;
use std::fmt::Write;

/// Render the comparison report in the requested language
///
/// Population means are printed to 2 decimal places, percentiles and
/// prevalences to 1.
pub fn render_report(comparison: &ComparisonResult, language: Language) -> String {
    let s = language.strings();
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out, " {}", s.report_title);
    let _ = writeln!(out, "{banner}");
    let _ = writeln!(out);

    let _ = writeln!(out, "--- {} ---", s.numeric_section_title);
    for metric in &comparison.numeric {
        let _ = writeln!(out, "- {}:", metric.field);
        let versus = s
            .user_vs_average_line
            .replace("{user}", &metric.user_value.to_string())
            .replace("{average}", &format!("{:.2}", metric.population_mean));
        let _ = writeln!(out, "  + {versus}");
        let standing = s
            .percentile_line
            .replace("{percentile}", &format!("{:.1}", metric.percentile));
        let _ = writeln!(out, "  + {standing}");
        let _ = writeln!(out, "{rule}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- {} ---", s.categorical_section_title);
    for trait_result in &comparison.categorical {
        let _ = writeln!(out, "- {}: '{}'", trait_result.field, trait_result.user_value);
        let shared = s
            .prevalence_line
            .replace("{prevalence}", &format!("{:.1}", trait_result.prevalence));
        let _ = writeln!(out, "  + {shared}");
        if trait_result.rare {
            let _ = writeln!(out, "  => ({})", s.rare_trait_note);
        }
    }

    out
}
