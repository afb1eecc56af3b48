//! Prompt assembly for the advice collaborator
//!
//! No analysis happens here: the prompt is the finished report text, the
//! optional risk label as one labeled line, and the language's fixed
//! instructional template.

use crate::report::Language;

/// Append the risk label to the report text as an additional labeled line
///
/// Without a label the report passes through unchanged.
pub fn assemble_prompt(report_text: &str, risk_label: Option<&str>, language: Language) -> String {
    match risk_label {
        Some(label) => {
            let line = language.strings().risk_label_line.replace("{label}", label);
            format!("{report_text}\n{line}\n")
        }
        None => report_text.to_string(),
    }
}

/// Wrap an assembled report in the language's instructional template
///
/// The result is passed verbatim to the text-generation collaborator.
pub fn build_llm_prompt(assembled_report: &str, language: Language) -> String {
    language
        .strings()
        .advice_template
        .replace("{report}", assembled_report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_appended_as_labeled_line() {
        let prompt = assemble_prompt("REPORT BODY", Some("Yes"), Language::English);
        assert!(prompt.starts_with("REPORT BODY\n"));
        assert!(prompt.contains("Predicted depression risk: Yes"));
    }

    #[test]
    fn test_no_label_passes_report_through() {
        let prompt = assemble_prompt("REPORT BODY", None, Language::English);
        assert_eq!(prompt, "REPORT BODY");
    }

    #[test]
    fn test_template_embeds_report_verbatim() {
        let assembled = assemble_prompt("REPORT BODY", Some("No"), Language::Vietnamese);
        let prompt = build_llm_prompt(&assembled, Language::Vietnamese);
        assert!(prompt.contains(&assembled));
        assert!(!prompt.contains("{report}"));
    }
}
