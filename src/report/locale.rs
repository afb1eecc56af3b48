//! Message catalogs for the supported report languages
//!
//! Each language is a typed `ReportStrings` value, so a missing message is
//! a compile error rather than a blank line at render time. Sentence
//! templates carry named placeholders (`{user}`, `{percentile}`, ...) the
//! formatter substitutes; computation never depends on the language.

/// Supported report languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Fallback for unrecognized tags
    #[default]
    English,
    Vietnamese,
}

impl Language {
    /// Resolve a language tag, falling back to English for anything
    /// outside the closed set
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" | "vietnamese" => Self::Vietnamese,
            _ => Self::English,
        }
    }

    /// Message catalog for this language
    pub fn strings(self) -> &'static ReportStrings {
        match self {
            Self::English => &ENGLISH,
            Self::Vietnamese => &VIETNAMESE,
        }
    }
}

/// All report and advice messages for one language
#[derive(Debug)]
pub struct ReportStrings {
    pub report_title: &'static str,
    pub numeric_section_title: &'static str,
    pub categorical_section_title: &'static str,
    /// Placeholders: `{user}`, `{average}`
    pub user_vs_average_line: &'static str,
    /// Placeholder: `{percentile}`
    pub percentile_line: &'static str,
    /// Placeholder: `{prevalence}`
    pub prevalence_line: &'static str,
    pub rare_trait_note: &'static str,
    /// Placeholder: `{label}` — appended to the report for the advice prompt
    pub risk_label_line: &'static str,
    /// Placeholder: `{report}` — instructional template for the advice LLM
    pub advice_template: &'static str,
    /// Placeholder: `{error}` — shown in place of advice on any failure
    pub advice_unavailable: &'static str,
    /// Shown when the API credential is not configured
    pub advice_missing_key: &'static str,
}

static ENGLISH: ReportStrings = ReportStrings {
    report_title: "USER VS POPULATION ANALYSIS REPORT",
    numeric_section_title: "1. QUANTITATIVE METRICS (NUMERICAL)",
    categorical_section_title: "2. DEMOGRAPHIC TRAITS (CATEGORICAL)",
    user_vs_average_line: "You: {user} | Population average: {average}",
    percentile_line: "You are higher than {percentile}% of other students.",
    prevalence_line: "{prevalence}% of other students share this trait with you.",
    rare_trait_note: "This is a rare/minority trait",
    risk_label_line: "Predicted depression risk: {label}",
    advice_template: "\
You are a warm, upbeat peer counselor at a university wellbeing center. \
Based on the comparison report below, write a short personal letter to the \
student: open with genuine praise for a strength you see in the numbers, \
gently point out the metrics that look strained compared to their peers, \
then give two or three small, concrete habits to try this week. If the \
report mentions suicidal thoughts or a family history of mental illness, \
encourage them plainly but kindly to talk to a professional. Never judge, \
never lecture.\n\nREPORT:\n{report}\n\nBegin your reply now:",
    advice_unavailable: "Sorry, the advice service is busy right now. Details: {error}",
    advice_missing_key: "Error: GROQ_API_KEY is not set. Configure it in the environment or a .env file.",
};

static VIETNAMESE: ReportStrings = ReportStrings {
    report_title: "BÁO CÁO PHÂN TÍCH NGƯỜI DÙNG VS CỘNG ĐỒNG",
    numeric_section_title: "1. CHỈ SỐ ĐỊNH LƯỢNG (NUMERICAL)",
    categorical_section_title: "2. ĐẶC ĐIỂM ĐỊNH DANH (CATEGORICAL)",
    user_vs_average_line: "Bạn: {user} | Trung bình cộng đồng: {average}",
    percentile_line: "Bạn cao hơn {percentile}% sinh viên khác.",
    prevalence_line: "Có {prevalence}% sinh viên có cùng đặc điểm này với bạn.",
    rare_trait_note: "Đây là một đặc điểm hiếm gặp/thiểu số",
    risk_label_line: "Nhãn nguy cơ trầm cảm dự đoán: {label}",
    advice_template: "\
Bạn là một người bạn đồng hành tâm lý thân thiện tại trường đại học. Dựa \
vào báo cáo so sánh bên dưới, hãy viết một lá thư ngắn cho sinh viên: mở \
đầu bằng một lời khen chân thành về điểm mạnh thấy được trong số liệu, nhẹ \
nhàng chỉ ra các chỉ số đang căng thẳng hơn so với các bạn khác, rồi gợi ý \
hai ba thói quen nhỏ, cụ thể để thử trong tuần này. Nếu báo cáo nhắc đến \
suy nghĩ tự tử hoặc tiền sử bệnh tâm lý trong gia đình, hãy khuyến khích \
bạn ấy tìm sự hỗ trợ chuyên nghiệp một cách kiên quyết nhưng ấm áp. Tuyệt \
đối không phán xét.\n\nBÁO CÁO:\n{report}\n\nBắt đầu câu trả lời ngay dưới đây:",
    advice_unavailable: "Xin lỗi, hệ thống tư vấn đang bận. Chi tiết: {error}",
    advice_missing_key: "Lỗi: Không tìm thấy GROQ_API_KEY. Vui lòng cấu hình biến môi trường hoặc file .env.",
};
