//! External text-generation collaborator
//!
//! The comparison is complete and immutable before any call here starts;
//! a failing or slow collaborator can only cost the advice text, never the
//! analysis. Every failure is absorbed into a localized diagnostic string.

use super::prompt::{assemble_prompt, build_llm_prompt};
use crate::report::Language;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

/// OpenAI-compatible endpoint of the Groq API
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model used for advice generation
pub const ADVICE_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Text-generation collaborator: one operation, prompt in, advice out
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String>;
}

/// Groq chat-completions client
pub struct GroqProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: GROQ_API_BASE.to_string(),
            api_key,
            model: ADVICE_MODEL.to_string(),
        }
    }

    /// Build from the `GROQ_API_KEY` environment variable, if configured
    pub fn from_env() -> Option<Self> {
        std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }
}

#[async_trait]
impl AdviceProvider for GroqProvider {
    async fn generate(&self, prompt: String) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let res = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = res.json().await?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .context("completion response carried no content")?;

        Ok(content.to_string())
    }
}

/// Request advice for a finished report
///
/// Pass `None` when no credential is configured. Failures of the external
/// collaborator never escape this function: the returned string is either
/// the advice text or a localized diagnostic. The comparison that produced
/// `report_text` is never retried or touched.
pub async fn request_advice(
    provider: Option<&dyn AdviceProvider>,
    report_text: &str,
    risk_label: Option<&str>,
    language: Language,
) -> String {
    let strings = language.strings();
    let Some(provider) = provider else {
        return strings.advice_missing_key.to_string();
    };

    let assembled = assemble_prompt(report_text, risk_label, language);
    let prompt = build_llm_prompt(&assembled, language);

    match provider.generate(prompt).await {
        Ok(advice) => advice,
        Err(err) => {
            log::warn!("advice collaborator failed: {err:#}");
            strings.advice_unavailable.replace("{error}", &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct CannedProvider(Result<&'static str, &'static str>);

    #[async_trait]
    impl AdviceProvider for CannedProvider {
        async fn generate(&self, prompt: String) -> Result<String> {
            assert!(prompt.contains("REPORT BODY"), "prompt lost the report");
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(msg) => Err(anyhow!(msg)),
            }
        }
    }

    #[tokio::test]
    async fn test_advice_returned_on_success() {
        let provider = CannedProvider(Ok("take a walk"));
        let advice = request_advice(
            Some(&provider as &dyn AdviceProvider),
            "REPORT BODY",
            Some("No"),
            Language::English,
        )
        .await;
        assert_eq!(advice, "take a walk");
    }

    #[tokio::test]
    async fn test_failure_becomes_diagnostic_string() {
        let provider = CannedProvider(Err("quota exceeded"));
        let advice = request_advice(
            Some(&provider as &dyn AdviceProvider),
            "REPORT BODY",
            None,
            Language::English,
        )
        .await;
        assert!(advice.contains("advice service is busy"));
        assert!(advice.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_missing_credential_becomes_diagnostic_string() {
        let advice = request_advice(None, "REPORT BODY", None, Language::Vietnamese).await;
        assert!(advice.contains("GROQ_API_KEY"));
    }
}
