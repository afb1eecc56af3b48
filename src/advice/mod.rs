//! Advice-prompt assembly and the external text-generation boundary

mod prompt;
mod provider;

pub use prompt::{assemble_prompt, build_llm_prompt};
pub use provider::{request_advice, AdviceProvider, GroqProvider, ADVICE_MODEL, GROQ_API_BASE};
