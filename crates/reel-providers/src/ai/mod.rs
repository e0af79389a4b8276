//! AI Script Provider Implementations
//!
//! | Provider | API | Default model |
//! |----------|-----|---------------|
//! | `openai_direct` | OpenAI chat completions | gpt-4 |
//! | `groq` | Groq (OpenAI-compatible) chat completions | llama-3.3-70b-versatile |
//! | `huggingface` | Hugging Face inference API | meta-llama/Llama-3.2-3B-Instruct |
//!
//! All providers share one prompt and one HOOK/BODY/CTA section parser.

pub mod groq;
pub mod helpers;
pub mod huggingface;
pub mod openai;

pub use groq::GroqScriptProvider;
pub use helpers::{ChatCompletionsClient, build_prompt, extract_section, script_from_raw};
pub use huggingface::HuggingFaceScriptProvider;
pub use openai::OpenAiScriptProvider;
