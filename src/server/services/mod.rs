pub mod ollama;
pub mod transcript;
pub mod triage;

pub use ollama::OllamaService;
pub use transcript::{TranscriptError, TranscriptLog};
pub use triage::TriageService;
