use tracing::error;

use crate::server::models::chat::ChatMessage;
use crate::server::services::ollama::{types, OllamaService};
use crate::server::services::transcript::{TranscriptError, TranscriptLog};

/// Fixed warning suffix appended to every assistant reply.
pub const DISCLAIMER: &str = "\n\n⚠️ [DIL REQUIRED] — Verify with physician.";

/// Runs one question/answer exchange: normalize the history, ask the model,
/// decorate the reply, record it, and hand back the grown conversation.
pub struct TriageService {
    ollama: OllamaService,
    transcript: TranscriptLog,
}

impl TriageService {
    pub fn new(ollama: OllamaService, transcript: TranscriptLog) -> Self {
        Self { ollama, transcript }
    }

    pub fn transcript(&self) -> &TranscriptLog {
        &self.transcript
    }

    /// Returns the input history plus the new user turn and the assistant's
    /// final answer. Never mutates the caller's history.
    ///
    /// An inference fault becomes an in-band `Error: …` answer, decorated
    /// and logged like any other; only a transcript write failure is
    /// returned as an error.
    pub async fn handle(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<Vec<ChatMessage>, TranscriptError> {
        // Flatten prior turns to plain text, preserving role and order,
        // then append the new user turn last.
        let mut request = Vec::with_capacity(history.len() + 1);
        for msg in history {
            request.push(types::ChatMessage {
                role: msg.role.as_str().to_string(),
                content: msg.content.as_text(),
            });
        }
        request.push(types::ChatMessage {
            role: "user".to_string(),
            content: message.to_string(),
        });

        let answer = match self.ollama.chat(request).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                error!("Inference call failed: {}", e);
                format!("Error: {}", e)
            }
        };

        let final_answer = format!("{}{}", answer, DISCLAIMER);

        self.transcript.append(message, &final_answer)?;

        let mut updated = history.to_vec();
        updated.push(ChatMessage::user(message));
        updated.push(ChatMessage::assistant(final_answer));
        Ok(updated)
    }
}
