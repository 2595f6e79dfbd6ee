//! Prompt assembly and answer generation
//!
//! `answer_with` is total: whatever the generation service does, the
//! caller gets a usable reply string. A rate-limited call gets a distinct
//! in-character "resting" message; any other failure gets a diagnostic
//! embedding the error. This is what lets every front-end treat a turn as
//! something that always produces a reply.

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::history::{render_history, Turn, HISTORY_WINDOW};

/// Reply used when the provider reports rate-limiting or quota exhaustion
pub const RESTING_REPLY: &str = "\u{1F634} Zzz... RANI lagi istirahat sebentar! Terlalu banyak yang bertanya hari ini sampai kepala saya pusing~ Silakan coba lagi nanti ya, saya janji akan segar kembali! \u{1F4AA}";

const PERSONA: &str = "Saya ingin Anda berperan sebagai dokumen yang sedang saya ajak bicara. Nama Anda \"RANI - Asisten Layanan Informasi Pengadilan Agama Medan\", dan Anda ramah, lucu, dan menarik. Gunakan konteks yang tersedia, jawab pertanyaan pengguna sebaik mungkin menggunakan sumber daya yang tersedia, dan selalu berikan pujian sebelum menjawab.\nJika tidak ada konteks yang relevan dengan pertanyaan yang diajukan, sarankan untuk datang dan bertanya langsung ke kantor Pengadilan Agama Medan dan berhenti setelahnya dan jangan merusak karakter.";

/// Trait for generation providers
#[async_trait]
pub trait Generator: Send + Sync {
    /// Submit a prompt and return the raw generated text
    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, GenerateError>;
}

/// Assemble the four-section prompt: persona, recent history, retrieved
/// context, and the new question
pub fn build_prompt(question: &str, context: &str, history: &[Turn]) -> String {
    let window = &history[history.len().saturating_sub(HISTORY_WINDOW)..];
    let chat_history = render_history(window);
    format!(
        "\n{persona}\n=== RIWAYAT CHAT ===\n{chat_history}\n=== DOKUMEN SUMBER ===\n{context}\n=== PERTANYAAN BARU ===\n{question}\n",
        persona = PERSONA,
        chat_history = chat_history,
        context = context,
        question = question,
    )
}

/// True when the error looks like rate-limiting or quota exhaustion
fn is_rate_limited(err: &GenerateError) -> bool {
    let msg = err.to_string().to_lowercase();
    ["429", "quota", "resource exhausted", "rate limit"]
        .iter()
        .any(|marker| msg.contains(marker))
}

/// Generate a reply, never failing
///
/// Returns the trimmed response text on success; on failure classifies
/// the error and returns a persona-consistent message instead.
pub async fn answer_with(
    generator: &dyn Generator,
    question: &str,
    context: &str,
    history: &[Turn],
    temperature: f32,
    max_output_tokens: u32,
) -> String {
    let prompt = build_prompt(question, context, history);
    match generator
        .generate(&prompt, temperature, max_output_tokens)
        .await
    {
        Ok(text) => text.trim().to_string(),
        Err(e) if is_rate_limited(&e) => {
            tracing::warn!("Gemini rate-limited: {}", e);
            RESTING_REPLY.to_string()
        }
        Err(e) => {
            tracing::error!("Gemini call failed: {}", e);
            format!("Terjadi kesalahan saat menghubungi Gemini: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{ConversationLog, HISTORY_WINDOW};
    use pretty_assertions::assert_eq;

    struct FixedGenerator(Result<String, fn() -> GenerateError>);

    #[async_trait]
    impl Generator for FixedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _temperature: f32,
            _max_output_tokens: u32,
        ) -> Result<String, GenerateError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[test]
    fn test_prompt_has_four_sections() {
        let mut log = ConversationLog::new();
        log.push_user("jam buka?");
        let prompt = build_prompt("jam buka?", "Jam operasional adalah 08.00", log.turns());
        assert!(prompt.contains("RANI - Asisten Layanan Informasi"));
        assert!(prompt.contains("=== RIWAYAT CHAT ===\nUser: jam buka?"));
        assert!(prompt.contains("=== DOKUMEN SUMBER ===\nJam operasional adalah 08.00"));
        assert!(prompt.contains("=== PERTANYAAN BARU ===\njam buka?"));
    }

    #[test]
    fn test_prompt_windows_history_to_five_turns() {
        let mut log = ConversationLog::new();
        for i in 0..12 {
            log.push_user(&format!("turn {}", i));
        }
        let prompt = build_prompt("q", "ctx", log.turns());
        for i in 0..7 {
            assert!(!prompt.contains(&format!("turn {}\n", i)), "turn {} leaked", i);
        }
        for i in 7..12 {
            assert!(prompt.contains(&format!("turn {}", i)));
        }
        assert_eq!(HISTORY_WINDOW, 5);
    }

    #[tokio::test]
    async fn test_success_trims_response() {
        let generator = FixedGenerator(Ok("  Halo!  \n".to_string()));
        let reply = answer_with(&generator, "q", "ctx", &[], 0.9, 4096).await;
        assert_eq!(reply, "Halo!");
    }

    #[tokio::test]
    async fn test_429_maps_to_resting_reply() {
        let generator = FixedGenerator(Err(|| GenerateError::Api {
            status: 429,
            body: "Too Many Requests".to_string(),
        }));
        let reply = answer_with(&generator, "q", "ctx", &[], 0.9, 4096).await;
        assert_eq!(reply, RESTING_REPLY);
    }

    #[tokio::test]
    async fn test_quota_marker_maps_to_resting_reply() {
        let generator = FixedGenerator(Err(|| GenerateError::Api {
            status: 400,
            body: "QUOTA exceeded for this project".to_string(),
        }));
        let reply = answer_with(&generator, "q", "ctx", &[], 0.9, 4096).await;
        assert_eq!(reply, RESTING_REPLY);
    }

    #[tokio::test]
    async fn test_other_failure_yields_diagnostic() {
        let generator = FixedGenerator(Err(|| GenerateError::EmptyResponse));
        let reply = answer_with(&generator, "q", "ctx", &[], 0.9, 4096).await;
        assert!(reply.starts_with("Terjadi kesalahan saat menghubungi Gemini:"));
    }
}
