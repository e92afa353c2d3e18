use regex::Regex;
use tracing::debug;

use super::llm_client::{ChatMessage, CompletionError, LlmClient};
use crate::models::AssistantCategory;

// ============================================================================
// Personas
// ============================================================================

const GENERAL_PERSONA: &str = r#"You are the DeepCure health companion, a warm and knowledgeable assistant for everyday health and wellness questions.

Guidelines:
- Answer in clear, plain language a layperson can act on
- Keep answers focused and reasonably short; offer to go deeper rather than lecturing
- When a symptom could be serious, say so plainly and recommend seeing a clinician promptly
- Stay within general wellness guidance; you do not diagnose conditions"#;

const MEDICATION_PERSONA: &str = r#"You are the DeepCure medication assistant. You help users understand their medications: what they are for, common side effects, typical timing, and why adherence matters.

Guidelines:
- Explain in plain language, naming both brand and generic names where helpful
- Flag well-known interactions and foods or substances to avoid
- Never suggest starting, stopping, or changing a dose; that is the prescriber's call
- Encourage the user to bring questions to their pharmacist or prescriber"#;

const NUTRITION_PERSONA: &str = r#"You are the DeepCure nutrition assistant. You help users eat well: balanced meals, reading labels, hydration, and food choices for common goals.

Guidelines:
- Give practical, affordable suggestions rather than idealized meal plans
- Be clear about portion sizes and everyday swaps
- Avoid fad framing; stick to mainstream dietary guidance
- For medical diets (renal, diabetic, celiac and similar) defer to the user's dietitian or doctor"#;

const MENTAL_HEALTH_PERSONA: &str = r#"You are the DeepCure mental well-being assistant. You listen first, respond with warmth, and offer grounded coping strategies for stress, low mood, sleep trouble, and anxiety.

Guidelines:
- Validate feelings before offering suggestions
- Offer small, concrete steps: breathing exercises, routines, journaling prompts
- You are not a therapist and say so when the topic needs one
- If the user mentions self-harm or feeling unsafe, encourage them to contact local emergency services or a crisis line right away"#;

const CHRONIC_CARE_PERSONA: &str = r#"You are the DeepCure chronic care assistant. You support users managing long-term conditions such as diabetes, hypertension, asthma, and arthritis.

Guidelines:
- Focus on day-to-day self-management: tracking, routines, warning signs to watch
- Help users prepare better questions for their care team
- Be encouraging about small, consistent improvements
- Never adjust treatment plans; changes belong to the user's clinicians"#;

/// Directive appended after the persona on every request.
const DISCLAIMER_DIRECTIVE: &str = "Always include a brief reminder that you are not a substitute for professional medical advice, diagnosis, or treatment, and encourage the user to consult a qualified healthcare provider for personal medical concerns. Never present yourself as a doctor and never offer a diagnosis.";

const GUIDANCE_TEMPERATURE: f32 = 0.7;
const GUIDANCE_MAX_TOKENS: u32 = 1000;

/// Persona text for a category tag. Unrecognized tags get the general
/// persona so a stale frontend can never break the assistant.
pub fn persona_for(category: &str) -> &'static str {
    match AssistantCategory::from_tag(category) {
        Some(AssistantCategory::Medication) => MEDICATION_PERSONA,
        Some(AssistantCategory::Nutrition) => NUTRITION_PERSONA,
        Some(AssistantCategory::MentalHealth) => MENTAL_HEALTH_PERSONA,
        Some(AssistantCategory::ChronicCare) => CHRONIC_CARE_PERSONA,
        Some(AssistantCategory::General) | None => GENERAL_PERSONA,
    }
}

/// Builds the fixed three-message request: persona, disclaimer directive,
/// then the user's trimmed question.
pub fn assemble_messages(query: &str, category: &str) -> Vec<ChatMessage> {
    vec![
        LlmClient::system_message(persona_for(category)),
        LlmClient::system_message(DISCLAIMER_DIRECTIVE),
        LlmClient::user_message(query.trim()),
    ]
}

/// Removes markdown emphasis markers the model tends to sprinkle in; the
/// chat view renders plain text. Applying it twice changes nothing.
pub fn strip_markdown_emphasis(text: &str) -> String {
    let emphasis = Regex::new(r"\*{1,2}").unwrap();
    emphasis.replace_all(text, "").to_string()
}

// ============================================================================
// Dispatch
// ============================================================================

/// Ask the assistant one question. A single request with fixed sampling
/// parameters; no retries. The caller decides how failures reach the user.
pub async fn get_guidance(
    client: &LlmClient,
    query: &str,
    category: &str,
) -> Result<String, CompletionError> {
    debug!(category = category, "dispatching guidance request");

    let messages = assemble_messages(query, category);
    let response = client
        .chat_completion(
            messages,
            Some(GUIDANCE_TEMPERATURE),
            Some(GUIDANCE_MAX_TOKENS),
        )
        .await?;

    Ok(strip_markdown_emphasis(&response).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[test]
    fn last_message_is_the_trimmed_user_query() {
        let messages = assemble_messages("  why am I always tired?  ", "general");
        assert_eq!(messages.len(), 3);
        let last = messages.last().unwrap();
        assert_eq!(last.role, "user");
        assert_eq!(last.content, "why am I always tired?");
    }

    #[test]
    fn persona_and_disclaimer_precede_the_query() {
        let messages = assemble_messages("what makes a balanced meal?", "nutrition");
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, persona_for("nutrition"));
        assert_eq!(messages[1].role, "system");
        assert_eq!(messages[1].content, DISCLAIMER_DIRECTIVE);
    }

    #[test]
    fn unknown_category_falls_back_to_the_general_persona() {
        assert_eq!(persona_for("astrology"), persona_for("general"));
        assert_eq!(persona_for(""), persona_for("general"));
        assert_eq!(persona_for("  General "), persona_for("general"));
    }

    #[test]
    fn known_categories_have_distinct_personas() {
        let personas: Vec<&str> = AssistantCategory::ALL
            .iter()
            .map(|c| persona_for(c.tag()))
            .collect();
        for (i, a) in personas.iter().enumerate() {
            for b in personas.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn stripping_removes_emphasis_markers() {
        assert_eq!(
            strip_markdown_emphasis("**Bold** and *italic* text"),
            "Bold and italic text"
        );
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_markdown_emphasis("**Stay** *hydrated* today");
        let twice = strip_markdown_emphasis(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "Stay hydrated today");
    }

    #[tokio::test]
    async fn success_returns_cleaned_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("DeepCure health companion".to_string()),
                Matcher::Regex("persistent headaches".to_string()),
                Matcher::Regex("\"temperature\":0.7".to_string()),
                Matcher::Regex("\"max_tokens\":1000".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"**Test** response"}}]}"#,
            )
            .create_async()
            .await;

        let client = LlmClient::new(&server.url(), "test-key", "test-model");
        let answer = get_guidance(&client, "What could cause persistent headaches?", "general")
            .await
            .unwrap();

        assert_eq!(answer, "Test response");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn provider_error_body_surfaces_its_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"rate limited"}}"#)
            .create_async()
            .await;

        let client = LlmClient::new(&server.url(), "test-key", "test-model");
        let err = get_guidance(&client, "hello", "general").await.unwrap_err();

        match err {
            CompletionError::Provider(message) => assert_eq!(message, "rate limited"),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // discard port, nothing listens here
        let client = LlmClient::new("http://127.0.0.1:9", "test-key", "test-model");
        let err = get_guidance(&client, "hello", "general").await.unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }
}
