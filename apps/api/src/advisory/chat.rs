//! Advisor chat — single-turn and history-aware question answering.
//!
//! The server keeps no session state. Callers send the prior turns with every question
//! and get the extended history back.

use serde::{Deserialize, Serialize};

use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::llm_client::{ChatMessage, LlmError, TextGenerator};

/// One completed exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

/// System instruction, every prior turn in order, then the new question.
pub fn build_chat_messages(history: &[ChatTurn], question: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);
    messages.push(ChatMessage::system(ADVISOR_SYSTEM));
    for turn in history {
        messages.push(ChatMessage::user(turn.question.as_str()));
        messages.push(ChatMessage::assistant(turn.answer.as_str()));
    }
    messages.push(ChatMessage::user(question));
    messages
}

/// Answers `question` in the context of `history` and returns the history with the
/// new exchange appended. The input history is not modified.
pub async fn ask(
    llm: &dyn TextGenerator,
    history: &[ChatTurn],
    question: &str,
) -> Result<Vec<ChatTurn>, LlmError> {
    let answer = llm.complete(&build_chat_messages(history, question)).await?;

    let mut updated = history.to_vec();
    updated.push(ChatTurn {
        question: question.to_string(),
        answer,
    });
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::scripted::ScriptedGenerator;
    use crate::llm_client::Role;

    #[test]
    fn test_single_turn_messages() {
        let messages = build_chat_messages(&[], "Is ₹50 lakh term cover enough?");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], ChatMessage::system(ADVISOR_SYSTEM));
        assert_eq!(messages[1], ChatMessage::user("Is ₹50 lakh term cover enough?"));
    }

    #[tokio::test]
    async fn test_third_prompt_carries_both_prior_exchanges_in_order() {
        let llm = ScriptedGenerator::new([
            "You should hold about 10x your income.",
            "Yes, a family floater is usually cheaper.",
            "Consider a super top-up.",
        ]);

        let history = ask(&llm, &[], "How much life cover do I need?").await.unwrap();
        let history = ask(&llm, &history, "Should I buy a family floater?")
            .await
            .unwrap();
        let history = ask(&llm, &history, "What about my parents?").await.unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history[2].answer, "Consider a super top-up.");

        let calls = llm.calls();
        let third = &calls[2];
        let expected = vec![
            ChatMessage::system(ADVISOR_SYSTEM),
            ChatMessage::user("How much life cover do I need?"),
            ChatMessage::assistant("You should hold about 10x your income."),
            ChatMessage::user("Should I buy a family floater?"),
            ChatMessage::assistant("Yes, a family floater is usually cheaper."),
            ChatMessage::user("What about my parents?"),
        ];
        assert_eq!(third, &expected);
    }

    #[tokio::test]
    async fn test_failed_call_leaves_history_untouched() {
        let llm = ScriptedGenerator::default().then_fail(LlmError::MissingCredential);
        let history = vec![ChatTurn {
            question: "Hi".to_string(),
            answer: "Hello!".to_string(),
        }];

        let result = ask(&llm, &history, "Next question").await;
        assert!(result.is_err());
        assert_eq!(history.len(), 1);
        assert_eq!(llm.calls()[0].last().unwrap().role, Role::User);
    }
}
