//! Prompt assembly: one fixed template with three named slots.

use context_store::Message;
use doc_store::SupportDoc;

/// The single prompt template. `{context}`, `{conversation_history}` and
/// `{question}` are substituted verbatim.
pub const PROMPT_TEMPLATE: &str = "\
You are a helpful payment support assistant. Use the following context and conversation history to answer the user's question. Always include relevant help center links from the context in your response.

Context:
{context}

Conversation History:
{conversation_history}

User Question: {question}

Important: Make sure to include the relevant help.deriv.com/payments URL from the context in your response.

Assistant Response:";

/// Renders retrieved documents as numbered `Document {i}: {content}` lines,
/// 1-based, in retrieval (descending similarity) order.
pub fn render_context(docs: &[SupportDoc]) -> String {
    docs.iter()
        .enumerate()
        .map(|(i, doc)| format!("Document {}: {}", i + 1, doc.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders history as `{role}: {content}` lines in chronological order.
/// The role tag is whatever the store recorded, verbatim.
pub fn render_history(history: &[Message]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes all three slots into [`PROMPT_TEMPLATE`].
pub fn build_prompt(docs: &[SupportDoc], history: &[Message], question: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{context}", &render_context(docs))
        .replace("{conversation_history}", &render_history(history))
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> SupportDoc {
        SupportDoc {
            title: "t".into(),
            content: content.into(),
            category: "card_payments".into(),
            help_url: "https://help.deriv.com/payments/card-payments".into(),
        }
    }

    #[test]
    fn template_contains_all_three_slots() {
        assert!(PROMPT_TEMPLATE.contains("{context}"));
        assert!(PROMPT_TEMPLATE.contains("{conversation_history}"));
        assert!(PROMPT_TEMPLATE.contains("{question}"));
        assert!(PROMPT_TEMPLATE.contains("help.deriv.com/payments"));
    }

    #[test]
    fn context_documents_are_numbered_from_one() {
        let rendered = render_context(&[doc("first doc"), doc("second doc")]);
        assert_eq!(rendered, "Document 1: first doc\nDocument 2: second doc");
    }

    #[test]
    fn history_lines_keep_role_and_order() {
        let history = vec![
            Message::new("user", "Why did my payment fail?"),
            Message::new("assistant", "Can you provide more details?"),
        ];
        let rendered = render_history(&history);
        assert_eq!(
            rendered,
            "user: Why did my payment fail?\nassistant: Can you provide more details?"
        );
    }

    #[test]
    fn build_prompt_substitutes_everything() {
        let docs = vec![doc("Common reasons for card payment failures")];
        let history = vec![Message::new("user", "hello")];

        let prompt = build_prompt(&docs, &history, "Why was my card payment declined?");

        assert!(prompt.contains("Document 1: Common reasons for card payment failures"));
        assert!(prompt.contains("user: hello"));
        assert!(prompt.contains("User Question: Why was my card payment declined?"));
        assert!(!prompt.contains("{context}"));
        assert!(!prompt.contains("{conversation_history}"));
        assert!(!prompt.contains("{question}"));
    }

    #[test]
    fn empty_inputs_render_to_empty_sections() {
        let prompt = build_prompt(&[], &[], "test question");
        assert!(prompt.contains("Context:\n\n"));
        assert!(prompt.contains("Conversation History:\n\n"));
        assert!(prompt.contains("User Question: test question"));
    }
}
