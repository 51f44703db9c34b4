//! Response generation chain.
//!
//! One fixed prompt template with three named slots — retrieved context,
//! conversation history, and the current question — filled and handed to a
//! text generator. The model's output is returned verbatim; nothing here
//! post-processes or validates the answer.

mod error;
mod llm;
pub mod prompt;

pub use error::ChainError;
pub use llm::TextGenerator;

use std::sync::Arc;

use context_store::Message;
use doc_store::SupportDoc;
use tracing::{debug, info};

/// The generation chain. Holds the generator seam; the template itself is
/// fixed at compile time.
pub struct SupportChain {
    generator: Arc<dyn TextGenerator>,
}

impl SupportChain {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Fills the prompt template and returns the model's raw text.
    ///
    /// # Errors
    /// Returns [`ChainError::Generation`] wrapping the endpoint's failure
    /// text; the call is not retried.
    pub async fn generate_response(
        &self,
        context_docs: &[SupportDoc],
        history: &[Message],
        question: &str,
    ) -> Result<String, ChainError> {
        debug!(
            docs = context_docs.len(),
            history = history.len(),
            "building prompt"
        );

        let prompt = prompt::build_prompt(context_docs, history, question);
        let answer = self.generator.generate(&prompt).await?;

        info!("generated response ({} chars)", answer.len());
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    /// Returns a canned reply and records every prompt it saw.
    struct ScriptedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl TextGenerator for ScriptedGenerator {
        fn generate<'a>(
            &'a self,
            prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, ChainError>> + Send + 'a>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Box::pin(async move { Ok(self.reply.clone()) })
        }
    }

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        fn generate<'a>(
            &'a self,
            _prompt: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<String, ChainError>> + Send + 'a>> {
            Box::pin(async { Err(ChainError::Generation("connection refused".into())) })
        }
    }

    #[tokio::test]
    async fn returns_the_model_output_verbatim() {
        let generator = Arc::new(ScriptedGenerator {
            reply: "Check your balance. See https://help.deriv.com/payments/card-payments".into(),
            prompts: Mutex::new(Vec::new()),
        });
        let chain = SupportChain::new(generator.clone());

        let answer = chain
            .generate_response(&[], &[], "Why was my card payment declined?")
            .await
            .unwrap();

        assert_eq!(
            answer,
            "Check your balance. See https://help.deriv.com/payments/card-payments"
        );
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("User Question: Why was my card payment declined?"));
    }

    #[tokio::test]
    async fn generation_failure_carries_the_underlying_text() {
        let chain = SupportChain::new(Arc::new(FailingGenerator));

        let err = chain
            .generate_response(&[], &[], "anything")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to generate response"));
        assert!(err.to_string().contains("connection refused"));
    }
}
