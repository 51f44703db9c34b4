//! The query orchestrator: retrieval, history, generation, history update.

use std::sync::Arc;

use context_store::{ContextStore, DEFAULT_CONTEXT_WINDOW};
use doc_store::DocumentSearch;
use support_chain::SupportChain;
use thiserror::Error;
use tracing::info;

/// Generic per-query failure surfaced to the HTTP layer as a 500. The
/// underlying search/generation message is carried along for the caller.
#[derive(Debug, Error)]
#[error("failed to process query: {0}")]
pub struct QueryError(String);

impl From<doc_store::DocStoreError> for QueryError {
    fn from(err: doc_store::DocStoreError) -> Self {
        QueryError(err.to_string())
    }
}

impl From<support_chain::ChainError> for QueryError {
    fn from(err: support_chain::ChainError) -> Self {
        QueryError(err.to_string())
    }
}

/// Outcome of one query: the (possibly minted) session id and the answer.
#[derive(Debug)]
pub struct QueryOutcome {
    pub session_id: String,
    pub response: String,
}

/// Stateless request orchestrator; all conversational state lives in the
/// context store.
pub struct SupportSystem {
    search: Arc<dyn DocumentSearch>,
    chain: SupportChain,
    sessions: Arc<ContextStore>,
}

impl SupportSystem {
    pub fn new(
        search: Arc<dyn DocumentSearch>,
        chain: SupportChain,
        sessions: Arc<ContextStore>,
    ) -> Self {
        Self {
            search,
            chain,
            sessions,
        }
    }

    /// Runs one query end to end.
    ///
    /// A missing session id gets a fresh opaque one. History is appended
    /// only after generation succeeds; any failure in retrieval or
    /// generation aborts the query with no state change.
    ///
    /// # Errors
    /// Returns [`QueryError`] wrapping the first failure from search or
    /// generation.
    pub async fn process_query(
        &self,
        session_id: Option<String>,
        query: &str,
        context_size: u64,
    ) -> Result<QueryOutcome, QueryError> {
        let session_id = session_id.unwrap_or_else(services::uuid::new_session_id);
        info!(session = %session_id, "processing query");

        let docs = self.search.search(query, context_size).await?;
        info!(found = docs.len(), "retrieved context documents");

        let history = self
            .sessions
            .get_context(&session_id, DEFAULT_CONTEXT_WINDOW)
            .await;

        let response = self.chain.generate_response(&docs, &history, query).await?;

        self.sessions.add_message(&session_id, "user", query).await;
        self.sessions
            .add_message(&session_id, "assistant", response.as_str())
            .await;

        info!(session = %session_id, "query processed");
        Ok(QueryOutcome {
            session_id,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    use doc_store::{DocStoreError, SupportDoc};
    use support_chain::{ChainError, TextGenerator};

    /// Always returns the first `limit` documents of a fixed corpus.
    struct FixedCorpus(Vec<SupportDoc>);

    impl DocumentSearch for FixedCorpus {
        fn search<'a>(
            &'a self,
            _query: &'a str,
            limit: u64,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<SupportDoc>, DocStoreError>> + Send + 'a>>
        {
            let docs: Vec<SupportDoc> = self.0.iter().take(limit as usize).cloned().collect();
            Box::pin(async move { Ok(docs) })
        }
    }

    /// Returns a canned reply and records every prompt it saw.
    struct ScriptedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            })
        }
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
            Box::pin(async { Err(ChainError::Generation("model endpoint is down".into())) })
        }
    }

    fn corpus() -> Vec<SupportDoc> {
        ["card declines", "bank transfers", "e-wallet delays"]
            .iter()
            .enumerate()
            .map(|(i, content)| SupportDoc {
                title: format!("doc {i}"),
                content: (*content).to_string(),
                category: "payments".into(),
                help_url: "https://help.deriv.com/payments/support".into(),
            })
            .collect()
    }

    fn system(generator: Arc<dyn TextGenerator>) -> (SupportSystem, Arc<ContextStore>) {
        let sessions = Arc::new(ContextStore::new());
        let system = SupportSystem::new(
            Arc::new(FixedCorpus(corpus())),
            SupportChain::new(generator),
            sessions.clone(),
        );
        (system, sessions)
    }

    #[tokio::test]
    async fn mints_a_session_id_and_answers() {
        let generator = ScriptedGenerator::new("Please check your card details.");
        let (system, _) = system(generator);

        let outcome = system
            .process_query(None, "Why was my card payment declined?", 5)
            .await
            .unwrap();

        assert!(!outcome.session_id.is_empty());
        assert_eq!(outcome.response, "Please check your card details.");
    }

    #[tokio::test]
    async fn follow_up_sees_prior_turns_in_the_history_slot() {
        let generator = ScriptedGenerator::new("Please check your card details.");
        let (system, _) = system(generator.clone());

        let first = system
            .process_query(None, "Why was my card payment declined?", 5)
            .await
            .unwrap();
        system
            .process_query(Some(first.session_id.clone()), "It says insufficient funds", 5)
            .await
            .unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        // The second prompt carries the first turn as rendered history.
        assert!(prompts[1].contains("user: Why was my card payment declined?"));
        assert!(prompts[1].contains("assistant: Please check your card details."));
        // The first prompt had no history yet.
        assert!(!prompts[0].contains("user: Why was my card payment declined?\nassistant:"));
    }

    #[tokio::test]
    async fn failed_generation_leaves_history_untouched() {
        let (system, sessions) = system(Arc::new(FailingGenerator));

        let err = system
            .process_query(Some("s1".into()), "Why was my card payment declined?", 5)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to process query"));
        assert!(err.to_string().contains("model endpoint is down"));
        assert!(sessions.get_context("s1", DEFAULT_CONTEXT_WINDOW).await.is_empty());
    }

    #[tokio::test]
    async fn history_records_user_then_assistant() {
        let generator = ScriptedGenerator::new("answer");
        let (system, sessions) = system(generator);

        system
            .process_query(Some("s1".into()), "question", 5)
            .await
            .unwrap();

        let history = sessions.get_context("s1", DEFAULT_CONTEXT_WINDOW).await;
        assert_eq!(history.len(), 2);
        assert_eq!((history[0].role.as_str(), history[0].content.as_str()), ("user", "question"));
        assert_eq!((history[1].role.as_str(), history[1].content.as_str()), ("assistant", "answer"));
    }

    #[tokio::test]
    async fn context_size_bounds_retrieval() {
        let generator = ScriptedGenerator::new("answer");
        let (system, _) = system(generator.clone());

        system.process_query(None, "anything", 2).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Document 2: bank transfers"));
        assert!(!prompts[0].contains("Document 3:"));
    }
}
