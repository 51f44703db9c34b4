//! Seeds the payment-support corpus into Qdrant.
//!
//! Waits for the vector database to come up, embeds the documents from
//! `data/payment_docs.jsonl` through the configured embedding endpoint, and
//! upserts one point per document. Safe to re-run: points are keyed by a
//! stable id derived from the document title, so a re-seed updates the
//! corpus in place.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use doc_store::embed::ollama::OllamaEmbedder;
use doc_store::{DocStore, DocStoreConfig, read_docs_jsonl};
use llm_service::LlmService;
use llm_service::config::default_config;
use tracing_subscriber::EnvFilter;

const QDRANT_WAIT_SECS: u64 = 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let corpus_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/payment_docs.jsonl".to_string());

    println!("{}", "Starting data population process...".cyan());

    let generation = default_config::config_ollama_generation()?;
    let embedding = default_config::config_ollama_embedding()?;
    let llm = Arc::new(LlmService::new(generation, embedding)?);

    let cfg = DocStoreConfig::from_env();
    let embedder = Arc::new(OllamaEmbedder::new(llm, cfg.embedding_dim));

    println!("{}", "Waiting for Qdrant to be ready...".cyan());
    let store = wait_for_qdrant(cfg, embedder).await?;
    println!("{}", "Qdrant is ready!".green());

    println!("{}", format!("Reading corpus from {corpus_path}...").cyan());
    let docs = read_docs_jsonl(&corpus_path)?;

    println!("{}", "Embedding and upserting documents...".cyan());
    let count = store.add_documents(&docs).await?;

    println!(
        "{}",
        format!("Successfully populated the vector database with {count} documents").green()
    );
    println!("\nTest the system with:");
    println!("curl -X POST http://localhost:8000/query \\");
    println!("  -H \"Content-Type: application/json\" \\");
    println!("  -d '{{\"query\": \"Why was my card payment declined?\"}}'");

    Ok(())
}

/// Retries connection and collection bootstrap until Qdrant answers or the
/// wait budget runs out.
async fn wait_for_qdrant(
    cfg: DocStoreConfig,
    embedder: Arc<OllamaEmbedder>,
) -> anyhow::Result<DocStore> {
    let deadline = Instant::now() + Duration::from_secs(QDRANT_WAIT_SECS);
    loop {
        match DocStore::connect(cfg.clone(), embedder.clone()).await {
            Ok(store) => return Ok(store),
            Err(err) => {
                if Instant::now() >= deadline {
                    eprintln!(
                        "{}",
                        format!("Qdrant did not become ready within {QDRANT_WAIT_SECS}s: {err}")
                            .red()
                    );
                    return Err(err.into());
                }
                print!(".");
                std::io::stdout().flush().ok();
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
