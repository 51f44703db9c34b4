//! JSONL reader for the seed corpus.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::DocStoreError;
use crate::record::SupportDoc;

/// Reads support documents from a JSONL file, one JSON object per line.
///
/// Empty lines are skipped; a malformed line fails the read with its line
/// number so a broken corpus is caught before anything is upserted.
///
/// # Errors
/// - [`DocStoreError::Io`] if the file cannot be read.
/// - [`DocStoreError::Parse`] if any line fails deserialization.
pub fn read_docs_jsonl(path: impl AsRef<Path>) -> Result<Vec<SupportDoc>, DocStoreError> {
    info!("reading seed corpus: {:?}", path.as_ref());

    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let doc: SupportDoc = serde_json::from_str(&line)
            .map_err(|e| DocStoreError::Parse(format!("line {}: {}", i + 1, e)))?;
        out.push(doc);
    }

    debug!("loaded {} documents", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_documents_and_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"title":"Card Payment Declined","content":"Check card details.","category":"card_payments","help_url":"https://help.deriv.com/payments/card-payments"}}"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(
            file,
            r#"{{"title":"Bank Transfer Issues","content":"Verify IBAN.","category":"bank_transfers","help_url":"https://help.deriv.com/payments/bank-transfers"}}"#
        )
        .unwrap();

        let docs = read_docs_jsonl(file.path()).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title, "Card Payment Declined");
        assert_eq!(docs[1].category, "bank_transfers");
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"title":"ok","content":"x"}}"#).unwrap();
        writeln!(file, "not json").unwrap();

        let err = read_docs_jsonl(file.path()).unwrap_err();
        assert!(matches!(err, DocStoreError::Parse(ref msg) if msg.contains("line 2")));
    }
}
