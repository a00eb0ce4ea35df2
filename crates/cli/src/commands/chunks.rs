//! Chunks command handler.
//!
//! Shows how a document is split, and optionally how each chunk scores
//! against a question.

use crate::document::read_document;
use clap::Args;
use docquest_core::{config::AppConfig, AppError, AppResult};
use docquest_engine::{
    chunk_document, config::load_config, normalize_text, rank::rank_chunks, TfIdfVectorizer,
};
use std::path::PathBuf;

/// Show the chunks of a document
#[derive(Args, Debug)]
pub struct ChunksCommand {
    /// Document to read (UTF-8 text, `-` for stdin)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Score every chunk against this question
    #[arg(short, long)]
    pub question: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ChunksCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chunks command");

        let answer_config = load_config(&config.workspace)?;
        let text = normalize_text(&read_document(&self.file)?);
        let chunks = chunk_document(&text, &answer_config);

        let scores: Option<Vec<f64>> = match self.question.as_deref().map(str::trim) {
            Some("") => return Err(AppError::EmptyQuestion),
            Some(question) => {
                let vectorizer = TfIdfVectorizer::from_config(&answer_config);
                match rank_chunks(&vectorizer, &chunks, question, chunks.len()) {
                    Ok(ranking) => Some(ranking.scores),
                    Err(e) => {
                        tracing::warn!("Could not score chunks: {}", e);
                        None
                    }
                }
            }
            None => None,
        };

        if self.json {
            let output: Vec<serde_json::Value> = chunks
                .iter()
                .map(|chunk| {
                    serde_json::json!({
                        "index": chunk.index,
                        "wordRange": [chunk.word_range.0, chunk.word_range.1],
                        "text": chunk.text,
                        "score": scores.as_ref().map(|s| s[chunk.index]),
                    })
                })
                .collect();

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
            return Ok(());
        }

        for chunk in &chunks {
            match scores.as_ref() {
                Some(scores) => println!(
                    "[{}] words {}..{} score {:.4}",
                    chunk.index, chunk.word_range.0, chunk.word_range.1, scores[chunk.index]
                ),
                None => println!(
                    "[{}] words {}..{}",
                    chunk.index, chunk.word_range.0, chunk.word_range.1
                ),
            }
            println!("{}\n", chunk.text);
        }

        Ok(())
    }
}
