//! Ask command handler.
//!
//! Answers a question from a single document.

use crate::document::read_document;
use clap::Args;
use docquest_core::{config::AppConfig, AppError, AppResult};
use docquest_engine::{
    answer, config::load_config, init_language, AnswerConfig, LowConfidencePolicy,
    StopWordSource,
};
use std::path::PathBuf;

/// Answer a question from a document
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Document to read (UTF-8 text, `-` for stdin)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Words per chunk
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Words shared by consecutive chunks
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Number of top chunks used to build the answer
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Similarity threshold (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Answer "not found" instead of best-effort content when nothing matches
    #[arg(long)]
    pub not_found: bool,

    /// Stop-word list to use instead of the builtin English one
    #[arg(long)]
    pub stop_words: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");
        tracing::debug!("Ask command options: {:?}", self);

        if let Some(ref path) = self.stop_words {
            if !init_language(StopWordSource::File(path.clone())) {
                tracing::warn!("Stop words unavailable, keyword extraction is unfiltered");
            }
        }

        let answer_config = self.answer_config(load_config(&config.workspace)?);
        let text = read_document(&self.file)?;

        let result = answer(&text, &self.question, &answer_config)?;

        if self.json {
            let output = serde_json::json!({
                "answer": result.answer,
                "strategy": result.strategy,
                "confident": result.strategy.is_confident(),
                "topChunks": result.top_chunk_indices,
                "topScore": result.top_score,
            });

            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            println!("{}", json);
        } else {
            println!("{}", result.answer);

            tracing::debug!(
                "Strategy: {}, chunks: {:?}, score: {:?}",
                result.strategy,
                result.top_chunk_indices,
                result.top_score
            );
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the workspace configuration.
    fn answer_config(&self, mut config: AnswerConfig) -> AnswerConfig {
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(overlap) = self.overlap {
            config.overlap = overlap;
        }
        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }
        if let Some(threshold) = self.threshold {
            config.similarity_threshold = threshold;
        }
        if self.not_found {
            config.low_confidence = LowConfidencePolicy::NotFound;
        }
        config
    }
}
