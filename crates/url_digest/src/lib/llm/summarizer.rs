use std::{fmt::Debug, future::Future};

use serde::Deserialize;

pub trait Summarizer {
    /// Approximate input budget in tokens for a single stuffed prompt.
    const CONTEXT_WINDOW_LIMIT: usize = 32_000;
    const SUMMARIZER_MODEL: &str;

    type Error: Debug;

    fn summarize(&self, content: &str)
        -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
