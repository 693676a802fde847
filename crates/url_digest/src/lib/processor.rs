pub mod builder;

use crate::{
    error::Error,
    loader::{Document, DocumentLoader},
    validate::validate_inputs,
    Summarizer,
};

// The core URL summarization pipeline: validate, route, load, summarize.
#[derive(Debug)]
pub struct SummaryProcessor<V, W, S>
where
    V: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    video_loader: V,
    web_loader: W,
    summarizer: S,
}

impl<V, W, S> SummaryProcessor<V, W, S>
where
    V: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// URLs containing this substring anywhere are routed to the video
    /// loader, matching the original form's routing check.
    const YOUTUBE_URL_MARKER: &str = "youtube.com";

    const STUFF_PROMPT: &str = include_str!("./processor/prompts/summarize_0.txt");

    /// Combines every document into the single-prompt "stuff" template.
    fn render_prompt(documents: &[Document]) -> String {
        let stuffed = documents
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        Self::STUFF_PROMPT.replace("{text}", &stuffed)
    }

    /// Runs one summarization request start to finish and returns the
    /// generated summary verbatim.
    ///
    /// Validation failures surface as [`Error::Validation`]; any retrieval or
    /// summarization failure is folded into one generic error carrying the
    /// original failure text.
    #[tracing::instrument(skip(self, api_token))]
    pub async fn run(&self, api_token: &str, url: &str) -> Result<String, Error> {
        let url = validate_inputs(api_token, url)?;

        let documents = if url.as_str().contains(Self::YOUTUBE_URL_MARKER) {
            tracing::info!(%url, "Loading video content");
            self.video_loader
                .load(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load video content: {e:?}"))?
        } else {
            tracing::info!(%url, "Loading page content");
            self.web_loader
                .load(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load page content: {e:?}"))?
        };
        tracing::info!(count = documents.len(), "Loaded documents");

        let prompt = Self::render_prompt(&documents);
        if prompt.len() / 4 > S::CONTEXT_WINDOW_LIMIT {
            tracing::warn!(
                chars = prompt.len(),
                limit = S::CONTEXT_WINDOW_LIMIT,
                "Prompt may exceed the model context window"
            );
        }

        let response = self
            .summarizer
            .summarize(&prompt)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to summarize content: {e:?}"))?;

        Ok(response.summary)
    }
}
