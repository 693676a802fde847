pub mod web;
pub mod youtube;

use std::{fmt::Debug, future::Future};

use url::Url;

/// A retrieval strategy that turns a URL into an ordered sequence of text
/// documents. Zero documents is a legal outcome and flows downstream as-is.
pub trait DocumentLoader {
    type Error: Debug;

    fn load(&self, url: &Url) -> impl Future<Output = Result<Vec<Document>, Self::Error>>;
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub text: String,
    pub metadata: DocMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct DocMetadata {
    pub source: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub length_seconds: Option<u64>,
}

impl Document {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            metadata: DocMetadata {
                source: source.into(),
                ..Default::default()
            },
        }
    }
}
