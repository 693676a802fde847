mod error;
mod llm;
pub mod loader;
pub mod parser;
mod processor;
pub mod tracing;
pub mod types;
pub mod validate;

pub use error::Error;
pub use llm::hf;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use loader::{DocMetadata, Document, DocumentLoader};
pub use processor::{builder::SummaryProcessorBuilder, SummaryProcessor};
