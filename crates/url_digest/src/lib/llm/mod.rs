pub mod hf;
pub mod summarizer;
