use std::sync::{Arc, Mutex};

use url::Url;
use url_digest::{Document, DocumentLoader};

#[derive(Clone, Default)]
pub struct MockLoader {
    pub docs: Vec<Document>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockLoader {
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self::new(vec![Document::new(text, "mock://source")])
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            docs: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl DocumentLoader for MockLoader {
    type Error = anyhow::Error;

    async fn load(&self, url: &Url) -> anyhow::Result<Vec<Document>> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.docs.clone())
    }
}
