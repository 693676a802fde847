use crate::{DocumentLoader, Summarizer, SummaryProcessor};

pub struct SummaryProcessorBuilder<V = (), W = (), S = ()> {
    video_loader: V,
    web_loader: W,
    summarizer: S,
}

impl SummaryProcessorBuilder {
    pub fn new() -> Self {
        Self {
            video_loader: (),
            web_loader: (),
            summarizer: (),
        }
    }
}

impl<V, W, S> SummaryProcessorBuilder<V, W, S> {
    pub fn video_loader<V2: DocumentLoader + Send + Sync + 'static>(
        self,
        video_loader: V2,
    ) -> SummaryProcessorBuilder<V2, W, S> {
        SummaryProcessorBuilder {
            video_loader,
            web_loader: self.web_loader,
            summarizer: self.summarizer,
        }
    }

    pub fn web_loader<W2: DocumentLoader + Send + Sync + 'static>(
        self,
        web_loader: W2,
    ) -> SummaryProcessorBuilder<V, W2, S> {
        SummaryProcessorBuilder {
            video_loader: self.video_loader,
            web_loader,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryProcessorBuilder<V, W, S2> {
        SummaryProcessorBuilder {
            video_loader: self.video_loader,
            web_loader: self.web_loader,
            summarizer,
        }
    }
}

impl<V, W, S> SummaryProcessorBuilder<V, W, S>
where
    V: DocumentLoader + Send + Sync + 'static,
    W: DocumentLoader + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryProcessor<V, W, S> {
        SummaryProcessor {
            video_loader: self.video_loader,
            web_loader: self.web_loader,
            summarizer: self.summarizer,
        }
    }
}
