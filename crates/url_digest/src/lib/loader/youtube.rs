use url::Url;

use crate::{
    error::Error,
    loader::{Document, DocumentLoader},
    parser::{self, YtWatchPage},
    types::{CaptionTrack, PlayerResponse},
};

/// Retrieves a YouTube video's caption transcript, optionally together with
/// the video metadata from the player response.
pub struct YoutubeLoader {
    client: reqwest::Client,
    add_video_info: bool,
}

impl YoutubeLoader {
    const WATCH_URL: &str = "https://www.youtube.com/watch";

    pub fn new() -> Self {
        YoutubeLoader {
            client: reqwest::Client::new(),
            add_video_info: false,
        }
    }

    /// Also capture title, author and duration on the returned document.
    pub fn with_video_info(mut self) -> Self {
        self.add_video_info = true;
        self
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<YtWatchPage, Error> {
        let html = self
            .client
            .get(format!("{}?v={}", Self::WATCH_URL, video_id))
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html.into())
    }

    async fn fetch_transcript(&self, track: &CaptionTrack) -> Result<String, Error> {
        let xml = self
            .client
            .get(&track.base_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parser::parse_timedtext(&xml))
    }
}

impl Default for YoutubeLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the video id out of the usual YouTube URL shapes: `watch?v=`,
/// `youtu.be/`, `/embed/`, `/shorts/` and `/live/`.
pub fn extract_video_id(url: &Url) -> Result<String, Error> {
    let host = url.host_str().ok_or(Error::Parse("URL has no host"))?;

    if host.contains("youtube.com") {
        if let Some(id) = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.to_string())
        {
            return Ok(id);
        }

        let mut segments = url.path_segments().into_iter().flatten();
        if let (Some(kind), Some(id)) = (segments.next(), segments.next()) {
            if matches!(kind, "embed" | "shorts" | "live") && !id.is_empty() {
                return Ok(id.to_string());
            }
        }
    } else if host.contains("youtu.be") {
        if let Some(id) = url.path().strip_prefix('/') {
            if !id.is_empty() {
                return Ok(id.to_string());
            }
        }
    }

    Err(Error::Parse("Could not extract a video id from the URL"))
}

/// Manually-authored English tracks win over auto-generated (`asr`) ones.
fn select_caption_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.kind.as_deref() != Some("asr") && t.language_code.starts_with("en"))
        .or_else(|| tracks.iter().find(|t| t.kind.as_deref() != Some("asr")))
        .or_else(|| tracks.first())
}

impl DocumentLoader for YoutubeLoader {
    type Error = Error;

    async fn load(&self, url: &Url) -> Result<Vec<Document>, Self::Error> {
        let video_id = extract_video_id(url)?;
        tracing::debug!(%video_id, "Resolved video id");

        let page = self.fetch_watch_page(&video_id).await?;
        let player = page.player_response::<PlayerResponse>()?;

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer.caption_tracks)
            .unwrap_or_default();
        let track = select_caption_track(&tracks)
            .ok_or(Error::Parse("No caption tracks available for this video"))?;

        let transcript = self.fetch_transcript(track).await?;
        if transcript.is_empty() {
            tracing::warn!(%video_id, "Caption track produced no text");
            return Ok(Vec::new());
        }

        let mut document = Document::new(transcript, url.as_str());
        if self.add_video_info {
            if let Some(details) = player.video_details {
                tracing::info!(title = %details.title, author = %details.author, "Fetched video info");
                document.metadata.title = Some(details.title);
                document.metadata.author = Some(details.author);
                document.metadata.length_seconds =
                    details.length_seconds.and_then(|s| s.parse().ok());
            }
        }

        Ok(vec![document])
    }
}
