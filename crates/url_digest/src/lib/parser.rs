//! # Content parsing
//!
//! This module reduces the raw payloads the loaders fetch into plain text:
//! the `ytInitialPlayerResponse` JSON embedded in YouTube watch pages, the
//! timedtext caption format, and generic HTML page bodies.

use std::{ops::Deref, sync::LazyLock};

use regex::{Captures, Regex};
use serde::de::DeserializeOwned;

use crate::error::Error;

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\})\s*;\s*(?:var\s|</script>)")
        .unwrap()
});

static TIMEDTEXT_CUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap());

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?si)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>|<noscript[^>]*>.*?</noscript>",
    )
    .unwrap()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static DEC_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&#([0-9]+);").unwrap());

static HEX_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").unwrap());

/// A raw YouTube watch page HTML document.
pub struct YtWatchPage(pub String);

impl Deref for YtWatchPage {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for YtWatchPage {
    fn from(html: String) -> Self {
        YtWatchPage(html)
    }
}

impl YtWatchPage {
    pub fn new(html: impl Into<String>) -> Self {
        YtWatchPage(html.into())
    }

    /// Extracts the `ytInitialPlayerResponse` script data and deserializes it.
    pub fn player_response<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let captures = YT_PLAYER_RESPONSE_RE.captures(&self.0).ok_or(Error::Parse(
            "Failed to locate ytInitialPlayerResponse, page structure might have changed",
        ))?;

        Ok(serde_json::from_str(&captures[1])?)
    }
}

/// Reduces a timedtext caption payload to a single plain-text transcript.
#[tracing::instrument(skip(xml))]
pub fn parse_timedtext(xml: &str) -> String {
    let cues = TIMEDTEXT_CUE_RE
        .captures_iter(xml)
        .map(|c| unescape_entities(c[1].trim()))
        .filter(|cue| !cue.is_empty())
        .collect::<Vec<_>>();

    cues.join(" ")
}

/// Reduces an HTML page body to plain text: script/style/noscript blocks
/// dropped, tags stripped, entities decoded, whitespace collapsed.
#[tracing::instrument(skip(html))]
pub fn html_to_text(html: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_blocks, " ");
    let decoded = unescape_entities(&without_tags);

    WHITESPACE_RE.replace_all(decoded.trim(), " ").into_owned()
}

/// Decodes the named and numeric HTML entities that show up in caption and
/// page text. `&amp;` is handled last so double-escaped input stays escaped
/// once rather than collapsing to markup.
pub(crate) fn unescape_entities(text: &str) -> String {
    let decoded = DEC_ENTITY_RE.replace_all(text, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    let decoded = HEX_ENTITY_RE.replace_all(&decoded, |caps: &Captures| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    decoded
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
