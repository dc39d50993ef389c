pub mod config;
pub mod error;
pub mod output;
pub mod provider;
pub mod youtube;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

pub use error::Error;
pub use provider::TranscriptProvider;
pub use youtube::YouTubeProvider;

/// An 11-character ID after `v=` or `/`; the first match in the input wins
const VIDEO_ID_PATTERN: &str = r"(?:v=|/)([0-9A-Za-z_-]{11}).*";

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VIDEO_ID_PATTERN).expect("video id pattern is valid"));

/// A single captioned segment
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Extract the video ID from a YouTube URL
pub fn extract_video_id(url: &str) -> Result<String, Error> {
    VIDEO_ID_RE
        .captures(url)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| Error::InvalidInput(url.to_string()))
}

/// Fetch the transcript for `url` from `provider` and render it as
/// `[MM:SS] text` lines.
///
/// The URL is validated before the provider is touched, so an
/// [`Error::InvalidInput`] never costs a network round trip. Any provider
/// failure comes back as [`Error::TranscriptFetchFailed`].
pub async fn fetch_youtube_transcript<P>(provider: &P, url: &str) -> Result<String, Error>
where
    P: TranscriptProvider + ?Sized,
{
    let video_id = extract_video_id(url)?;
    debug!("Extracted video ID {video_id} from {url}");

    let segments = provider
        .fetch(&video_id)
        .await
        .map_err(|e| Error::fetch_failed(&e))?;
    debug!("Provider returned {} segments", segments.len());

    Ok(output::render_timestamped(&segments))
}

/// Fetch a transcript straight from YouTube using the default language preference
pub async fn fetch_transcript(url: &str) -> Result<String, Error> {
    let provider = YouTubeProvider::new(reqwest::Client::new());
    fetch_youtube_transcript(&provider, url).await
}
