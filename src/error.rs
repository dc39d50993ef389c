/// Failures surfaced by [`crate::fetch_youtube_transcript`].
///
/// Only two kinds exist. Everything that goes wrong inside a provider is
/// collapsed into `TranscriptFetchFailed` with the cause kept as text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid YouTube URL: {0}")]
    InvalidInput(String),

    #[error("Error fetching transcript: {0}")]
    TranscriptFetchFailed(String),
}

impl Error {
    /// Wrap any provider failure, keeping the full cause chain.
    pub fn fetch_failed(err: &eyre::Report) -> Self {
        Error::TranscriptFetchFailed(format!("{err:#}"))
    }
}
