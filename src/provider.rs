use async_trait::async_trait;
use eyre::Result;

use crate::Segment;

/// Source of timed transcript segments for a video.
///
/// Implementations return segments in the order they should be printed.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<Segment>>;
}
