use crate::error::Result;
use crate::format::VideoFormat;
use crate::requester::Requester;
use chrono::{DateTime, FixedOffset};

/// One well-formed feed item before sorting and numbering.
#[derive(Clone, Debug)]
pub struct FeedItem {
    pub title: String,
    pub enclosure_url: String,
    pub pub_date: DateTime<FixedOffset>,
}

/// A downloadable episode. The number is a rank assigned after sorting by
/// publish date, not a stable feed identifier.
#[derive(Clone, Debug)]
pub struct Episode {
    pub number: u32,
    pub title: String,
    pub url: String,
    pub video_format: VideoFormat,
}

impl Episode {
    pub fn ext(&self) -> &str {
        self.video_format.extension()
    }

    /// Best-effort single GET of the episode binary.
    pub async fn fetch_content(&self, requester: &Requester) -> Result<Vec<u8>> {
        requester.get_content(&self.url).await
    }
}
