use crate::error::{GenericError, Result};
use crate::format::VideoFormat;
use log::debug;
use reqwest::{Client, StatusCode};

pub const DEFAULT_FEED_BASE: &str = "http://vimcasts.org/feeds";

/// The HTTP layer. One instance is shared between the episode collection and
/// the saver so they reuse a single connection pool.
#[derive(Clone)]
pub struct Requester {
	net: Client,
	feed_base: String,
}

impl Requester {
	pub fn new() -> Self {
		Self::with_feed_base(DEFAULT_FEED_BASE)
	}

	pub fn with_feed_base(feed_base: impl Into<String>) -> Self {
		Requester {
			net: Client::new(),
			feed_base: feed_base.into(),
		}
	}

	/// Fetch the raw feed document for the given video format.
	pub async fn get_feed(&self, format: &VideoFormat) -> Result<String> {
		let url = format!("{}/{}", self.feed_base, format.as_str());
		debug!("GET {}", url);
		let response = self.net.get(&url).send().await?;

		let status = response.status();
		if status != StatusCode::OK {
			return Err(
				GenericError(format!("Status code was not 200 OK.\nCode: {}", status)).into(),
			);
		}

		let text = response.text().await?;
		Ok(text)
	}

	/// Fetch the binary content behind an enclosure URL taken verbatim from
	/// the feed.
	pub async fn get_content(&self, url: &str) -> Result<Vec<u8>> {
		debug!("GET {}", url);
		let response = self.net.get(url).send().await?;

		let status = response.status();
		if status != StatusCode::OK {
			return Err(
				GenericError(format!("Status code was not 200 OK.\nCode: {}", status)).into(),
			);
		}

		let content = response.bytes().await?;
		Ok(content.to_vec())
	}
}

impl Default for Requester {
	fn default() -> Self {
		Self::new()
	}
}
