use crate::error::Result;
use crate::format::VideoFormat;
use crate::models::episode::Episode;
use crate::parser;
use crate::requester::Requester;

/// The collection of available episodes, viewed from a 1-based start offset.
///
/// The feed is fetched and parsed once per instance on first use; repeated
/// iteration reuses the cached list.
///
/// Example:
///
/// ```no_run
/// # async fn run() -> vimcasts_downloader::error::Result<()> {
/// use vimcasts_downloader::episodes::Episodes;
/// use vimcasts_downloader::format::VideoFormat;
/// use vimcasts_downloader::requester::Requester;
///
/// let mut episodes = Episodes::new(Requester::new())
/// 	.starting_from(42)
/// 	.with_format(VideoFormat::Quicktime);
/// for episode in episodes.fetch().await? {
/// 	println!("#{} {}", episode.number, episode.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Episodes {
	requester: Requester,
	starts_from: u32,
	video_format: VideoFormat,
	cache: Option<Vec<Episode>>,
}

impl Episodes {
	pub fn new(requester: Requester) -> Self {
		Episodes {
			requester,
			starts_from: 1,
			video_format: VideoFormat::default(),
			cache: None,
		}
	}

	pub fn starting_from(mut self, number: u32) -> Self {
		self.starts_from = number;
		self
	}

	pub fn with_format(mut self, video_format: VideoFormat) -> Self {
		self.video_format = video_format;
		self
	}

	/// Episodes from `starts_from` onwards, in chronological order. The
	/// first call fetches and parses the feed; later calls hit the cache.
	/// An offset past the end of the feed yields an empty slice.
	pub async fn fetch(&mut self) -> Result<&[Episode]> {
		if self.cache.is_none() {
			let raw = self.requester.get_feed(&self.video_format).await?;
			self.cache = Some(parser::parse(&raw, &self.video_format)?);
		}
		let all = match &self.cache {
			Some(episodes) => episodes.as_slice(),
			None => &[],
		};
		let skip = self.starts_from.saturating_sub(1) as usize;
		if skip >= all.len() {
			return Ok(&[]);
		}
		Ok(&all[skip..])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use wiremock::matchers::{method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Vimcasts</title>
    <link>http://vimcasts.org</link>
    <description>Screencasts about Vim</description>
    <item>
      <title>First</title>
      <enclosure url="http://m.test/1.m4v" length="1" type="video/x-m4v"/>
      <pubDate>Mon, 01 Jan 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Second</title>
      <enclosure url="http://m.test/2.m4v" length="1" type="video/x-m4v"/>
      <pubDate>Tue, 02 Jan 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Third</title>
      <enclosure url="http://m.test/3.m4v" length="1" type="video/x-m4v"/>
      <pubDate>Wed, 03 Jan 2024 10:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

	async fn feed_server() -> MockServer {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/feeds/quicktime"))
			.respond_with(ResponseTemplate::new(200).set_body_string(FEED))
			.expect(1)
			.mount(&server)
			.await;
		server
	}

	fn requester_for(server: &MockServer) -> Requester {
		Requester::with_feed_base(format!("{}/feeds", server.uri()))
	}

	#[tokio::test]
	async fn starts_from_skips_earlier_episodes() {
		let server = feed_server().await;
		let mut episodes = Episodes::new(requester_for(&server)).starting_from(2);

		let slice = episodes.fetch().await.unwrap();
		assert_eq!(slice.len(), 2);
		assert_eq!(slice[0].number, 2);
		assert_eq!(slice[0].title, "Second");
		assert_eq!(slice[1].number, 3);
	}

	#[tokio::test]
	async fn starts_from_past_the_end_yields_empty() {
		let server = feed_server().await;
		let mut episodes = Episodes::new(requester_for(&server)).starting_from(4);

		assert!(episodes.fetch().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn refetching_hits_the_cache() {
		// The mock expects exactly one feed request; a second network hit
		// fails the test on drop.
		let server = feed_server().await;
		let mut episodes = Episodes::new(requester_for(&server));

		let first: Vec<u32> = episodes.fetch().await.unwrap().iter().map(|ep| ep.number).collect();
		let second: Vec<u32> = episodes.fetch().await.unwrap().iter().map(|ep| ep.number).collect();
		assert_eq!(first, [1, 2, 3]);
		assert_eq!(first, second);
	}

	#[tokio::test]
	async fn feed_fetch_failure_is_an_error_not_an_empty_list() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/feeds/quicktime"))
			.respond_with(ResponseTemplate::new(500))
			.mount(&server)
			.await;

		let mut episodes = Episodes::new(requester_for(&server));
		assert!(episodes.fetch().await.is_err());
	}
}
