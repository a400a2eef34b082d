use crate::error::{GenericError, Result};
use crate::format::VideoFormat;
use crate::models::episode::{Episode, FeedItem};
use chrono::DateTime;
use log::{debug, warn};
use rss::Channel;

/// Parse a raw feed document into episodes sorted ascending by publish date
/// and numbered contiguously from 1.
///
/// An empty document yields an empty list. Items missing a title, enclosure
/// or publish date are dropped; an item whose publish date does not parse is
/// dropped as well, so a single bad item never aborts the run.
pub fn parse(raw: &str, video_format: &VideoFormat) -> Result<Vec<Episode>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let channel = raw
        .parse::<Channel>()
        .map_err(|err| GenericError(format!("Could not parse feed: {}", err)))?;

    let mut items: Vec<FeedItem> = channel.items().iter().filter_map(extract_item).collect();
    items.sort_by_key(|item| item.pub_date);

    let episodes = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Episode {
            number: index as u32 + 1,
            title: item.title,
            url: item.enclosure_url,
            video_format: video_format.clone(),
        })
        .collect();
    Ok(episodes)
}

fn extract_item(item: &rss::Item) -> Option<FeedItem> {
    let title = match item.title() {
        Some(title) => title,
        None => {
            debug!("Dropping feed item without a title");
            return None;
        }
    };
    let enclosure = match item.enclosure() {
        Some(enclosure) => enclosure,
        None => {
            debug!("Dropping feed item '{}': no enclosure", title);
            return None;
        }
    };
    let pub_date = match item.pub_date() {
        Some(date) => date,
        None => {
            debug!("Dropping feed item '{}': no publish date", title);
            return None;
        }
    };
    let pub_date = match DateTime::parse_from_rfc2822(pub_date) {
        Ok(date) => date,
        Err(err) => {
            warn!(
                "Dropping feed item '{}': bad publish date '{}': {}",
                title, pub_date, err
            );
            return None;
        }
    };

    Some(FeedItem {
        title: title.to_owned(),
        enclosure_url: enclosure.url().to_owned(),
        pub_date,
    })
}
