use crate::episodes::Episodes;
use crate::error::Result;
use crate::event::Event;
use crate::models::episode::Episode;
use crate::requester::Requester;
use crate::util::{ensure_dir_exists, render_path};
use log::warn;
use std::path::PathBuf;

pub const DEFAULT_TEMPLATE: &str = "Vimcasts/{number}. {title}.{ext}";

/// A utility for downloading episodes to a path built from a template.
pub struct Saver<'a> {
    requester: Requester,
    /// Fires before an episode download starts.
    pub on_download: Event<'a, Episode>,
    /// Fires after an episode has been written to disk.
    pub on_finish: Event<'a, Episode>,
    /// Fires when an episode download failed and was skipped.
    pub on_failed: Event<'a, Episode>,
}

impl<'a> Saver<'a> {
    pub fn new(requester: Requester) -> Self {
        Saver {
            requester,
            on_download: Event::new(),
            on_finish: Event::new(),
            on_failed: Event::new(),
        }
    }

    /// Download one episode and write it to the location rendered from
    /// `formatstr`. A failed download skips the episode and returns
    /// `Ok(None)` without leaving a file behind; filesystem errors are
    /// fatal.
    pub async fn save(&self, episode: &Episode, formatstr: &str) -> Result<Option<PathBuf>> {
        let path = render_path(formatstr, episode);
        self.on_download.call(episode);

        let content = match episode.fetch_content(&self.requester).await {
            Ok(content) => content,
            Err(err) => {
                warn!("Could not fetch episode #{}: {}", episode.number, err);
                self.on_failed.call(episode);
                return Ok(None);
            }
        };

        ensure_dir_exists(&path)?;
        std::fs::write(&path, &content)?;
        self.on_finish.call(episode);
        Ok(Some(path))
    }

    /// Download every episode in the collection, strictly in order, one at
    /// a time. Returns the number of episodes actually written.
    pub async fn save_all(&self, episodes: &mut Episodes, formatstr: &str) -> Result<usize> {
        let mut saved = 0;
        for episode in episodes.fetch().await? {
            if self.save(episode, formatstr).await?.is_some() {
                saved += 1;
            }
        }
        Ok(saved)
    }
}
