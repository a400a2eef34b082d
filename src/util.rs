use crate::models::episode::Episode;
use std::io;
use std::path::{Path, PathBuf};

/// Create every missing parent directory of `path`. Does nothing when they
/// already exist.
pub fn ensure_dir_exists(path: &Path) -> io::Result<()> {
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			std::fs::create_dir_all(parent)?;
		}
	}
	Ok(())
}

/// Substitute `{number}`, `{title}` and `{ext}` into a path template. The
/// title is used verbatim, exactly as it appeared in the feed.
pub fn render_path(formatstr: &str, episode: &Episode) -> PathBuf {
	let rendered = formatstr
		.replace("{number}", &episode.number.to_string())
		.replace("{title}", &episode.title)
		.replace("{ext}", episode.ext());
	PathBuf::from(rendered)
}
