use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Extension used when a format has no entry in the table.
const DEFAULT_EXTENSION: &str = "m4v";

lazy_static! {
    static ref EXTENSIONS: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("quicktime", "m4v");
        table.insert("ogg", "ogv");
        table
    };
}

/// The published video format of an episode. Doubles as the final path
/// segment of the feed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoFormat {
    Quicktime,
    Ogg,
    Other(String),
}

impl VideoFormat {
    pub fn new(name: impl AsRef<str>) -> Self {
        match name.as_ref() {
            "quicktime" => VideoFormat::Quicktime,
            "ogg" => VideoFormat::Ogg,
            other => VideoFormat::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VideoFormat::Quicktime => "quicktime",
            VideoFormat::Ogg => "ogg",
            VideoFormat::Other(name) => name,
        }
    }

    /// File extension for this format. Unknown formats fall back to the
    /// default extension rather than failing.
    pub fn extension(&self) -> &'static str {
        EXTENSIONS
            .get(self.as_str())
            .copied()
            .unwrap_or(DEFAULT_EXTENSION)
    }
}

impl Default for VideoFormat {
    fn default() -> Self {
        VideoFormat::Quicktime
    }
}

impl Display for VideoFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
