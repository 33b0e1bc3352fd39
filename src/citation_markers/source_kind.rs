//! Typed source-kind token for citation markers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::MarkerError;

/// Category of external reference a citation points to.
///
/// Closed enumeration of exactly six tokens. Parsing is case-sensitive:
/// `"Search"` is not a source kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Search,
    Image,
    News,
    Video,
    Ref,
    File,
}

impl SourceKind {
    /// All six kinds, in the order the patterns list them.
    pub const ALL: [SourceKind; 6] = [
        SourceKind::Search,
        SourceKind::Image,
        SourceKind::News,
        SourceKind::Video,
        SourceKind::Ref,
        SourceKind::File,
    ];

    /// The literal token as it appears inside a marker.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Search => "search",
            SourceKind::Image => "image",
            SourceKind::News => "news",
            SourceKind::Video => "video",
            SourceKind::Ref => "ref",
            SourceKind::File => "file",
        }
    }
}

impl FromStr for SourceKind {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(SourceKind::Search),
            "image" => Ok(SourceKind::Image),
            "news" => Ok(SourceKind::News),
            "video" => Ok(SourceKind::Video),
            "ref" => Ok(SourceKind::Ref),
            "file" => Ok(SourceKind::File),
            other => Err(MarkerError::UnknownSourceKind(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
