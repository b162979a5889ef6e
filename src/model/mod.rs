pub mod playlist;

// Use 3rd party
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

// Use built-in library
use std::fmt;
use std::str::FromStr;

// Use local
use crate::error::DecodeError;

pub use crate::model::playlist::Playlist;

/// How the Media API orders the videos of a playlist.
///
/// Every variant but `Explicit` is a "smart" playlist whose order is computed
/// server side. An `Explicit` playlist is ordered by its `video_ids`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaylistType {
    OldestToNewest,
    NewestToOldest,
    Alphabetical,
    PlaysTotal,
    PlaysTrailingWeek,
    Explicit,
}

impl PlaylistType {
    pub const ALL: [PlaylistType; 6] = [
        Self::OldestToNewest,
        Self::NewestToOldest,
        Self::Alphabetical,
        Self::PlaysTotal,
        Self::PlaysTrailingWeek,
        Self::Explicit,
    ];

    /// Wire literal of the variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OldestToNewest => "OLDEST_TO_NEWEST",
            Self::NewestToOldest => "NEWEST_TO_OLDEST",
            Self::Alphabetical => "ALPHABETICAL",
            Self::PlaysTotal => "PLAYSTOTAL",
            Self::PlaysTrailingWeek => "PLAYS_TRAILING_WEEK",
            Self::Explicit => "EXPLICIT",
        }
    }

    pub const fn is_smart(&self) -> bool {
        !matches!(self, Self::Explicit)
    }

    /// Quoted, comma separated list of every accepted literal.
    pub fn acceptable_values() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!("'{}'", kind.as_str()))
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl FromStr for PlaylistType {
    type Err = DecodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| DecodeError::InvalidEnumeration {
                field: playlist::keys::PLAYLIST_TYPE,
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for PlaylistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlaylistType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlaylistType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
