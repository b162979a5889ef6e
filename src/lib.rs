//! Media-playlist is the playlist resource model of a video platform's Media API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! media-playlist = "0.1.0"
//! ```
//!
//! The crate does no I/O. It turns the JSON documents an HTTP client receives
//! into [`Playlist`](model::Playlist) values, and turns them back into the JSON
//! objects the client submits.
//!
//! ## Wire schema
//!
//! Decode and encode share one set of keys: `id`, `reference_id`, `account_id`,
//! `name`, `description`, `video_ids`, `playlist_type`, `created_at`,
//! `updated_at` and `favorite`. Keys missing from a document stay `None`, and
//! `None` fields are left out of the encoded object. Unknown keys are ignored.
//!
//! ### Examples
//!
//! ```rust
//! use media_playlist::model::{Playlist, PlaylistType};
//!
//! let json = r#"{"name": "Featured", "video_ids": ["v3", "v1"], "playlist_type": "EXPLICIT"}"#;
//! let mut playlist = Playlist::from_json_str(json).unwrap();
//! assert_eq!(playlist.playlist_type, Some(PlaylistType::Explicit));
//!
//! // Update it before submitting it back
//! playlist.description = Some("Home page".to_owned());
//! let body = playlist.to_json_value();
//! assert_eq!(body["description"], "Home page");
//! assert!(body.get("id").is_none());
//! ```
//!
//! Unknown playlist types are rejected:
//!
//! ```rust
//! use media_playlist::model::Playlist;
//!
//! let error = Playlist::from_json_str(r#"{"playlist_type": "RANDOM"}"#).unwrap_err();
//! assert_eq!(error.reason(), "invalid enumeration value");
//! ```

pub mod error;
pub mod model;

pub use crate::error::{DecodeError, DecodeResult};
pub use crate::model::{Playlist, PlaylistType};
