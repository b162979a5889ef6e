// Use 3rd party
use log::{debug, trace, warn};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

// Use local
use crate::error::{DecodeError, DecodeResult};
use crate::model::PlaylistType;

/// Wire keys of the playlist resource. Decode and encode use the same set.
pub mod keys {
    pub const ID: &str = "id";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
    pub const FAVORITE: &str = "favorite";
    pub const REFERENCE_ID: &str = "reference_id";
    pub const ACCOUNT_ID: &str = "account_id";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const VIDEO_IDS: &str = "video_ids";
    pub const PLAYLIST_TYPE: &str = "playlist_type";

    pub const ALL: [&str; 10] = [
        ID,
        CREATED_AT,
        UPDATED_AT,
        FAVORITE,
        REFERENCE_ID,
        ACCOUNT_ID,
        NAME,
        DESCRIPTION,
        VIDEO_IDS,
        PLAYLIST_TYPE,
    ];
}

//Media API playlist example:
//{
    //"id": "1642497530128018",
    //"account_id": "57838016001",
    //"name": "Featured",
    //"video_ids": ["4492075574001", "4492154723001"],
    //"playlist_type": "EXPLICIT"
//}

/// A playlist resource of the Media API.
///
/// `None` means the field was never seen: it is left out when encoding.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub favorite: Option<bool>,
    pub reference_id: Option<String>,
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub video_ids: Option<Vec<String>>,
    pub playlist_type: Option<PlaylistType>,
}

impl Playlist {
    /// An empty playlist, for building one to submit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> DecodeResult<Self> {
        match parse_document(json)? {
            Value::Object(object) => Self::from_json_object(&object),
            other => Err(DecodeError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    pub fn from_json_value(value: &Value) -> DecodeResult<Self> {
        match value {
            Value::Object(object) => Self::from_json_object(object),
            other => Err(DecodeError::NotAnObject {
                found: kind_of(other),
            }),
        }
    }

    pub fn from_json_object(object: &Map<String, Value>) -> DecodeResult<Self> {
        for key in object
            .keys()
            .filter(|key| !keys::ALL.iter().any(|known| *known == key.as_str()))
        {
            trace!("Ignoring unknown playlist key `{}`", key);
        }

        Self::decode_fields(object).map_err(|error| {
            debug!("Playlist decode failed: {}", error);
            error
        })
    }

    /// Decodes a list response: a JSON array of playlist objects.
    pub fn list_from_json_str(json: &str) -> DecodeResult<Vec<Self>> {
        let items = match parse_document(json)? {
            Value::Array(items) => items,
            other => {
                return Err(DecodeError::NotAnArray {
                    found: kind_of(&other),
                })
            }
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Self::from_json_value(item).map_err(|error| {
                    debug!("Playlist {} of list could not be decoded", index);
                    error
                })
            })
            .collect()
    }

    fn decode_fields(object: &Map<String, Value>) -> DecodeResult<Self> {
        Ok(Self {
            id: string_field(object, keys::ID)?,
            created_at: string_field(object, keys::CREATED_AT)?,
            updated_at: string_field(object, keys::UPDATED_AT)?,
            favorite: field(object, keys::FAVORITE, "a boolean", Value::as_bool)?,
            reference_id: string_field(object, keys::REFERENCE_ID)?,
            account_id: string_field(object, keys::ACCOUNT_ID)?,
            name: string_field(object, keys::NAME)?,
            description: string_field(object, keys::DESCRIPTION)?,
            video_ids: video_ids_field(object)?,
            playlist_type: playlist_type_field(object)?,
        })
    }

    /// Encodes the set fields under their wire keys.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut json = Map::new();
        put(&mut json, keys::ID, self.id.clone());
        put(&mut json, keys::CREATED_AT, self.created_at.clone());
        put(&mut json, keys::UPDATED_AT, self.updated_at.clone());
        put(&mut json, keys::FAVORITE, self.favorite);
        put(&mut json, keys::REFERENCE_ID, self.reference_id.clone());
        put(&mut json, keys::ACCOUNT_ID, self.account_id.clone());
        put(&mut json, keys::NAME, self.name.clone());
        put(&mut json, keys::DESCRIPTION, self.description.clone());
        put(&mut json, keys::VIDEO_IDS, self.video_ids.clone());
        put(
            &mut json,
            keys::PLAYLIST_TYPE,
            self.playlist_type.map(|kind| kind.as_str()),
        );
        json
    }

    pub fn to_json_value(&self) -> Value {
        Value::Object(self.to_json())
    }

    /// Whether the server computes the order. False when the type is unset.
    pub fn is_smart(&self) -> bool {
        self.playlist_type.map_or(false, |kind| kind.is_smart())
    }
}

impl Serialize for Playlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Playlist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(de::Error::custom)
    }
}

// Empty text and a bare `null` are both treated as a missing document
fn parse_document(json: &str) -> DecodeResult<Value> {
    if json.trim().is_empty() {
        return Err(DecodeError::NullInput);
    }

    match serde_json::from_str::<Value>(json)? {
        Value::Null => Err(DecodeError::NullInput),
        value => Ok(value),
    }
}

fn field<'a, T>(
    object: &'a Map<String, Value>,
    key: &'static str,
    expected: &'static str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> DecodeResult<Option<T>> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => extract(value)
            .map(Some)
            .ok_or_else(|| DecodeError::FieldType {
                field: key,
                expected,
                found: kind_of(value),
            }),
    }
}

fn string_field(object: &Map<String, Value>, key: &'static str) -> DecodeResult<Option<String>> {
    field(object, key, "a string", |value| value.as_str().map(str::to_owned))
}

fn video_ids_field(object: &Map<String, Value>) -> DecodeResult<Option<Vec<String>>> {
    let ids = match field(object, keys::VIDEO_IDS, "an array", Value::as_array)? {
        Some(ids) => ids,
        None => return Ok(None),
    };

    ids.iter()
        .map(|id| {
            id.as_str()
                .map(str::to_owned)
                .ok_or_else(|| DecodeError::FieldType {
                    field: keys::VIDEO_IDS,
                    expected: "string elements",
                    found: kind_of(id),
                })
        })
        .collect::<DecodeResult<Vec<String>>>()
        .map(Some)
}

fn playlist_type_field(object: &Map<String, Value>) -> DecodeResult<Option<PlaylistType>> {
    let literal = match field(object, keys::PLAYLIST_TYPE, "a string", Value::as_str)? {
        Some(literal) => literal,
        None => return Ok(None),
    };

    literal.parse().map(Some).map_err(|error| {
        warn!("Media API specified invalid value for playlist type '{}'", literal);
        error
    })
}

fn put<T: Into<Value>>(json: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        json.insert(key.to_owned(), value.into());
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
