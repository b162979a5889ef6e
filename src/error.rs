// Use 3rd party
use thiserror::Error;

// Use local
use crate::model::PlaylistType;

// Possible errors returned while decoding a playlist document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("playlist can not be parsed from a null or empty JSON string")]
    NullInput,
    #[error("json parse error: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },
    #[error("type mismatch for `{field}`: expected {expected}, found {found}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error(
        "invalid value for {field} '{value}'. Acceptable values are {}",
        PlaylistType::acceptable_values()
    )]
    InvalidEnumeration { field: &'static str, value: String },
}

impl DecodeError {
    /// Short category of the failure, stable across messages.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NullInput => "null input",
            Self::Malformed(_) | Self::NotAnObject { .. } | Self::NotAnArray { .. } => {
                "malformed JSON"
            }
            Self::FieldType { .. } => "type mismatch",
            Self::InvalidEnumeration { .. } => "invalid enumeration value",
        }
    }

    /// Wire key of the field that failed, if the failure is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldType { field, .. } | Self::InvalidEnumeration { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_enumeration_lists_every_literal() {
        let error = DecodeError::InvalidEnumeration {
            field: "playlist_type",
            value: "RANDOM".to_owned(),
        };
        let message = error.to_string();

        assert!(message.contains("'RANDOM'"));
        for literal in PlaylistType::ALL.iter().map(PlaylistType::as_str) {
            assert!(message.contains(literal), "{} missing from {}", literal, message);
        }
        assert_eq!(error.reason(), "invalid enumeration value");
        assert_eq!(error.field(), Some("playlist_type"));
    }

    #[test]
    fn malformed_has_no_field() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = DecodeError::from(json_error);

        assert_eq!(error.reason(), "malformed JSON");
        assert_eq!(error.field(), None);
    }

    #[test]
    fn field_type_reports_key() {
        let error = DecodeError::FieldType {
            field: "favorite",
            expected: "a boolean",
            found: "a string",
        };

        assert_eq!(error.reason(), "type mismatch");
        assert_eq!(error.field(), Some("favorite"));
        assert_eq!(
            error.to_string(),
            "type mismatch for `favorite`: expected a boolean, found a string"
        );
    }
}
