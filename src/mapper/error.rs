//! Error types for field mapping and value conversion

use thiserror::Error;

pub type MapperResult<T> = Result<T, MapperError>;

#[derive(Debug, Error, PartialEq)]
pub enum MapperError {
    /// A remote string (or a local member name) does not name a member of the enum
    #[error("'{value}' is not a member of enum {type_name}")]
    Parse { type_name: String, value: String },

    /// The value shape does not fit the property's declared type
    #[error("Type mismatch on property '{property}': expected {expected}, found {found}")]
    TypeMismatch {
        property: String,
        expected: String,
        found: String,
    },

    #[error("Property '{0}' is declared more than once")]
    DuplicateProperty(String),

    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

impl MapperError {
    pub(crate) fn mismatch(
        property: &str,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        MapperError::TypeMismatch {
            property: property.to_string(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl From<serde_json::Error> for MapperError {
    fn from(err: serde_json::Error) -> Self {
        MapperError::Schema(err.to_string())
    }
}

impl From<toml::de::Error> for MapperError {
    fn from(err: toml::de::Error) -> Self {
        MapperError::Schema(err.to_string())
    }
}
