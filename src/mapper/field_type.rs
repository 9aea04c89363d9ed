//! SharePoint field types and the annotation markers that force them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a SharePoint list field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Invalid,
    Text,
    Note,
    Number,
    Boolean,
    DateTime,
    Choice,
    Currency,
    Lookup,
    ManagedMetadata,
    Url,
    User,
}

impl FieldType {
    pub fn is_valid(&self) -> bool {
        *self != FieldType::Invalid
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Invalid => "Invalid",
            FieldType::Text => "Text",
            FieldType::Note => "Note",
            FieldType::Number => "Number",
            FieldType::Boolean => "Boolean",
            FieldType::DateTime => "DateTime",
            FieldType::Choice => "Choice",
            FieldType::Currency => "Currency",
            FieldType::Lookup => "Lookup",
            FieldType::ManagedMetadata => "ManagedMetadata",
            FieldType::Url => "URL",
            FieldType::User => "User",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-kind annotation attached to a property.
///
/// Each marker carries a fixed associated [`FieldType`]. `Lookup` and
/// `MultiLookup` both belong to the lookup category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    Choice,
    Currency,
    DateTime,
    Lookup,
    MultiLookup,
    ManagedMetadata,
    Note,
    Number,
    Text,
    Url,
    User,
}

/// Categories checked when no lookup decided the type, first match wins
pub(crate) const ANNOTATION_PRIORITY: [FieldCategory; 11] = [
    FieldCategory::Boolean,
    FieldCategory::Choice,
    FieldCategory::Currency,
    FieldCategory::DateTime,
    FieldCategory::LookupBase,
    FieldCategory::ManagedMetadata,
    FieldCategory::Note,
    FieldCategory::Number,
    FieldCategory::Text,
    FieldCategory::Url,
    FieldCategory::User,
];

/// Annotation category as seen by the classifier: lookup variants collapse into one base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldCategory {
    Boolean,
    Choice,
    Currency,
    DateTime,
    LookupBase,
    ManagedMetadata,
    Note,
    Number,
    Text,
    Url,
    User,
}

impl FieldKind {
    pub fn associated_field_type(&self) -> FieldType {
        match self {
            FieldKind::Boolean => FieldType::Boolean,
            FieldKind::Choice => FieldType::Choice,
            FieldKind::Currency => FieldType::Currency,
            FieldKind::DateTime => FieldType::DateTime,
            FieldKind::Lookup | FieldKind::MultiLookup => FieldType::Lookup,
            FieldKind::ManagedMetadata => FieldType::ManagedMetadata,
            FieldKind::Note => FieldType::Note,
            FieldKind::Number => FieldType::Number,
            FieldKind::Text => FieldType::Text,
            FieldKind::Url => FieldType::Url,
            FieldKind::User => FieldType::User,
        }
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, FieldKind::Lookup | FieldKind::MultiLookup)
    }

    pub(crate) fn category(&self) -> FieldCategory {
        match self {
            FieldKind::Boolean => FieldCategory::Boolean,
            FieldKind::Choice => FieldCategory::Choice,
            FieldKind::Currency => FieldCategory::Currency,
            FieldKind::DateTime => FieldCategory::DateTime,
            FieldKind::Lookup | FieldKind::MultiLookup => FieldCategory::LookupBase,
            FieldKind::ManagedMetadata => FieldCategory::ManagedMetadata,
            FieldKind::Note => FieldCategory::Note,
            FieldKind::Number => FieldCategory::Number,
            FieldKind::Text => FieldCategory::Text,
            FieldKind::Url => FieldCategory::Url,
            FieldKind::User => FieldCategory::User,
        }
    }
}
