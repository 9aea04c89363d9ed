//! Declarative descriptor table for entity types
//!
//! An [`EntitySchema`] stands in for the annotated entity class: it names the
//! type, carries the list-level annotations, and describes every property by
//! its declared [`TypeShape`] plus the annotations attached to it. Schemas are
//! plain serde data so they can be written by hand in TOML or JSON.

use super::error::{MapperError, MapperResult};
use super::field_type::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Primitive type codes a property can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Byte,
    SByte,
    UInt16,
    UInt32,
    UInt64,
    Int16,
    Int32,
    Int64,
    Decimal,
    Double,
    Single,
    Boolean,
    String,
    Char,
    DateTime,
    Guid,
    TimeSpan,
    Object,
}

impl PrimitiveKind {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::SByte
                | PrimitiveKind::UInt16
                | PrimitiveKind::UInt32
                | PrimitiveKind::UInt64
                | PrimitiveKind::Int16
                | PrimitiveKind::Int32
                | PrimitiveKind::Int64
                | PrimitiveKind::Decimal
                | PrimitiveKind::Double
                | PrimitiveKind::Single
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::SByte => "SByte",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::String => "String",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::DateTime => "DateTime",
            PrimitiveKind::Guid => "Guid",
            PrimitiveKind::TimeSpan => "TimeSpan",
            PrimitiveKind::Object => "Object",
        }
    }
}

/// Enumeration declared on the entity side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<String>,
}

impl EnumType {
    pub fn has_member(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }
}

/// Linked entity shape: a lookup target type exposing `Id` and optionally `Title`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedShape {
    pub name: String,
    #[serde(default)]
    pub title: bool,
}

/// Declared type of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    Primitive { primitive: PrimitiveKind },
    Enum(EnumType),
    /// Single lookup pair: (int id, string label)
    LookupPair,
    /// Multi lookup mapping: int id -> string label
    LookupMap,
    Linked(LinkedShape),
    /// Complex type with no recognised shape
    Complex { name: String },
    Nullable { inner: Box<TypeShape> },
    Array { element: Box<TypeShape> },
}

impl TypeShape {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeShape::Primitive { primitive: kind }
    }

    pub fn nullable(inner: TypeShape) -> Self {
        TypeShape::Nullable {
            inner: Box::new(inner),
        }
    }

    pub fn array(element: TypeShape) -> Self {
        TypeShape::Array {
            element: Box::new(element),
        }
    }

    pub fn enumeration(name: &str, members: &[&str]) -> Self {
        TypeShape::Enum(EnumType {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        })
    }

    pub fn linked(name: &str, title: bool) -> Self {
        TypeShape::Linked(LinkedShape {
            name: name.to_string(),
            title,
        })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeShape::Array { .. })
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, TypeShape::LookupMap)
    }

    /// Element type for arrays, `None` for everything else
    pub fn element(&self) -> Option<&TypeShape> {
        match self {
            TypeShape::Array { element } => Some(element),
            _ => None,
        }
    }

    /// Strip one level of nullable wrapping
    pub fn unwrap_nullable(&self) -> &TypeShape {
        match self {
            TypeShape::Nullable { inner } => inner,
            other => other,
        }
    }

    /// True for linked shapes and arrays of linked shapes
    pub fn exposes_id(&self) -> bool {
        match self {
            TypeShape::Linked(_) => true,
            TypeShape::Array { element } => matches!(**element, TypeShape::Linked(_)),
            _ => false,
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            TypeShape::Primitive { primitive } => primitive.name().to_string(),
            TypeShape::Enum(e) => e.name.clone(),
            TypeShape::LookupPair => "KeyValuePair<Int32, String>".to_string(),
            TypeShape::LookupMap => "Dictionary<Int32, String>".to_string(),
            TypeShape::Linked(l) => l.name.clone(),
            TypeShape::Complex { name } => name.clone(),
            TypeShape::Nullable { inner } => format!("{}?", inner.type_name()),
            TypeShape::Array { element } => format!("{}[]", element.type_name()),
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

/// Annotations attached to a single property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAnnotations {
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub kinds: Vec<FieldKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub shape: TypeShape,
    #[serde(flatten)]
    pub annotations: PropertyAnnotations,
}

impl PropertyDescriptor {
    pub fn new(name: &str, shape: TypeShape) -> Self {
        Self {
            name: name.to_string(),
            shape,
            annotations: PropertyAnnotations::default(),
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.annotations.kinds.push(kind);
        self
    }

    pub fn with_internal_name(mut self, internal_name: &str) -> Self {
        self.annotations.internal_name = Some(internal_name.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.annotations.display_name = Some(display_name.to_string());
        self
    }

    pub fn has_kind(&self, kind: FieldKind) -> bool {
        self.annotations.kinds.contains(&kind)
    }
}

/// List-level annotations of an entity type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityAnnotations {
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub list_template: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub name: String,
    #[serde(default)]
    pub annotations: EntityAnnotations,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl EntitySchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            annotations: EntityAnnotations::default(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn from_toml_str(content: &str) -> MapperResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> MapperResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a schema file, picking the format from its extension
    pub fn load(path: &Path) -> MapperResult<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        if extension != "json" && extension != "toml" {
            return Err(MapperError::Schema(format!(
                "Unsupported schema format '{}' for {}",
                extension,
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| MapperError::Schema(format!("{}: {}", path.display(), e)))?;

        if extension == "json" {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}
