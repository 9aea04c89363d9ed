//! Value conversion between SharePoint item values and entity property values
//!
//! Each property gets a [`Conversion`] chosen from its declared shape. Lookup
//! properties convert between [`LookupValue`]s and the entity-side lookup
//! representations, enum properties convert between member names and enum
//! members, and everything else passes through untouched.

use super::classify::is_lookup;
use super::error::{MapperError, MapperResult};
use super::lookup::LookupValue;
use super::schema::{EnumType, LinkedShape, PrimitiveKind, PropertyDescriptor, TypeShape};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain value carried unchanged between the two sides.
///
/// Date/time fields travel as their original text; see [`Scalar::as_datetime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<Scalar>),
}

/// Value as returned by (or sent to) the SharePoint client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteValue {
    Lookup(LookupValue),
    Lookups(Vec<LookupValue>),
    Scalar(Scalar),
}

impl RemoteValue {
    pub fn null() -> Self {
        RemoteValue::Scalar(Scalar::Null)
    }

    pub fn text(value: &str) -> Self {
        RemoteValue::Scalar(Scalar::Text(value.to_string()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RemoteValue::Lookup(_) => "lookup value",
            RemoteValue::Lookups(_) => "lookup value array",
            RemoteValue::Scalar(scalar) => scalar.kind(),
        }
    }

}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Int(_) | Scalar::UInt(_) => "integer",
            Scalar::Float(_) => "number",
            Scalar::Text(_) => "string",
            Scalar::List(_) => "list",
        }
    }

    /// Parse an RFC 3339 text value, keeping its offset
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Scalar::Text(text) => DateTime::parse_from_rfc3339(text).ok(),
            _ => None,
        }
    }
}

/// Linked entity instance built from a lookup: its `Id` and optional `Title`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedRecord {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LinkedShape {
    /// Build one instance of this shape; the title is only set when the shape has one
    pub fn build(&self, lookup: &LookupValue) -> LinkedRecord {
        LinkedRecord {
            id: lookup.id,
            title: if self.title { lookup.value.clone() } else { None },
        }
    }
}

/// Value in the shape the entity property expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocalValue {
    Scalar(Scalar),
    Enum(String),
    Pair { id: i32, label: Option<String> },
    Map(BTreeMap<i32, Option<String>>),
    Ids(Vec<i32>),
    Linked(LinkedRecord),
    LinkedList(Vec<LinkedRecord>),
    /// Non-scalar remote value on a plain property (user fields and the like)
    Raw(RemoteValue),
}

impl LocalValue {
    pub fn null() -> Self {
        LocalValue::Scalar(Scalar::Null)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LocalValue::Scalar(scalar) => scalar.kind(),
            LocalValue::Enum(_) => "enum member",
            LocalValue::Pair { .. } => "lookup pair",
            LocalValue::Map(_) => "lookup mapping",
            LocalValue::Ids(_) => "id array",
            LocalValue::Linked(_) => "linked entity",
            LocalValue::LinkedList(_) => "linked entity array",
            LocalValue::Raw(remote) => remote.kind(),
        }
    }
}

/// Entity-side representation of a lookup property
#[derive(Debug, Clone, PartialEq)]
pub enum LookupTarget {
    Pair,
    Map,
    Ids,
    Id,
    Text,
    Linked(LinkedShape),
    LinkedList(LinkedShape),
    /// Lookup by annotation on a type with no lookup representation
    Unsupported(String),
}

impl LookupTarget {
    fn from_shape(shape: &TypeShape) -> Self {
        match shape {
            TypeShape::LookupPair => LookupTarget::Pair,
            TypeShape::LookupMap => LookupTarget::Map,
            TypeShape::Linked(linked) => LookupTarget::Linked(linked.clone()),
            TypeShape::Array { element } => match element.as_ref() {
                TypeShape::Linked(linked) => LookupTarget::LinkedList(linked.clone()),
                TypeShape::Primitive {
                    primitive: PrimitiveKind::Int32,
                } => LookupTarget::Ids,
                _ => LookupTarget::Unsupported(shape.type_name()),
            },
            _ => match shape.unwrap_nullable() {
                TypeShape::Primitive {
                    primitive: PrimitiveKind::Int32,
                } => LookupTarget::Id,
                TypeShape::Primitive {
                    primitive: PrimitiveKind::String,
                } => LookupTarget::Text,
                _ => LookupTarget::Unsupported(shape.type_name()),
            },
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            LookupTarget::Map | LookupTarget::Ids | LookupTarget::LinkedList(_)
        )
    }

    fn describe(&self) -> String {
        match self {
            LookupTarget::Pair => "lookup pair".to_string(),
            LookupTarget::Map => "lookup mapping".to_string(),
            LookupTarget::Ids => "id array".to_string(),
            LookupTarget::Id => "lookup id".to_string(),
            LookupTarget::Text => "lookup label".to_string(),
            LookupTarget::Linked(linked) => linked.name.clone(),
            LookupTarget::LinkedList(linked) => format!("{}[]", linked.name),
            LookupTarget::Unsupported(type_name) => type_name.clone(),
        }
    }

    fn to_local(&self, property: &str, remote: RemoteValue) -> MapperResult<LocalValue> {
        if self.is_multi() {
            let values = match remote {
                RemoteValue::Lookups(values) => values,
                RemoteValue::Scalar(Scalar::Null) => Vec::new(),
                other => {
                    return Err(MapperError::mismatch(property, "lookup value array", other.kind()));
                }
            };
            return self.multi_to_local(property, values);
        }

        let lookup = match remote {
            RemoteValue::Lookup(value) => Some(value),
            RemoteValue::Scalar(Scalar::Null) => None,
            other => return Err(MapperError::mismatch(property, "lookup value", other.kind())),
        };
        self.single_to_local(property, lookup)
    }

    fn multi_to_local(&self, property: &str, values: Vec<LookupValue>) -> MapperResult<LocalValue> {
        let value = match self {
            LookupTarget::Map => {
                LocalValue::Map(values.into_iter().map(|v| (v.id, v.value)).collect())
            }
            LookupTarget::Ids => LocalValue::Ids(values.iter().map(|v| v.id).collect()),
            LookupTarget::LinkedList(linked) => {
                LocalValue::LinkedList(values.iter().map(|v| linked.build(v)).collect())
            }
            _ => return Err(MapperError::mismatch(property, self.describe(), "lookup value array")),
        };
        Ok(value)
    }

    fn single_to_local(&self, property: &str, lookup: Option<LookupValue>) -> MapperResult<LocalValue> {
        let lookup = lookup.unwrap_or_default();
        let value = match self {
            LookupTarget::Pair => LocalValue::Pair {
                id: lookup.id,
                label: lookup.value,
            },
            LookupTarget::Id => LocalValue::Scalar(Scalar::Int(i64::from(lookup.id))),
            LookupTarget::Text => LocalValue::Scalar(match lookup.value {
                Some(label) => Scalar::Text(label),
                None => Scalar::Null,
            }),
            LookupTarget::Linked(linked) => LocalValue::Linked(linked.build(&lookup)),
            _ => return Err(MapperError::mismatch(property, self.describe(), "lookup value")),
        };
        Ok(value)
    }

    fn to_remote(&self, property: &str, local: &LocalValue) -> MapperResult<RemoteValue> {
        let remote = match (self, local) {
            (_, LocalValue::Scalar(Scalar::Null)) => RemoteValue::null(),
            (LookupTarget::Pair, LocalValue::Pair { id, .. }) => {
                RemoteValue::Lookup(LookupValue::from_id(*id))
            }
            (LookupTarget::Map, LocalValue::Map(map)) => {
                RemoteValue::Lookups(LookupValue::from_ids(map.keys().copied()))
            }
            (LookupTarget::Ids, LocalValue::Ids(ids)) => RemoteValue::Scalar(Scalar::List(
                ids.iter().map(|id| Scalar::Int(i64::from(*id))).collect(),
            )),
            (LookupTarget::LinkedList(_), LocalValue::LinkedList(records)) => {
                RemoteValue::Lookups(LookupValue::from_ids(records.iter().map(|r| r.id)))
            }
            (LookupTarget::Linked(_), LocalValue::Linked(record)) => {
                RemoteValue::Lookup(LookupValue::from_id(record.id))
            }
            (LookupTarget::Id | LookupTarget::Text | LookupTarget::Unsupported(_), LocalValue::Scalar(scalar)) => {
                RemoteValue::Scalar(scalar.clone())
            }
            (target, other) => {
                return Err(MapperError::mismatch(property, target.describe(), other.kind()));
            }
        };
        Ok(remote)
    }
}

/// How values of one property move between the two sides
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    Passthrough,
    Enum { enum_type: EnumType, nullable: bool },
    Lookup(LookupTarget),
}

impl Conversion {
    pub fn for_property(property: &PropertyDescriptor) -> Self {
        if is_lookup(property) {
            return Conversion::Lookup(LookupTarget::from_shape(&property.shape));
        }
        match &property.shape {
            TypeShape::Enum(enum_type) => Conversion::Enum {
                enum_type: enum_type.clone(),
                nullable: false,
            },
            TypeShape::Nullable { inner } => match inner.as_ref() {
                TypeShape::Enum(enum_type) => Conversion::Enum {
                    enum_type: enum_type.clone(),
                    nullable: true,
                },
                _ => Conversion::Passthrough,
            },
            _ => Conversion::Passthrough,
        }
    }

    pub fn to_local(&self, property: &str, remote: RemoteValue) -> MapperResult<LocalValue> {
        match self {
            Conversion::Lookup(target) => target.to_local(property, remote),
            Conversion::Enum { enum_type, nullable } => match remote {
                RemoteValue::Scalar(Scalar::Text(member)) => {
                    if enum_type.has_member(&member) {
                        Ok(LocalValue::Enum(member))
                    } else {
                        Err(MapperError::Parse {
                            type_name: enum_type.name.clone(),
                            value: member,
                        })
                    }
                }
                RemoteValue::Scalar(Scalar::Null) if *nullable => Ok(LocalValue::null()),
                RemoteValue::Scalar(Scalar::Null) => Err(MapperError::Parse {
                    type_name: enum_type.name.clone(),
                    value: "null".to_string(),
                }),
                other => Err(MapperError::mismatch(property, "enum member name", other.kind())),
            },
            Conversion::Passthrough => Ok(match remote {
                RemoteValue::Scalar(scalar) => LocalValue::Scalar(scalar),
                other => LocalValue::Raw(other),
            }),
        }
    }

    pub fn to_remote(&self, property: &str, local: &LocalValue) -> MapperResult<RemoteValue> {
        match self {
            Conversion::Lookup(target) => target.to_remote(property, local),
            Conversion::Enum { enum_type, nullable } => match local {
                LocalValue::Enum(member) if enum_type.has_member(member) => {
                    Ok(RemoteValue::text(member))
                }
                LocalValue::Enum(member) => Err(MapperError::Parse {
                    type_name: enum_type.name.clone(),
                    value: member.clone(),
                }),
                LocalValue::Scalar(Scalar::Null) if *nullable => Ok(RemoteValue::null()),
                other => Err(MapperError::mismatch(property, "enum member", other.kind())),
            },
            Conversion::Passthrough => match local {
                LocalValue::Scalar(scalar) => Ok(RemoteValue::Scalar(scalar.clone())),
                LocalValue::Raw(remote) => Ok(remote.clone()),
                other => Err(MapperError::mismatch(property, "plain value", other.kind())),
            },
        }
    }
}

/// Convert a value read from a SharePoint item into the property's entity representation
pub fn to_local_value(property: &PropertyDescriptor, remote: RemoteValue) -> MapperResult<LocalValue> {
    Conversion::for_property(property).to_local(&property.name, remote)
}

/// Convert an entity property value into what SharePoint expects for the field
pub fn to_remote_value(property: &PropertyDescriptor, local: &LocalValue) -> MapperResult<RemoteValue> {
    Conversion::for_property(property).to_remote(&property.name, local)
}
