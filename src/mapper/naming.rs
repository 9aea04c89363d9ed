//! Resolution of list and field names from entity descriptors

use super::classify::is_lookup;
use super::list_template::ListTemplateType;
use super::schema::{EntitySchema, PropertyDescriptor};

/// Member name marking a linked entity shape, also the single-lookup suffix
pub const SUFFIX_ID: &str = "Id";
/// Multi-lookup suffix
pub const SUFFIX_IDS: &str = "Ids";
/// Member receiving the lookup label on linked entity shapes
pub const TITLE_MEMBER: &str = "Title";

/// Internal and display name of a field after lookup suffix stripping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub internal: String,
    pub display: String,
}

pub fn resolve_entity_name(entity: &EntitySchema) -> String {
    entity
        .annotations
        .internal_name
        .clone()
        .unwrap_or_else(|| entity.name.clone())
}

pub fn resolve_display_name(property: &PropertyDescriptor) -> String {
    property
        .annotations
        .display_name
        .clone()
        .unwrap_or_else(|| property.name.clone())
}

pub fn resolve_description(entity: &EntitySchema) -> Option<String> {
    entity.annotations.description.clone()
}

pub fn resolve_list_template(entity: &EntitySchema) -> i32 {
    entity
        .annotations
        .list_template
        .unwrap_or_else(|| ListTemplateType::GenericList.id())
}

/// Internal field name for a property, with the lookup suffix removed
pub fn resolve_field_name(property: &PropertyDescriptor) -> String {
    resolve_field_names(property).internal
}

pub fn resolve_field_names(property: &PropertyDescriptor) -> FieldNames {
    let mut internal = property
        .annotations
        .internal_name
        .clone()
        .unwrap_or_else(|| property.name.clone());
    let mut display = resolve_display_name(property);

    if is_lookup(property) {
        let suffix = lookup_suffix(property.shape.is_array());
        internal = strip_suffix(&internal, suffix).to_string();
        display = strip_suffix(&display, suffix).to_string();
    }

    FieldNames { internal, display }
}

fn lookup_suffix(is_array: bool) -> &'static str {
    if is_array { SUFFIX_IDS } else { SUFFIX_ID }
}

/// Remove `suffix` once when it is a true trailing match.
///
/// A name consisting only of the suffix is left alone so no field ends up
/// with an empty name.
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    match name.strip_suffix(suffix) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
