//! Per-entity mapper built once from a schema

use super::classify::classify_field_type;
use super::convert::{Conversion, LocalValue, RemoteValue};
use super::error::{MapperError, MapperResult};
use super::field_type::FieldType;
use super::naming::{self, FieldNames};
use super::report::{LogReporter, Reporter};
use super::schema::{EntitySchema, PropertyDescriptor};
use log::{debug, info};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Item values keyed by internal field name
pub type ItemValues = BTreeMap<String, RemoteValue>;
/// Entity values keyed by property name
pub type EntityValues = BTreeMap<String, LocalValue>;

/// Everything resolved for one property at registration time
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    pub property: PropertyDescriptor,
    pub names: FieldNames,
    pub field_type: FieldType,
    pub conversion: Conversion,
}

impl FieldMapping {
    fn resolve(property: &PropertyDescriptor, reporter: &dyn Reporter) -> Self {
        Self {
            property: property.clone(),
            names: naming::resolve_field_names(property),
            field_type: classify_field_type(property, reporter),
            conversion: Conversion::for_property(property),
        }
    }

    pub fn internal_name(&self) -> &str {
        &self.names.internal
    }

    pub fn to_local(&self, remote: RemoteValue) -> MapperResult<LocalValue> {
        self.conversion.to_local(&self.property.name, remote)
    }

    pub fn to_remote(&self, local: &LocalValue) -> MapperResult<RemoteValue> {
        self.conversion.to_remote(&self.property.name, local)
    }
}

/// Field mapping for one entity type.
///
/// Immutable after [`EntityMapper::register`]; share it freely between threads.
pub struct EntityMapper {
    list_name: String,
    description: Option<String>,
    list_template: i32,
    fields: Vec<FieldMapping>,
    reporter: Arc<dyn Reporter>,
}

impl EntityMapper {
    pub fn register(schema: &EntitySchema) -> MapperResult<Self> {
        Self::register_with_reporter(schema, Arc::new(LogReporter))
    }

    pub fn register_with_reporter(
        schema: &EntitySchema,
        reporter: Arc<dyn Reporter>,
    ) -> MapperResult<Self> {
        let mut seen = HashSet::new();
        for property in &schema.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(MapperError::DuplicateProperty(property.name.clone()));
            }
        }

        let fields: Vec<FieldMapping> = schema
            .properties
            .iter()
            .map(|property| FieldMapping::resolve(property, reporter.as_ref()))
            .collect();

        for field in &fields {
            debug!(
                "{}.{} -> {} ({})",
                schema.name, field.property.name, field.names.internal, field.field_type
            );
        }

        let list_name = naming::resolve_entity_name(schema);
        info!("Registered entity {} as list '{}' with {} fields", schema.name, list_name, fields.len());

        Ok(Self {
            list_name,
            description: naming::resolve_description(schema),
            list_template: naming::resolve_list_template(schema),
            fields,
            reporter,
        })
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn list_template(&self) -> i32 {
        self.list_template
    }

    pub fn fields(&self) -> &[FieldMapping] {
        &self.fields
    }

    pub fn field(&self, property: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.property.name == property)
    }

    pub fn field_by_internal_name(&self, internal_name: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.names.internal == internal_name)
    }

    /// Classify a descriptor outside the registered schema with this mapper's reporter
    pub fn classify(&self, property: &PropertyDescriptor) -> FieldType {
        classify_field_type(property, self.reporter.as_ref())
    }

    pub fn to_local_value(&self, property: &str, remote: RemoteValue) -> MapperResult<LocalValue> {
        self.require(property)?.to_local(remote)
    }

    pub fn to_remote_value(&self, property: &str, local: &LocalValue) -> MapperResult<RemoteValue> {
        self.require(property)?.to_remote(local)
    }

    /// Convert a whole list item into entity values.
    ///
    /// Fields classified as `Invalid` and fields absent from the item are skipped.
    pub fn item_to_entity(&self, mut item: ItemValues) -> MapperResult<EntityValues> {
        let mut entity = EntityValues::new();
        for field in self.fields.iter().filter(|f| f.field_type.is_valid()) {
            if let Some(remote) = item.remove(field.internal_name()) {
                entity.insert(field.property.name.clone(), field.to_local(remote)?);
            }
        }
        Ok(entity)
    }

    /// Convert entity values into list item values keyed by internal field name
    pub fn entity_to_item(&self, entity: &EntityValues) -> MapperResult<ItemValues> {
        let mut item = ItemValues::new();
        for field in self.fields.iter().filter(|f| f.field_type.is_valid()) {
            if let Some(local) = entity.get(&field.property.name) {
                item.insert(field.names.internal.clone(), field.to_remote(local)?);
            }
        }
        Ok(item)
    }

    fn require(&self, property: &str) -> MapperResult<&FieldMapping> {
        self.field(property)
            .ok_or_else(|| MapperError::UnknownProperty(property.to_string()))
    }
}
