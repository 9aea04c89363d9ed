//! Mapping between typed entity descriptors and SharePoint list fields

pub mod classify;
pub mod convert;
pub mod error;
pub mod field_type;
pub mod list_template;
pub mod lookup;
pub mod naming;
pub mod registry;
pub mod report;
pub mod schema;

pub use classify::{classify_field_type, is_lookup};
pub use convert::{
    Conversion, LinkedRecord, LocalValue, LookupTarget, RemoteValue, Scalar, to_local_value,
    to_remote_value,
};
pub use error::{MapperError, MapperResult};
pub use field_type::{FieldKind, FieldType};
pub use list_template::ListTemplateType;
pub use lookup::LookupValue;
pub use naming::{
    FieldNames, resolve_description, resolve_display_name, resolve_entity_name,
    resolve_field_name, resolve_field_names, resolve_list_template,
};
pub use registry::{EntityMapper, EntityValues, FieldMapping, ItemValues};
pub use report::{LogReporter, RecordingReporter, Reporter};
pub use schema::{
    EntityAnnotations, EntitySchema, EnumType, LinkedShape, PrimitiveKind, PropertyAnnotations,
    PropertyDescriptor, TypeShape,
};
