//! Lookup detection and field-type inference

use super::field_type::{ANNOTATION_PRIORITY, FieldType};
use super::report::Reporter;
use super::schema::{PrimitiveKind, PropertyDescriptor, TypeShape};
use log::debug;

/// Whether the property maps to a SharePoint lookup field.
///
/// True if any of these hold: a lookup-category annotation is present, the
/// declared type is the single-lookup pair, the declared type is the
/// multi-lookup mapping, or the declared type (or array element) is a
/// linked entity shape.
pub fn is_lookup(property: &PropertyDescriptor) -> bool {
    property.annotations.kinds.iter().any(|kind| kind.is_lookup())
        || matches!(property.shape, TypeShape::LookupPair | TypeShape::LookupMap)
        || property.shape.exposes_id()
}

/// Infer the SharePoint field type for a property.
///
/// Unsupported types are reported through `reporter` and come back as
/// [`FieldType::Invalid`]; this never fails.
pub fn classify_field_type(property: &PropertyDescriptor, reporter: &dyn Reporter) -> FieldType {
    if is_lookup(property) {
        return FieldType::Lookup;
    }

    let mut shape = property.shape.unwrap_nullable();
    if let Some(element) = shape.element() {
        shape = element;
    }

    if let Some(field_type) = field_type_from_annotations(property) {
        debug!("{}: field type {} from annotation", property.name, field_type);
        return field_type;
    }

    match shape {
        TypeShape::Enum(_) => FieldType::Choice,
        TypeShape::Primitive { primitive } => match primitive_field_type(*primitive) {
            Some(field_type) => field_type,
            None => {
                reporter.unsupported_type(&property.name, primitive.name());
                FieldType::Invalid
            }
        },
        other => {
            reporter.unsupported_type(&property.name, &other.type_name());
            FieldType::Invalid
        }
    }
}

fn field_type_from_annotations(property: &PropertyDescriptor) -> Option<FieldType> {
    ANNOTATION_PRIORITY.iter().find_map(|category| {
        property
            .annotations
            .kinds
            .iter()
            .find(|kind| kind.category() == *category)
            .map(|kind| kind.associated_field_type())
    })
}

fn primitive_field_type(primitive: PrimitiveKind) -> Option<FieldType> {
    if primitive.is_numeric() {
        return Some(FieldType::Number);
    }
    match primitive {
        PrimitiveKind::Boolean => Some(FieldType::Boolean),
        PrimitiveKind::String | PrimitiveKind::Char => Some(FieldType::Text),
        PrimitiveKind::DateTime => Some(FieldType::DateTime),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::field_type::FieldKind;
    use crate::mapper::report::RecordingReporter;

    fn classify(property: &PropertyDescriptor) -> FieldType {
        classify_field_type(property, &RecordingReporter::new())
    }

    #[test]
    fn test_lookup_detection() {
        let annotated = PropertyDescriptor::new("ManagerId", TypeShape::primitive(PrimitiveKind::Int32))
            .with_kind(FieldKind::Lookup);
        let multi_annotated = PropertyDescriptor::new(
            "MemberIds",
            TypeShape::array(TypeShape::primitive(PrimitiveKind::Int32)),
        )
        .with_kind(FieldKind::MultiLookup);
        let pair = PropertyDescriptor::new("Customer", TypeShape::LookupPair);
        let map = PropertyDescriptor::new("Projects", TypeShape::LookupMap);
        let linked = PropertyDescriptor::new("Owner", TypeShape::linked("Person", true));
        let linked_array = PropertyDescriptor::new("Tags", TypeShape::array(TypeShape::linked("Tag", true)));

        for property in [&annotated, &multi_annotated, &pair, &map, &linked, &linked_array] {
            assert!(is_lookup(property), "{} should be a lookup", property.name);
            assert_eq!(classify(property), FieldType::Lookup);
        }

        let plain = PropertyDescriptor::new("ValidId", TypeShape::primitive(PrimitiveKind::Int32));
        assert!(!is_lookup(&plain));
    }

    #[test]
    fn test_nullable_pair_is_not_a_lookup() {
        let property = PropertyDescriptor::new("Customer", TypeShape::nullable(TypeShape::LookupPair));
        assert!(!is_lookup(&property));
    }

    #[test]
    fn test_primitive_classification() {
        let cases = [
            (PrimitiveKind::Byte, FieldType::Number),
            (PrimitiveKind::UInt64, FieldType::Number),
            (PrimitiveKind::Int32, FieldType::Number),
            (PrimitiveKind::Decimal, FieldType::Number),
            (PrimitiveKind::Single, FieldType::Number),
            (PrimitiveKind::Boolean, FieldType::Boolean),
            (PrimitiveKind::String, FieldType::Text),
            (PrimitiveKind::Char, FieldType::Text),
            (PrimitiveKind::DateTime, FieldType::DateTime),
        ];

        for (primitive, expected) in cases {
            let property = PropertyDescriptor::new("Value", TypeShape::primitive(primitive));
            assert_eq!(classify(&property), expected, "{:?}", primitive);
        }
    }

    #[test]
    fn test_unwraps_nullable_then_array() {
        let nullable = PropertyDescriptor::new(
            "Due",
            TypeShape::nullable(TypeShape::primitive(PrimitiveKind::DateTime)),
        );
        assert_eq!(classify(&nullable), FieldType::DateTime);

        let array = PropertyDescriptor::new(
            "Labels",
            TypeShape::array(TypeShape::primitive(PrimitiveKind::String)),
        );
        assert_eq!(classify(&array), FieldType::Text);

        let nullable_array = PropertyDescriptor::new(
            "Scores",
            TypeShape::nullable(TypeShape::array(TypeShape::primitive(PrimitiveKind::Double))),
        );
        assert_eq!(classify(&nullable_array), FieldType::Number);
    }

    #[test]
    fn test_annotation_overrides_primitive() {
        let note = PropertyDescriptor::new("Body", TypeShape::primitive(PrimitiveKind::String))
            .with_kind(FieldKind::Note);
        assert_eq!(classify(&note), FieldType::Note);

        let currency = PropertyDescriptor::new("Price", TypeShape::primitive(PrimitiveKind::Decimal))
            .with_kind(FieldKind::Currency);
        assert_eq!(classify(&currency), FieldType::Currency);

        let user = PropertyDescriptor::new("AssignedTo", TypeShape::Complex { name: "Principal".to_string() })
            .with_kind(FieldKind::User);
        assert_eq!(classify(&user), FieldType::User);
    }

    #[test]
    fn test_annotation_priority_is_fixed_order() {
        // Text is checked after Choice regardless of declaration order
        let property = PropertyDescriptor::new("Category", TypeShape::primitive(PrimitiveKind::String))
            .with_kind(FieldKind::Text)
            .with_kind(FieldKind::Choice);
        assert_eq!(classify(&property), FieldType::Choice);
    }

    #[test]
    fn test_enum_is_choice() {
        let property = PropertyDescriptor::new("Status", TypeShape::enumeration("Status", &["Open", "Closed"]));
        assert_eq!(classify(&property), FieldType::Choice);

        let nullable = PropertyDescriptor::new(
            "Priority",
            TypeShape::nullable(TypeShape::enumeration("Priority", &["Low", "High"])),
        );
        assert_eq!(classify(&nullable), FieldType::Choice);
    }

    #[test]
    fn test_unsupported_type_is_invalid_and_reported() {
        let reporter = RecordingReporter::new();
        let property = PropertyDescriptor::new("Location", TypeShape::Complex { name: "GeoPoint".to_string() });

        assert_eq!(classify_field_type(&property, &reporter), FieldType::Invalid);
        assert_eq!(classify_field_type(&property, &reporter), FieldType::Invalid);
        assert_eq!(reporter.warnings().len(), 2);
        assert!(reporter.warnings()[0].contains("GeoPoint"));

        let guid = PropertyDescriptor::new("UniqueId", TypeShape::primitive(PrimitiveKind::Guid));
        assert_eq!(classify_field_type(&guid, &reporter), FieldType::Invalid);
        assert!(reporter.warnings()[2].contains("Guid"));
    }
}
