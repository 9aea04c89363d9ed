use anyhow::Result;
use sp_field_mapper::mapper::{
    EntityMapper, EntitySchema, FieldType, ItemValues, LinkedRecord, LocalValue, LookupValue,
    RecordingReporter, RemoteValue, Scalar,
};
use std::path::PathBuf;
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn employee_mapper(reporter: Arc<RecordingReporter>) -> Result<EntityMapper> {
    let schema = EntitySchema::load(&fixture("employee.toml"))?;
    Ok(EntityMapper::register_with_reporter(&schema, reporter)?)
}

#[test]
fn test_employee_schema_fields() -> Result<()> {
    let reporter = Arc::new(RecordingReporter::new());
    let mapper = employee_mapper(reporter.clone())?;

    assert_eq!(mapper.list_name(), "Employees");
    assert_eq!(mapper.description(), Some("Staff directory"));
    assert_eq!(mapper.list_template(), 100);

    let expected = [
        ("Title", "Title", FieldType::Text),
        ("ManagerId", "Manager", FieldType::Lookup),
        ("Department", "Department", FieldType::Lookup),
        ("ProjectIds", "Project", FieldType::Lookup),
        ("Tags", "Tags", FieldType::Lookup),
        ("Status", "Status", FieldType::Choice),
        ("Salary", "Salary", FieldType::Currency),
        ("Bio", "Biography", FieldType::Note),
        ("HiredOn", "HiredOn", FieldType::DateTime),
        ("Badge", "Badge", FieldType::Invalid),
    ];

    for (property, internal_name, field_type) in expected {
        let field = mapper.field(property).unwrap();
        assert_eq!(field.internal_name(), internal_name, "{}", property);
        assert_eq!(field.field_type, field_type, "{}", property);
    }

    assert_eq!(mapper.field("ManagerId").unwrap().names.display, "Manager");
    assert_eq!(reporter.warnings().len(), 1);
    Ok(())
}

#[test]
fn test_employee_item_conversion() -> Result<()> {
    let mapper = employee_mapper(Arc::new(RecordingReporter::new()))?;
    let item: ItemValues =
        serde_json::from_str(&std::fs::read_to_string(fixture("employee_item.json"))?)?;

    let entity = mapper.item_to_entity(item)?;

    assert_eq!(entity["Title"], LocalValue::Scalar(Scalar::Text("Jane Doe".to_string())));
    assert_eq!(entity["ManagerId"], LocalValue::Scalar(Scalar::Int(42)));
    assert_eq!(
        entity["Department"],
        LocalValue::Pair {
            id: 3,
            label: Some("Engineering".to_string())
        }
    );
    assert_eq!(entity["ProjectIds"], LocalValue::Ids(vec![10, 11]));
    assert_eq!(
        entity["Tags"],
        LocalValue::LinkedList(vec![
            LinkedRecord { id: 1, title: Some("A".to_string()) },
            LinkedRecord { id: 2, title: Some("B".to_string()) },
        ])
    );
    assert_eq!(entity["Status"], LocalValue::Enum("OnLeave".to_string()));
    assert_eq!(entity["Salary"], LocalValue::Scalar(Scalar::Float(5200.5)));
    let LocalValue::Scalar(hired_on) = &entity["HiredOn"] else {
        panic!("expected a plain value");
    };
    assert_eq!(hired_on, &Scalar::Text("2019-04-01T08:00:00Z".to_string()));
    assert!(hired_on.as_datetime().is_some());
    assert!(!entity.contains_key("Badge"));

    let item = mapper.entity_to_item(&entity)?;
    assert_eq!(item["Manager"], RemoteValue::Scalar(Scalar::Int(42)));
    assert_eq!(item["Department"], RemoteValue::Lookup(LookupValue::from_id(3)));
    assert_eq!(
        item["Project"],
        RemoteValue::Scalar(Scalar::List(vec![Scalar::Int(10), Scalar::Int(11)]))
    );
    assert_eq!(item["Tags"], RemoteValue::Lookups(LookupValue::from_ids([1, 2])));
    assert_eq!(item["Status"], RemoteValue::text("OnLeave"));
    assert_eq!(item["Biography"], RemoteValue::text("Joined in 2019."));
    assert_eq!(item["HiredOn"], RemoteValue::text("2019-04-01T08:00:00Z"));
    Ok(())
}

#[test]
fn test_project_json_schema() -> Result<()> {
    let schema = EntitySchema::load(&fixture("project.json"))?;
    let mapper = EntityMapper::register_with_reporter(&schema, Arc::new(RecordingReporter::new()))?;

    assert_eq!(mapper.list_name(), "Project");
    assert_eq!(mapper.list_template(), 107);
    assert_eq!(mapper.field("Members").unwrap().field_type, FieldType::Lookup);
    assert_eq!(mapper.field("Owner").unwrap().field_type, FieldType::Lookup);
    assert_eq!(mapper.field("Done").unwrap().field_type, FieldType::Boolean);
    assert_eq!(mapper.field("Website").unwrap().field_type, FieldType::Url);

    let owner = mapper.to_local_value(
        "Owner",
        RemoteValue::Lookup(LookupValue::new(8, Some("Kim".to_string()))),
    )?;
    assert_eq!(
        owner,
        LocalValue::Linked(LinkedRecord {
            id: 8,
            title: Some("Kim".to_string())
        })
    );
    assert_eq!(
        mapper.to_remote_value("Owner", &owner)?,
        RemoteValue::Lookup(LookupValue::from_id(8))
    );
    Ok(())
}

#[test]
fn test_local_values_survive_json() -> Result<()> {
    let mapper = employee_mapper(Arc::new(RecordingReporter::new()))?;
    let item: ItemValues =
        serde_json::from_str(&std::fs::read_to_string(fixture("employee_item.json"))?)?;
    let entity = mapper.item_to_entity(item)?;

    let json = serde_json::to_string(&entity)?;
    let reparsed: sp_field_mapper::mapper::EntityValues = serde_json::from_str(&json)?;
    assert_eq!(reparsed, entity);
    Ok(())
}
