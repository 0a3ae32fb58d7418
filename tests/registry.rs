use common::{Friends, Todo, User};
use surql::prelude::*;
use surql::schema::{FieldKind, Registry, TableOptions};

mod common;

#[test]
fn identity_comes_last_exactly_once() {
    let names: Vec<String> = User::meta().fields().map(|f| f.name().to_owned()).collect();
    assert_eq!(
        names,
        ["first", "last", "email", "address", "friends", "fans", "id"]
    );
    assert_eq!(names.iter().filter(|n| *n == "id").count(), 1);
}

#[test]
fn declared_metadata() {
    let meta = User::meta();
    assert_eq!(meta.table_name(), "user");
    assert_eq!(meta.table().index.as_ref().map(IndexSpec::name).as_deref(), Some("first_last_idx"));

    let email = meta.field("email").unwrap();
    assert_eq!(email.index.as_ref().map(|i| i.name.as_str()), Some("email_idx"));

    let address = meta.field("address").unwrap();
    assert_eq!(address.kind, FieldKind::Object);
    let shape = address.shape.as_ref().unwrap();
    assert!(shape.get("city").unwrap().required);
    assert!(!shape.get("zip").unwrap().required);

    let friends = meta.field("friends").unwrap();
    assert!(friends.is_relation());
    assert!(!email.is_relation());
    let params = friends.relation_params().unwrap();
    assert_eq!(params.via, ModelRef::of::<Friends>());
    assert_eq!(params.dir_via, Direction::Out);

    assert!(meta.field("nickname").is_none());
}

#[test]
fn default_table_name_and_record_fields() {
    let meta = Todo::meta();
    assert_eq!(meta.table_name(), "Todo");
    assert_eq!(
        meta.field("owner").map(|f| &f.kind),
        Some(&FieldKind::Record(ModelRef::of::<User>()))
    );
    assert_eq!(User::new("henry").record_id().to_string(), "user:henry");
}

#[test]
fn explicit_registration_wins_over_declaration() {
    let registry = Registry::new();
    let todo = ModelRef::of::<Todo>();
    registry.register_table(todo, TableOptions::named("task"));
    registry.register_field(todo, FieldDescriptor::scalar("title", ScalarType::String));
    registry.register_field(todo, FieldDescriptor::scalar("title", ScalarType::Any));

    let fields = registry.fields(todo).unwrap();
    let names: Vec<&str> = fields.iter().map(FieldDescriptor::name).collect();
    assert_eq!(names, ["title", "id"]);
    assert_eq!(fields[0].kind, FieldKind::Scalar(ScalarType::Any));
    assert_eq!(registry.table(todo).unwrap().name, "task");

    // the declaration is not consulted once an entry exists
    assert!(registry.field(todo, "done").is_none());
    assert_eq!(registry.ensure(todo).table_name(), "task");
}
