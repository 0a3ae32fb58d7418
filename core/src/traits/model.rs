use crate::schema::{ModelMeta, Registry, TableBuilder};
use crate::value::{RecordId, SurrealValue};
use std::sync::Arc;

/// A type mapped to one SurrealDB table.
///
/// ```
/// use surql_core::Model;
/// use surql_core::schema::{ModelRef, RelationParams, TableBuilder};
/// use surql_types::{Direction, ScalarType};
///
/// struct User {
///     id: String,
/// }
///
/// struct Friends;
///
/// impl Model for User {
///     fn describe(table: &mut TableBuilder) {
///         table
///             .name("user")
///             .scalar("name", ScalarType::String)
///             .relation(
///                 "friends",
///                 RelationParams::new(Direction::Out, ModelRef::of::<Friends>())
///                     .to(Direction::Out, ModelRef::of::<User>()),
///             );
///     }
///
///     fn id(&self) -> &str {
///         &self.id
///     }
/// }
///
/// impl Model for Friends {
///     fn describe(table: &mut TableBuilder) {
///         table.name("friends");
///     }
///
///     fn id(&self) -> &str {
///         ""
///     }
/// }
///
/// let henry = User { id: "henry".into() };
/// assert_eq!(henry.record_id().to_string(), "user:henry");
/// ```
pub trait Model: Sized + 'static {
    /// Declare the table name, fields, indexes and relations.
    fn describe(table: &mut TableBuilder);

    /// Key of this record, with or without the `table:` prefix.
    fn id(&self) -> &str;

    fn meta() -> Arc<ModelMeta> {
        Registry::global().meta::<Self>()
    }

    fn record_id(&self) -> RecordId {
        RecordId::new(Self::meta().table_name(), self.id())
    }
}

impl<M: Model> From<&M> for SurrealValue {
    fn from(model: &M) -> Self {
        SurrealValue::Record(model.record_id())
    }
}
