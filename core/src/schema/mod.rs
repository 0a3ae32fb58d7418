//! Model metadata: table names, field descriptors, indexes and relations.
//!
//! A model declares itself once through [`Model::describe`]; the
//! [`Registry`] builds the resulting [`ModelMeta`] lazily on first use and
//! keeps it for the lifetime of the process.

mod field;
mod index;
mod registry;
mod relation;

pub use field::*;
pub use index::*;
pub use registry::*;
pub use relation::*;

use crate::traits::Model;
use compact_str::CompactString;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use surql_types::ScalarType;

/// Identity token for a model type.
///
/// Carries the model's declaration function so a referenced model (a
/// relation's edge or target) can be registered on demand.
#[derive(Clone, Copy)]
pub struct ModelRef {
    id: TypeId,
    type_name: &'static str,
    describe: fn(&mut TableBuilder),
}

impl ModelRef {
    pub fn of<M: Model>() -> Self {
        Self {
            id: TypeId::of::<M>(),
            type_name: std::any::type_name::<M>(),
            describe: M::describe,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Table name used when none is declared: the type's own identifier.
    pub fn default_table_name(&self) -> &'static str {
        let path = self.type_name.split('<').next().unwrap_or(self.type_name);
        path.rsplit("::").next().unwrap_or(path)
    }

    pub(crate) fn build(&self) -> ModelMeta {
        let mut builder = TableBuilder::new(self.default_table_name());
        (self.describe)(&mut builder);
        builder.finish()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef").field(&self.type_name).finish()
    }
}

/// Table-level options for explicit registration.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    pub name: Option<CompactString>,
    pub index: Option<IndexSpec>,
}

impl TableOptions {
    pub fn named(name: impl Into<CompactString>) -> Self {
        Self {
            name: Some(name.into()),
            index: None,
        }
    }

    #[must_use]
    pub fn index(mut self, index: IndexSpec) -> Self {
        self.index = Some(index);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableMeta {
    pub name: CompactString,
    pub index: Option<IndexSpec>,
}

/// Everything known about one model.
#[derive(Debug, Clone)]
pub struct ModelMeta {
    table: TableMeta,
    fields: Vec<FieldDescriptor>,
    identity: FieldDescriptor,
}

impl ModelMeta {
    pub fn new(table_name: impl Into<CompactString>) -> Self {
        Self {
            table: TableMeta {
                name: table_name.into(),
                index: None,
            },
            fields: Vec::new(),
            identity: FieldDescriptor::id("id"),
        }
    }

    pub fn table(&self) -> &TableMeta {
        &self.table
    }

    pub fn table_name(&self) -> &str {
        &self.table.name
    }

    pub fn identity(&self) -> &FieldDescriptor {
        &self.identity
    }

    /// Declared fields followed by the identity field, which appears exactly once.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| f.name != self.identity.name)
            .chain(std::iter::once(&self.identity))
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        if self.identity.name == name {
            return Some(&self.identity);
        }
        self.fields.iter().find(|f| f.name == name)
    }

    pub(crate) fn set_table(&mut self, options: TableOptions) {
        if let Some(name) = options.name {
            self.table.name = name;
        }
        if options.index.is_some() {
            self.table.index = options.index;
        }
    }

    /// Insert or replace a field. Returns `true` when an earlier declaration was replaced.
    pub(crate) fn set_field(&mut self, field: FieldDescriptor) -> bool {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => {
                *existing = field;
                true
            }
            None => {
                self.fields.push(field);
                false
            }
        }
    }

    pub(crate) fn set_identity(&mut self, property: impl Into<CompactString>) {
        let mut identity = FieldDescriptor::id(property);
        identity.index = self.identity.index.take();
        self.identity = identity;
    }
}

/// Declaration surface handed to [`Model::describe`].
///
/// ```
/// use surql_core::schema::{FieldDescriptor, FieldIndex, IndexSpec, TableBuilder};
/// use surql_types::ScalarType;
///
/// let mut table = TableBuilder::new("Account");
/// table
///     .name("account")
///     .index(IndexSpec::new(["email", "tenant"]).unique())
///     .scalar("email", ScalarType::String)
///     .field(FieldDescriptor::scalar("tenant", ScalarType::String).with_index(FieldIndex::new("tenant_idx")));
/// let meta = table.finish();
/// assert_eq!(meta.table_name(), "account");
/// let names: Vec<_> = meta.fields().map(|f| f.name()).collect();
/// assert_eq!(names, ["email", "tenant", "id"]);
/// ```
#[derive(Debug)]
pub struct TableBuilder {
    meta: ModelMeta,
}

impl TableBuilder {
    pub fn new(default_name: impl Into<CompactString>) -> Self {
        Self {
            meta: ModelMeta::new(default_name),
        }
    }

    pub fn name(&mut self, name: impl Into<CompactString>) -> &mut Self {
        self.meta.table.name = name.into();
        self
    }

    pub fn index(&mut self, index: IndexSpec) -> &mut Self {
        self.meta.table.index = Some(index);
        self
    }

    /// Name the primary-key property (defaults to `id`)
    pub fn identity(&mut self, property: impl Into<CompactString>) -> &mut Self {
        self.meta.set_identity(property);
        self
    }

    pub fn field(&mut self, field: FieldDescriptor) -> &mut Self {
        let name = field.name.clone();
        if self.meta.set_field(field) {
            warn_replaced(self.meta.table_name(), &name);
        }
        self
    }

    pub fn scalar(&mut self, name: impl Into<CompactString>, ty: ScalarType) -> &mut Self {
        self.field(FieldDescriptor::scalar(name, ty))
    }

    pub fn relation(&mut self, name: impl Into<CompactString>, params: RelationParams) -> &mut Self {
        self.field(FieldDescriptor::relation(name, params))
    }

    pub fn record(&mut self, name: impl Into<CompactString>, model: ModelRef) -> &mut Self {
        self.field(FieldDescriptor::record(name, model))
    }

    pub fn finish(self) -> ModelMeta {
        self.meta
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn warn_replaced(table: &str, field: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(table, field, "surql.registry: field declared twice, keeping the last declaration");
}
