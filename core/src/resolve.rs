//! Field and relation resolution.
//!
//! Turns a field reference on a model into the fragment that selects it:
//! plain and dotted paths are written verbatim once their head is known to
//! be declared, relation fields expand into a graph traversal aliased back to
//! the field name.

use crate::error::{Result, SurqlError};
use crate::schema::{ModelMeta, ModelRef, Registry, RelationParams, RelationTail};
use crate::sql::{SQL, Token};
use crate::traits::Model;
use crate::value::RecordId;
use serde::Serialize;
use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::Arc;

/// Resolves field references against one model's metadata.
#[derive(Debug, Clone)]
pub struct Resolver<'r> {
    registry: &'r Registry,
    meta: Arc<ModelMeta>,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry, meta: Arc<ModelMeta>) -> Self {
        Self { registry, meta }
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// Resolve one field reference.
    ///
    /// `"*"` expands to every declared field, `friends:abc` splices the key
    /// `abc` into a relation's edge hop.
    pub fn resolve(&self, path: &str) -> Result<SQL<'static>> {
        if path == "*" {
            return Ok(self.resolve_all());
        }

        let (name, key) = match path.split_once(':') {
            Some((name, key)) => (name, Some(key)),
            None => (path, None),
        };
        let head = name.split('.').next().unwrap_or(name);
        let field = self
            .meta
            .field(head)
            .ok_or_else(|| SurqlError::field_not_found(self.meta.table_name(), head))?;

        match field.relation_params() {
            Some(params) if head == name => {
                Ok(SQL::raw(self.traversal(params, key)).alias(field.name.to_string()))
            }
            _ => Ok(SQL::raw(path.to_owned())),
        }
    }

    /// Resolve several references into a comma-separated list.
    pub fn resolve_many<I, S>(&self, paths: I) -> Result<SQL<'static>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolved = paths
            .into_iter()
            .map(|path| self.resolve(path.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(SQL::join(resolved, Token::COMMA))
    }

    /// Every declared field, identity included.
    pub fn resolve_all(&self) -> SQL<'static> {
        SQL::join(
            self.meta.fields().map(|field| match field.relation_params() {
                Some(params) => {
                    SQL::raw(self.traversal(params, None)).alias(field.name.to_string())
                }
                None => SQL::raw(field.name.to_string()),
            }),
            Token::COMMA,
        )
    }

    /// `<dir><edge>[:key]<dir><target>` or `<dir><edge>[:key]<selector>`
    pub fn traversal(&self, params: &RelationParams, key: Option<&str>) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}{}", params.dir_via, self.table_of(params.via));
        if let Some(key) = key {
            let _ = write!(out, ":{key}");
        }
        match &params.tail {
            RelationTail::Target { direction, model } => {
                let _ = write!(out, "{}{}", direction, self.table_of(*model));
            }
            RelationTail::Selector(selector) => out.push_str(selector),
            RelationTail::None => {}
        }
        out
    }

    fn table_of(&self, model: ModelRef) -> String {
        self.registry.ensure(model).table_name().to_owned()
    }
}

/// Field access handed to query builders for model `M`.
///
/// ```
/// use surql_core::resolve::Scope;
/// use surql_core::schema::TableBuilder;
/// use surql_core::{Model, ql};
/// use surql_types::ScalarType;
///
/// struct Todo;
///
/// impl Model for Todo {
///     fn describe(table: &mut TableBuilder) {
///         table.name("todo").scalar("title", ScalarType::String);
///     }
///
///     fn id(&self) -> &str {
///         ""
///     }
/// }
///
/// let f = Scope::<Todo>::new();
/// let sql = ql!("SELECT ", f.field("title")?, " FROM ", f.table(), "");
/// assert_eq!(sql.sql(), "SELECT title FROM todo");
/// assert!(f.field("missing").is_err());
/// # Ok::<(), surql_core::SurqlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scope<M> {
    resolver: Resolver<'static>,
    _model: PhantomData<fn() -> M>,
}

impl<M: Model> Scope<M> {
    pub fn new() -> Self {
        Self::with_registry(Registry::global())
    }

    pub fn with_registry(registry: &'static Registry) -> Self {
        Self {
            resolver: Resolver::new(registry, registry.meta::<M>()),
            _model: PhantomData,
        }
    }

    /// The model's table
    pub fn table(&self) -> SQL<'static> {
        SQL::ident(self.table_name().to_owned())
    }

    pub fn table_name(&self) -> &str {
        self.resolver.meta().table_name()
    }

    /// One field reference; fails with `FieldNotFound` for undeclared fields
    pub fn field(&self, path: &str) -> Result<SQL<'static>> {
        self.resolver.resolve(path)
    }

    /// Several field references, comma-separated
    pub fn fields<I, S>(&self, paths: I) -> Result<SQL<'static>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.resolver.resolve_many(paths)
    }

    /// Every declared field
    pub fn all(&self) -> SQL<'static> {
        self.resolver.resolve_all()
    }

    /// A record of this model: `table:id`
    pub fn record(&self, id: &str) -> SQL<'static> {
        SQL::value(RecordId::new(self.table_name(), id))
    }

    /// A JSON literal
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<SQL<'static>> {
        Ok(SQL::json(&serde_json::to_value(value)?))
    }

    pub fn resolver(&self) -> &Resolver<'static> {
        &self.resolver
    }
}

impl<M: Model> Default for Scope<M> {
    fn default() -> Self {
        Self::new()
    }
}
