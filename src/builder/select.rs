//! `SELECT` builder bound to a connection context.

use crate::surreal::Surreal;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use surql_core::connection::{Connection, Rows};
use surql_core::error::{Result, SurqlError};
use surql_core::helpers;
use surql_core::resolve::Scope;
use surql_core::sql::SQL;
use surql_core::template::CompiledStatement;
use surql_core::traits::Model;

/// Fields requested by a select: `"*"` or a list of field references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Fields(Vec<String>),
}

impl Selection {
    fn resolve<M: Model>(&self, scope: &Scope<M>) -> Result<SQL<'static>> {
        match self {
            Selection::All => Ok(scope.all()),
            Selection::Fields(fields) => scope.fields(fields),
        }
    }

    /// Number of fields the selection resolves to, with `*` expanded.
    fn count<M: Model>(&self, scope: &Scope<M>) -> usize {
        let all = scope.resolver().meta().fields().count();
        match self {
            Selection::All => all,
            Selection::Fields(fields) => fields
                .iter()
                .map(|field| if field == "*" { all } else { 1 })
                .sum(),
        }
    }

    fn is_wildcard(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Fields(fields) => fields.iter().any(|field| field == "*"),
        }
    }
}

impl From<&str> for Selection {
    fn from(key: &str) -> Self {
        if key == "*" {
            Selection::All
        } else {
            Selection::Fields(vec![key.to_owned()])
        }
    }
}

impl From<Vec<String>> for Selection {
    fn from(keys: Vec<String>) -> Self {
        Selection::Fields(keys)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(keys: Vec<&str>) -> Self {
        Selection::Fields(keys.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Selection {
    fn from(keys: &[&str]) -> Self {
        Selection::Fields(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(keys: [&str; N]) -> Self {
        Selection::Fields(keys.iter().map(|k| (*k).to_owned()).collect())
    }
}

/// `SELECT [VALUE] <fields> FROM <table|table:id> [WHERE ...] [FETCH ...]`
#[derive(Debug)]
pub struct SelectBuilder<'q, C, M> {
    db: &'q Surreal<C>,
    selection: Selection,
    id: Option<String>,
    value: bool,
    condition: Option<SQL<'static>>,
    fetch: Vec<String>,
    model: PhantomData<fn() -> M>,
}

impl<'q, C: Connection, M: Model> SelectBuilder<'q, C, M> {
    pub(crate) fn new(db: &'q Surreal<C>, selection: Selection) -> Self {
        Self {
            db,
            selection,
            id: None,
            value: false,
            condition: None,
            fetch: Vec::new(),
            model: PhantomData,
        }
    }

    /// Select one record; `id` may carry the `table:` prefix.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// `SELECT VALUE`; requires exactly one field
    pub fn value(mut self) -> Self {
        self.value = true;
        self
    }

    pub fn r#where(mut self, condition: SQL<'static>) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn fetch<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fetch.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Statement fragment, before binding hoisting
    pub fn to_sql(&self) -> Result<SQL<'static>> {
        let scope = Scope::<M>::new();
        if self.value {
            let count = self.selection.count(&scope);
            if self.selection.is_wildcard() || count != 1 {
                return Err(SurqlError::InvalidSelection(count));
            }
        }

        let fields = self.selection.resolve(&scope)?;
        let target = helpers::target(scope.table_name(), self.id.as_deref());
        let mut sql = helpers::select(fields, self.value).append(helpers::from(target));
        if let Some(condition) = &self.condition {
            sql.append_mut(helpers::where_clause(condition.clone()));
        }
        if !self.fetch.is_empty() {
            sql.append_mut(helpers::fetch(self.fetch.iter().cloned()));
        }
        Ok(sql)
    }

    pub fn compile(&self) -> Result<CompiledStatement> {
        Ok(self.to_sql()?.compile())
    }

    /// Run the select and return the raw rows
    pub async fn rows(self) -> Result<Rows> {
        let statement = self.compile()?;
        self.db.raw(statement).await
    }

    /// Run the select and decode every row
    pub async fn all<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        self.rows().await?.decode()
    }

    /// Run the select and decode the first row
    pub async fn first<T: DeserializeOwned>(self) -> Result<Option<T>> {
        self.rows().await?.first()
    }
}
