//! Connection context and model operations.

use crate::builder::select::{SelectBuilder, Selection};
use crate::config::ConnectionOptions;
use crate::patch::Patch;
use serde_json::Value;
use std::sync::Arc;
use surql_core::connection::{Connection, LiveHandle, Notification, Rows};
use surql_core::error::{Result, SurqlError};
use surql_core::helpers::{self, UpdateMode};
use surql_core::migrate::{self, TableInfo};
use surql_core::pipeline::Chain;
use surql_core::resolve::Scope;
use surql_core::schema::Registry;
use surql_core::sql::SQL;
use surql_core::surql_trace_query;
use surql_core::template::CompiledStatement;
use surql_core::traits::Model;
use surql_core::value::{RecordId, SurrealValue};
use surql_types::Strategy;

/// Typed operations over a connected SurrealDB client.
///
/// The connection is stored behind an [`Arc`], making `Surreal` cheaply
/// cloneable for sharing across tasks.
#[derive(Debug)]
pub struct Surreal<C> {
    conn: Arc<C>,
}

impl<C> Clone for Surreal<C> {
    #[inline]
    fn clone(&self) -> Self {
        Surreal {
            conn: Arc::clone(&self.conn),
        }
    }
}

impl<C: Connection> Surreal<C> {
    /// Wrap an already connected client
    #[inline]
    pub fn new(conn: C) -> Self {
        Self {
            conn: Arc::new(conn),
        }
    }

    /// Validate `options` and let `connector` open the transport they select.
    ///
    /// ```no_run
    /// # use surql::{ConnectionOptions, Connection, Surreal, Strategy};
    /// # async fn open<C: Connection>(url: &str, strategy: Strategy) -> surql::Result<C> { todo!() }
    /// # async fn run<C: Connection>() -> surql::Result<()> {
    /// let options = ConnectionOptions::new("http://localhost:8000").websocket(false);
    /// let db = Surreal::connect(options, async |options, strategy| {
    ///     open::<C>(&options.url, strategy).await
    /// })
    /// .await?;
    /// assert_eq!(db.strategy(), Strategy::Http);
    /// # Ok(()) }
    /// ```
    pub async fn connect<F>(options: ConnectionOptions, connector: F) -> Result<Self>
    where
        F: AsyncFnOnce(&ConnectionOptions, Strategy) -> Result<C>,
    {
        options.validate()?;
        let strategy = options.strategy();
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %options.url, %strategy, "surql.connect");
        let conn = connector(&options, strategy).await?;
        Ok(Self::new(conn))
    }

    #[inline]
    pub fn connection(&self) -> &C {
        &self.conn
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.conn.strategy()
    }

    /// Submit query text as-is; one result per statement.
    pub async fn execute(&self, sql: &str) -> Result<Vec<Value>> {
        surql_trace_query!(sql, 1usize);
        self.conn.query(sql).await
    }

    /// Compile a fragment and return the result of its last statement.
    pub async fn raw(&self, sql: impl Into<CompiledStatement>) -> Result<Rows> {
        let statement = sql.into().to_string();
        Rows::last_of(self.execute(&statement).await?)
    }

    pub fn select<M: Model>(&self, keys: impl Into<Selection>) -> SelectBuilder<'_, C, M> {
        SelectBuilder::new(self, keys.into())
    }

    /// `CREATE <table> CONTENT <json>`
    pub async fn create<M: Model>(&self, content: impl Into<SurrealValue>) -> Result<Rows> {
        let content = content
            .into()
            .into_content()
            .ok_or(SurqlError::EmptyInput("create"))?;
        self.raw(helpers::create(M::meta().table_name(), &content))
            .await
    }

    /// `INSERT INTO <table> <json | json[]>`; an empty list is not sent.
    pub async fn insert<M: Model>(&self, data: impl Into<SurrealValue>) -> Result<Rows> {
        let data = data
            .into()
            .into_content()
            .ok_or(SurqlError::EmptyInput("insert"))?;
        if matches!(&data, Value::Array(items) if items.is_empty()) {
            return Ok(Rows::empty());
        }
        self.raw(helpers::insert(M::meta().table_name(), &data))
            .await
    }

    /// Replace the table's records, or one record, with `data`.
    pub async fn update<M: Model>(
        &self,
        id: Option<&str>,
        data: impl Into<SurrealValue>,
    ) -> Result<Rows> {
        self.write::<M>(id, UpdateMode::Content, data.into()).await
    }

    /// Merge `data` into the table's records, or one record.
    pub async fn merge<M: Model>(
        &self,
        id: Option<&str>,
        data: impl Into<SurrealValue>,
    ) -> Result<Rows> {
        self.write::<M>(id, UpdateMode::Merge, data.into()).await
    }

    /// Apply JSON patch operations. WebSocket only.
    pub async fn patch<M: Model>(&self, id: Option<&str>, ops: Vec<Patch>) -> Result<Rows> {
        let strategy = self.strategy();
        if !strategy.supports_patch() {
            return Err(SurqlError::UnsupportedUnderStrategy {
                operation: "Patch",
                strategy,
            });
        }
        let ops = serde_json::to_value(&ops)?;
        let target = helpers::target(M::meta().table_name(), id);
        self.raw(helpers::update(target, UpdateMode::Patch, &ops))
            .await
    }

    async fn write<M: Model>(
        &self,
        id: Option<&str>,
        mode: UpdateMode,
        data: SurrealValue,
    ) -> Result<Rows> {
        let Some(data) = data.into_content() else {
            return Ok(Rows::empty());
        };
        let target = helpers::target(M::meta().table_name(), id);
        self.raw(helpers::update(target, mode, &data)).await
    }

    /// `DELETE <table | table:id>`
    pub async fn delete<M: Model>(&self, id: Option<&str>) -> Result<Rows> {
        self.raw(helpers::delete(helpers::target(M::meta().table_name(), id)))
            .await
    }

    /// `RELATE <from:id>-><via[:id]>-><to:id>`
    pub async fn relate<In: Model, Via: Model, Out: Model>(
        &self,
        from_id: &str,
        via_id: Option<&str>,
        to_id: &str,
    ) -> Result<Rows> {
        let registry = Registry::global();
        let from = RecordId::new(registry.meta::<In>().table_name(), from_id);
        let to = RecordId::new(registry.meta::<Out>().table_name(), to_id);
        let via = registry.meta::<Via>();
        self.raw(helpers::relate(&from, via.table_name(), via_id, &to))
            .await
    }

    /// `INFO FOR TABLE <table>`
    pub async fn info<M: Model>(&self) -> Result<TableInfo> {
        let rows = self
            .raw(helpers::info_for_table(M::meta().table_name()))
            .await?;
        Ok(rows.first()?.unwrap_or_default())
    }

    /// Define the model's indexes that the table does not have yet.
    ///
    /// Returns the statements that were sent; nothing is sent when the
    /// catalog already has every index.
    pub async fn migrate<M: Model>(&self) -> Result<Vec<String>> {
        let meta = M::meta();
        let info = self.info::<M>().await?;
        let statements: Vec<String> = migrate::plan(&meta, &info)
            .iter()
            .map(SQL::sql)
            .collect();
        if statements.is_empty() {
            return Ok(statements);
        }

        let text = statements
            .iter()
            .map(|statement| format!("{statement};"))
            .collect::<Vec<_>>()
            .join("\n");
        self.execute(&text).await?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            table = meta.table_name(),
            indexes = statements.len(),
            "surql.migrate"
        );
        Ok(statements)
    }

    /// Subscribe to changes on the model's table. WebSocket only.
    pub async fn live<M, F>(&self, callback: F, diff: bool) -> Result<LiveHandle>
    where
        M: Model,
        F: Fn(Notification) + Send + Sync + 'static,
    {
        let strategy = self.strategy();
        if !strategy.supports_live() {
            return Err(SurqlError::UnsupportedUnderStrategy {
                operation: "Live",
                strategy,
            });
        }
        self.conn
            .live(M::meta().table_name(), diff, Box::new(callback))
            .await
    }

    /// A single statement written against `M`'s fields.
    pub fn query<'a, M, F>(&self, builder: F) -> Result<ModelQuery<'_, C>>
    where
        M: Model,
        F: FnOnce(&Scope<M>) -> Result<SQL<'a>>,
    {
        let statement = builder(&Scope::<M>::new())?.compile();
        Ok(ModelQuery { db: self, statement })
    }

    /// Start a chain with a statement written against `M`.
    pub fn pipe<'a, M, F>(&self, builder: F) -> Result<Pipe<'_, C>>
    where
        M: Model,
        F: FnOnce(&Scope<M>) -> Result<SQL<'a>>,
    {
        Ok(Pipe {
            db: self,
            chain: Chain::begin::<M, F>(builder)?,
        })
    }
}

/// A compiled model-scoped statement ready to run.
#[derive(Debug)]
pub struct ModelQuery<'s, C> {
    db: &'s Surreal<C>,
    statement: CompiledStatement,
}

impl<C: Connection> ModelQuery<'_, C> {
    pub fn statement(&self) -> &CompiledStatement {
        &self.statement
    }

    pub async fn exec(self) -> Result<Rows> {
        self.db.raw(self.statement).await
    }
}

/// A [`Chain`] bound to a connection context.
#[derive(Debug)]
pub struct Pipe<'s, C> {
    db: &'s Surreal<C>,
    chain: Chain,
}

impl<'s, C: Connection> Pipe<'s, C> {
    /// Append a statement written against `M`.
    pub fn pipe<'a, M, F>(self, builder: F) -> Result<Self>
    where
        M: Model,
        F: FnOnce(&Scope<M>) -> Result<SQL<'a>>,
    {
        Ok(Self {
            db: self.db,
            chain: self.chain.next::<M, F>(builder)?,
        })
    }

    #[must_use]
    pub fn push(self, statement: impl Into<CompiledStatement>) -> Self {
        Self {
            db: self.db,
            chain: self.chain.push(statement),
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Submit every statement at once; only the last result is returned.
    pub async fn exec(self) -> Result<Rows> {
        self.chain.exec(self.db.connection()).await
    }
}
