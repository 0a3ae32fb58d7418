//! Multi-statement chains.
//!
//! Statements compiled against different models are appended in call order,
//! each terminated by `;`, and submitted together in one request. Only the
//! last statement's result is returned.

use crate::connection::{Connection, Rows};
use crate::error::{Result, SurqlError};
use crate::resolve::Scope;
use crate::sql::SQL;
use crate::surql_trace_query;
use crate::template::CompiledStatement;
use crate::traits::Model;
use std::fmt::{self, Display, Write};

/// Ordered statements executed in one batch.
///
/// ```
/// use surql_core::pipeline::Chain;
/// use surql_core::{bind, ql};
///
/// let chain = Chain::new()
///     .push(ql!("LET $a = ", 1, ""))
///     .push(ql!("RETURN ", bind("b", 2), " + $a"));
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.text(), "LET $a = 1;LET $b = 2;\nRETURN $b + $a;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain {
    text: String,
    statements: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a chain with a statement built against `M`
    pub fn begin<'a, M, F>(builder: F) -> Result<Self>
    where
        M: Model,
        F: FnOnce(&Scope<M>) -> Result<SQL<'a>>,
    {
        Self::new().next(builder)
    }

    /// Append a statement built against `M`
    pub fn next<'a, M, F>(self, builder: F) -> Result<Self>
    where
        M: Model,
        F: FnOnce(&Scope<M>) -> Result<SQL<'a>>,
    {
        let scope = Scope::<M>::new();
        let statement = builder(&scope)?.compile();
        Ok(self.push(statement))
    }

    /// Append an already built statement
    #[must_use]
    pub fn push(mut self, statement: impl Into<CompiledStatement>) -> Self {
        let statement = statement.into();
        let _ = write!(self.text, "{statement};");
        self.statements += 1;
        self
    }

    /// Submitted text: every statement followed by `;`
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements == 0
    }

    /// Submit every statement in one request and return the last result.
    pub async fn exec<C: Connection>(&self, conn: &C) -> Result<Rows> {
        if self.is_empty() {
            return Err(SurqlError::EmptyChain);
        }
        surql_trace_query!(&self.text, self.statements);
        let results = conn.query(&self.text).await?;
        Rows::last_of(results)
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
