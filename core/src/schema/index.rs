//! Index declarations and their `DEFINE INDEX` statements.

use crate::sql::{SQL, Token};
use compact_str::{CompactString, format_compact};

/// Composite index declared on the table.
///
/// Named `<first column>_<last column>_<suffix>`, with `idx` as the default
/// suffix.
///
/// ```
/// use surql_core::schema::IndexSpec;
///
/// let index = IndexSpec::new(["email", "tenant"]).unique();
/// assert_eq!(index.name(), "email_tenant_idx");
/// assert_eq!(
///     index.define("user").sql(),
///     "DEFINE INDEX email_tenant_idx ON TABLE user COLUMNS email, tenant UNIQUE"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub columns: Vec<CompactString>,
    pub suffix: Option<CompactString>,
    pub unique: bool,
    pub search: bool,
}

impl IndexSpec {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            suffix: None,
            unique: false,
            search: false,
        }
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<CompactString>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn search(mut self) -> Self {
        self.search = true;
        self
    }

    /// An index over no columns cannot be defined.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn name(&self) -> CompactString {
        let first = self.columns.first().map(CompactString::as_str).unwrap_or_default();
        let last = self.columns.last().map(CompactString::as_str).unwrap_or_default();
        let suffix = self.suffix.as_deref().unwrap_or("idx");
        format_compact!("{first}_{last}_{suffix}")
    }

    pub fn define(&self, table: &str) -> SQL<'static> {
        define_index(
            &self.name(),
            table,
            self.columns.iter().map(CompactString::as_str),
            self.unique,
            self.search,
        )
    }
}

/// Index declared on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIndex {
    pub name: CompactString,
    pub unique: bool,
    pub search: bool,
}

impl FieldIndex {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            unique: false,
            search: false,
        }
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn search(mut self) -> Self {
        self.search = true;
        self
    }

    pub fn define(&self, table: &str, field: &str) -> SQL<'static> {
        define_index(&self.name, table, [field], self.unique, self.search)
    }
}

/// `DEFINE INDEX <name> ON TABLE <table> COLUMNS <cols> [UNIQUE] [SEARCH ANALYZER ascii BM25 HIGHLIGHTS]`
pub fn define_index<'c>(
    name: &str,
    table: &str,
    columns: impl IntoIterator<Item = &'c str>,
    unique: bool,
    search: bool,
) -> SQL<'static> {
    let columns = SQL::join(
        columns.into_iter().map(|c| SQL::ident(c.to_owned())),
        Token::COMMA,
    );
    let mut sql = SQL::token(Token::DEFINE)
        .push(Token::INDEX)
        .append(SQL::ident(name.to_owned()))
        .push(Token::ON)
        .push(Token::TABLE)
        .append(SQL::ident(table.to_owned()))
        .push(Token::COLUMNS)
        .append(columns);
    if unique {
        sql.push_mut(Token::UNIQUE);
    }
    if search {
        sql = sql
            .push(Token::SEARCH)
            .push(Token::ANALYZER)
            .append(SQL::raw("ascii"))
            .push(Token::BM25)
            .push(Token::HIGHLIGHTS);
    }
    sql
}
