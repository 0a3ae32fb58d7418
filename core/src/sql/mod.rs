mod chunk;
mod tokens;

use crate::template::{Binding, CompiledStatement, Hoisted};
use crate::traits::ToSQL;
use crate::value::SurrealValue;
pub use chunk::*;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt::{Display, Write};
pub use tokens::*;

/// SurrealQL fragment builder with flat chunk storage.
///
/// Uses `SmallVec<[SQLChunk; 8]>` for inline storage of typical fragments
/// without heap allocation.
#[derive(Debug, Clone, Default)]
pub struct SQL<'a> {
    pub chunks: SmallVec<[SQLChunk<'a>; 8]>,
}

impl<'a> SQL<'a> {
    // ==================== constructors ====================

    /// Creates an empty SQL fragment
    #[inline]
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates SQL with a single token
    #[inline]
    pub fn token(t: Token) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Token(t)],
        }
    }

    /// Creates SQL with an identifier
    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Ident(name.into())],
        }
    }

    /// Creates SQL with raw text (unquoted)
    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Raw(text.into())],
        }
    }

    /// Creates SQL with a single unsigned integer literal.
    #[inline]
    pub fn number(value: usize) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Number(value)],
        }
    }

    /// Creates SQL with an inline value literal
    #[inline]
    pub fn value(value: impl Into<SurrealValue>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Value(value.into())],
        }
    }

    /// Creates SQL referencing a binding, hoisted on compile
    #[inline]
    pub fn binding(binding: Binding<'a>) -> Self {
        Self {
            chunks: smallvec::smallvec![SQLChunk::Binding(binding)],
        }
    }

    /// Creates SQL holding a JSON document as raw text
    pub fn json(value: &serde_json::Value) -> Self {
        SQL::raw(value.to_string())
    }

    /// Creates SQL for a function call: NAME(args)
    #[inline]
    pub fn func(name: impl Into<Cow<'a, str>>, args: SQL<'a>) -> Self {
        SQL::raw(name)
            .push(Token::LPAREN)
            .append(args)
            .push(Token::RPAREN)
    }

    // ==================== builder methods ====================

    /// Append another SQL fragment (flat extend)
    #[inline]
    pub fn append(mut self, other: impl Into<SQL<'a>>) -> Self {
        let other = other.into();

        if self.chunks.is_empty() {
            return other;
        }
        if other.chunks.is_empty() {
            return self;
        }

        self.chunks.extend(other.chunks);
        self
    }

    #[inline]
    pub fn append_mut(&mut self, other: impl Into<SQL<'a>>) {
        let other = other.into();

        if self.chunks.is_empty() {
            self.chunks = other.chunks;
            return;
        }
        if other.chunks.is_empty() {
            return;
        }

        self.chunks.extend(other.chunks);
    }

    /// Push a single chunk
    #[inline]
    pub fn push(mut self, chunk: impl Into<SQLChunk<'a>>) -> Self {
        self.chunks.push(chunk.into());
        self
    }

    #[inline]
    pub fn push_mut(&mut self, chunk: impl Into<SQLChunk<'a>>) {
        self.chunks.push(chunk.into());
    }

    // ==================== combinators ====================

    /// Joins multiple SQL fragments with a separator
    pub fn join<T>(sqls: T, separator: Token) -> SQL<'a>
    where
        T: IntoIterator,
        T::Item: ToSQL<'a>,
    {
        let mut iter = sqls.into_iter();
        let Some(first) = iter.next() else {
            return SQL::empty();
        };

        let mut result = first.into_sql();
        let (lower, _) = iter.size_hint();
        result.chunks.reserve(lower * 2);

        for item in iter {
            result.chunks.push(SQLChunk::Token(separator));
            result.chunks.extend(item.into_sql().chunks);
        }
        result
    }

    /// Wrap in parentheses: (self)
    #[inline]
    pub fn parens(self) -> Self {
        SQL::token(Token::LPAREN).append(self).push(Token::RPAREN)
    }

    /// Creates an aliased version: self AS name
    pub fn alias(self, name: impl Into<Cow<'a, str>>) -> SQL<'a> {
        self.push(Token::AS).push(SQLChunk::Ident(name.into()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // ==================== output methods ====================

    /// Returns the statement text with bindings referenced but not declared.
    pub fn sql(&self) -> String {
        let mut buf = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        let mut hoisted = Hoisted::default();
        self.write_to(&mut buf, &mut hoisted);
        buf
    }

    /// Renders the statement and collects its `LET` bindings in one pass.
    pub fn compile(&self) -> CompiledStatement {
        let mut text = String::with_capacity(self.chunks.len().saturating_mul(8).max(64));
        let mut hoisted = Hoisted::default();
        self.write_to(&mut text, &mut hoisted);
        CompiledStatement::new(hoisted.into_lines(), text)
    }

    /// Write SQL to a buffer, collecting hoisted bindings.
    pub(crate) fn write_to(&self, buf: &mut impl Write, hoisted: &mut Hoisted) {
        for (i, chunk) in self.chunks.iter().enumerate() {
            chunk.write(buf, hoisted);
            if let Some(next) = self.chunks.get(i + 1)
                && chunk_needs_space(chunk, next)
            {
                let _ = buf.write_char(' ');
            }
        }
    }
}

impl Display for SQL<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql())
    }
}

impl<'a> From<Token> for SQL<'a> {
    #[inline]
    fn from(value: Token) -> Self {
        SQL::token(value)
    }
}

impl<'a> From<SQLChunk<'a>> for SQL<'a> {
    #[inline]
    fn from(value: SQLChunk<'a>) -> Self {
        SQL {
            chunks: smallvec::smallvec![value],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_spacing() {
        let sql = SQL::token(Token::SELECT)
            .push(Token::STAR)
            .push(Token::FROM)
            .append(SQL::ident("user"));
        assert_eq!(sql.sql(), "SELECT * FROM user");
    }

    #[test]
    fn join_and_alias() {
        let fields = SQL::join([SQL::raw("name"), SQL::raw("age")], Token::COMMA);
        assert_eq!(fields.sql(), "name, age");

        let aliased = SQL::func("count", SQL::empty()).alias("total");
        assert_eq!(aliased.sql(), "count() AS total");
    }

    #[test]
    fn function_call_spacing() {
        let sql = SQL::func("string::len", SQL::raw("name"));
        assert_eq!(sql.sql(), "string::len(name)");

        let sql = SQL::token(Token::VALUE).append(SQL::raw("a").parens());
        assert_eq!(sql.sql(), "VALUE (a)");
    }

    #[test]
    fn inline_values() {
        let sql = SQL::raw("name")
            .push(Token::EQ)
            .append(SQL::value("henry"))
            .push(Token::COMMA)
            .append(SQL::number(3));
        assert_eq!(sql.sql(), "name = 'henry', 3");
    }
}
