//! Template queries with hoisted `LET` bindings.
//!
//! A template is verbatim text interleaved with interpolated parts. Compiling
//! it walks the parts in order:
//!
//! - a pre-built [`SQL`] fragment is appended as-is,
//! - a [`Binding`] declares `LET $name = <literal>;` ahead of the statement and
//!   writes `$name` in place,
//! - any other value is written inline: strings single-quoted, everything else
//!   as a literal.
//!
//! ```
//! use surql_core::{bind, ql};
//!
//! let stmt = ql!("SELECT * FROM user WHERE age > ", bind("min", 18), " AND name = ", "henry", "").compile();
//! assert_eq!(stmt.bindings(), ["LET $min = 18;"]);
//! assert_eq!(stmt.text(), "SELECT * FROM user WHERE age > $min AND name = 'henry'");
//! assert_eq!(
//!     stmt.to_string(),
//!     "LET $min = 18;\nSELECT * FROM user WHERE age > $min AND name = 'henry'"
//! );
//! ```

use crate::sql::SQL;
use crate::traits::Model;
use crate::value::{Content, RecordId, SurrealValue};
use std::borrow::Cow;
use std::fmt::{self, Display, Write};

/// Build a template from alternating text and values.
///
/// Arguments start and end with text, like the string parts of a tagged
/// template; pass `""` when nothing follows the last value.
///
/// ```
/// use surql_core::ql;
///
/// let sql = ql!("SELECT * FROM user LIMIT ", 5, "");
/// assert_eq!(sql.sql(), "SELECT * FROM user LIMIT 5");
/// ```
#[macro_export]
macro_rules! ql {
    ($text:expr $(, $value:expr, $rest:expr)* $(,)?) => {
        $crate::template::Template::new($text)
            $(.interpolate($value).text($rest))*
            .into_sql()
    };
}

/// One piece of a template.
#[derive(Debug, Clone)]
pub enum Part<'a> {
    Text(Cow<'a, str>),
    Value(SurrealValue),
    Binding(Binding<'a>),
    Fragment(SQL<'a>),
}

/// A named variable declared with `LET` ahead of the statement.
#[derive(Debug, Clone)]
pub struct Binding<'a> {
    name: Cow<'a, str>,
    value: Box<Part<'a>>,
}

/// Declare a binding: `LET $name = value;`
///
/// Record-shaped strings (`table:id`) are written unquoted, other values are
/// JSON-encoded, fragments contribute their compiled text.
pub fn bind<'a>(name: impl Into<Cow<'a, str>>, value: impl Interpolate<'a>) -> Binding<'a> {
    Binding {
        name: name.into(),
        value: Box::new(value.into_part()),
    }
}

impl<'a> Binding<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Part<'a> {
        &self.value
    }

    pub(crate) fn write(&self, buf: &mut impl Write, hoisted: &mut Hoisted) {
        self.hoist(hoisted);
        let _ = write!(buf, "${}", self.name);
    }

    fn hoist(&self, hoisted: &mut Hoisted) {
        let mut line = format!("LET ${} = ", self.name);
        match self.value.as_ref() {
            Part::Text(text) => line.push_str(text),
            Part::Value(value) => {
                let _ = value.write_binding(&mut line);
            }
            Part::Binding(inner) => inner.write(&mut line, hoisted),
            Part::Fragment(sql) => sql.write_to(&mut line, hoisted),
        }
        line.push(';');
        hoisted.push(&self.name, line);
    }
}

/// `LET` lines collected while rendering, in first-seen order.
#[derive(Debug, Default)]
pub(crate) struct Hoisted {
    lines: Vec<String>,
}

impl Hoisted {
    fn push(&mut self, name: &str, line: String) {
        if self.lines.contains(&line) {
            return;
        }
        let prefix = format!("LET ${name} = ");
        if self.lines.iter().any(|l| l.starts_with(&prefix)) {
            crate::surql_warn!(
                binding = name,
                "surql.template: binding redeclared with a different value, the last one wins"
            );
        }
        self.lines.push(line);
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Verbatim text interleaved with interpolated parts.
#[derive(Debug, Clone, Default)]
pub struct Template<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Template<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self::default().text(text)
    }

    /// Append verbatim text
    #[must_use]
    pub fn text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push(Part::Text(text));
        }
        self
    }

    /// Append an interpolated value
    #[must_use]
    pub fn interpolate(mut self, value: impl Interpolate<'a>) -> Self {
        self.parts.push(value.into_part());
        self
    }

    /// Append a binding reference
    #[must_use]
    pub fn bind(self, name: impl Into<Cow<'a, str>>, value: impl Interpolate<'a>) -> Self {
        self.interpolate(bind(name, value))
    }

    pub fn parts(&self) -> &[Part<'a>] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Wrap as a fragment. Empty templates become an empty fragment.
    pub fn into_sql(self) -> SQL<'a> {
        if self.parts.is_empty() {
            return SQL::empty();
        }
        SQL::from(crate::sql::SQLChunk::Template(self))
    }

    pub fn compile(self) -> CompiledStatement {
        self.into_sql().compile()
    }

    pub(crate) fn write(&self, buf: &mut impl Write, hoisted: &mut Hoisted) {
        for part in &self.parts {
            match part {
                Part::Text(text) => {
                    let _ = buf.write_str(text);
                }
                Part::Value(value) => {
                    let _ = value.write_inline(buf);
                }
                Part::Binding(binding) => binding.write(buf, hoisted),
                Part::Fragment(sql) => sql.write_to(buf, hoisted),
            }
        }
    }

    pub(crate) fn starts_with_whitespace(&self) -> bool {
        matches!(self.parts.first(), Some(Part::Text(t)) if t.starts_with(char::is_whitespace))
    }

    pub(crate) fn ends_with_whitespace(&self) -> bool {
        matches!(self.parts.last(), Some(Part::Text(t)) if t.ends_with(char::is_whitespace))
    }
}

/// A compiled statement: binding declarations followed by the statement text.
///
/// Built fresh for every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStatement {
    bindings: Vec<String>,
    text: String,
}

impl CompiledStatement {
    pub fn new(bindings: Vec<String>, text: String) -> Self {
        Self { bindings, text }
    }

    /// `LET` lines in declaration order
    pub fn bindings(&self) -> &[String] {
        &self.bindings
    }

    /// Statement text without the binding block
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty() && self.text.is_empty()
    }
}

impl Display for CompiledStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.bindings {
            writeln!(f, "{line}")?;
        }
        f.write_str(&self.text)
    }
}

impl<'a> From<SQL<'a>> for CompiledStatement {
    fn from(sql: SQL<'a>) -> Self {
        sql.compile()
    }
}

/// Values that can be interpolated into a template.
pub trait Interpolate<'a> {
    fn into_part(self) -> Part<'a>;
}

impl<'a> Interpolate<'a> for Part<'a> {
    fn into_part(self) -> Part<'a> {
        self
    }
}

impl<'a> Interpolate<'a> for SQL<'a> {
    fn into_part(self) -> Part<'a> {
        Part::Fragment(self)
    }
}

impl<'a> Interpolate<'a> for &SQL<'a> {
    fn into_part(self) -> Part<'a> {
        Part::Fragment(self.clone())
    }
}

impl<'a> Interpolate<'a> for Template<'a> {
    fn into_part(self) -> Part<'a> {
        Part::Fragment(self.into_sql())
    }
}

impl<'a> Interpolate<'a> for Binding<'a> {
    fn into_part(self) -> Part<'a> {
        Part::Binding(self)
    }
}

impl<'a, M: Model> Interpolate<'a> for &M {
    fn into_part(self) -> Part<'a> {
        Part::Value(SurrealValue::Record(self.record_id()))
    }
}

impl<'a, T: Into<SurrealValue>> Interpolate<'a> for Option<T> {
    fn into_part(self) -> Part<'a> {
        Part::Value(self.into())
    }
}

impl<'a, T: Into<SurrealValue>> Interpolate<'a> for Vec<T> {
    fn into_part(self) -> Part<'a> {
        Part::Value(self.into())
    }
}

macro_rules! impl_interpolate_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Interpolate<'a> for $ty {
                #[inline]
                fn into_part(self) -> Part<'a> {
                    Part::Value(SurrealValue::from(self))
                }
            }
        )*
    };
}

impl_interpolate_value!(
    SurrealValue,
    RecordId,
    Content,
    serde_json::Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    &str,
    String,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ql;

    #[test]
    fn single_binding_round_trip() {
        let stmt = ql!("RETURN ", bind("x", 5), "").compile();
        assert_eq!(stmt.bindings(), ["LET $x = 5;"]);
        assert_eq!(stmt.text(), "RETURN $x");
        assert_eq!(stmt.to_string(), "LET $x = 5;\nRETURN $x");
    }

    #[test]
    fn redeclared_binding_keeps_both_lines() {
        let stmt = ql!("RETURN [", bind("x", 1), ", ", bind("x", 1), ", ", bind("x", 2), "]").compile();
        assert_eq!(stmt.bindings(), ["LET $x = 1;", "LET $x = 2;"]);
        assert_eq!(stmt.text(), "RETURN [$x, $x, $x]");
    }

    #[test]
    fn binding_literals() {
        let stmt = ql!(
            "SELECT * FROM ",
            bind("who", "user:henry"),
            " WHERE tags CONTAINSANY ",
            bind("tags", vec!["a", "b"]),
            " AND name = ",
            bind("name", "henry"),
            ""
        )
        .compile();
        assert_eq!(
            stmt.bindings(),
            [
                "LET $who = user:henry;",
                r#"LET $tags = ["a","b"];"#,
                r#"LET $name = "henry";"#,
            ]
        );
        assert_eq!(
            stmt.text(),
            "SELECT * FROM $who WHERE tags CONTAINSANY $tags AND name = $name"
        );
    }

    #[test]
    fn fragment_bindings_hoist_nested_first() {
        let inner = ql!("SELECT * FROM user WHERE age > ", bind("min", 21), "");
        let stmt = ql!("SELECT count() FROM ", bind("adults", inner), " GROUP ALL").compile();
        assert_eq!(
            stmt.bindings(),
            [
                "LET $min = 21;",
                "LET $adults = SELECT * FROM user WHERE age > $min;",
            ]
        );
        assert_eq!(stmt.text(), "SELECT count() FROM $adults GROUP ALL");
    }

    #[test]
    fn reused_binding_declared_once() {
        let limit = bind("limit", 10);
        let stmt = ql!("SELECT * FROM a LIMIT ", limit.clone(), "; SELECT * FROM b LIMIT ", limit, "")
            .compile();
        assert_eq!(stmt.bindings(), ["LET $limit = 10;"]);
    }

    #[test]
    fn inline_scalars() {
        let sql = ql!("", true, " ", 1.5, " ", None::<i32>, " ", "o'k", "");
        assert_eq!(sql.sql(), r"true 1.5 NONE 'o\'k'");
    }

    #[test]
    fn empty_template_is_empty_fragment() {
        assert!(ql!("").is_empty());
        assert!(Template::new("").compile().is_empty());
    }
}
