use super::Token;
use crate::template::{Binding, Hoisted, Template};
use crate::value::SurrealValue;
use std::borrow::Cow;
use std::fmt::Write;

/// A SQL chunk represents a part of a SurrealQL statement.
///
/// - `Token` - keywords and punctuation (SELECT, FROM, `,`, etc.)
/// - `Ident` - table and field names, escaped with backticks when needed
/// - `Raw` - unquoted text (function names, traversals, JSON payloads)
/// - `Number` - unsigned integer literal (LIMIT, START)
/// - `Value` - inline value literal
/// - `Binding` - `$name` reference whose `LET` is hoisted on compile
/// - `Template` - verbatim text interleaved with values, rendered without spacing
#[derive(Debug, Clone)]
pub enum SQLChunk<'a> {
    /// Renders as: keyword with automatic spacing rules
    Token(Token),

    /// Renders as: name, or `name` when it is not a bare identifier
    Ident(Cow<'a, str>),

    /// Renders as: text (as-is)
    Raw(Cow<'a, str>),

    /// Renders as: decimal digits
    Number(usize),

    /// Renders as: 'text' for strings, literal otherwise
    Value(SurrealValue),

    /// Renders as: $name
    Binding(Binding<'a>),

    /// Renders as: concatenated parts
    Template(Template<'a>),
}

impl<'a> SQLChunk<'a> {
    /// Creates a token chunk - const
    #[inline]
    pub const fn token(t: Token) -> Self {
        Self::Token(t)
    }

    #[inline]
    pub fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Ident(name.into())
    }

    #[inline]
    pub fn raw(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Raw(text.into())
    }

    /// Write chunk content to buffer, hoisting any binding it contains
    pub(crate) fn write(&self, buf: &mut impl Write, hoisted: &mut Hoisted) {
        match self {
            SQLChunk::Token(token) => {
                let _ = buf.write_str(token.as_str());
            }
            SQLChunk::Ident(name) => write_ident(buf, name),
            SQLChunk::Raw(text) => {
                let _ = buf.write_str(text);
            }
            SQLChunk::Number(n) => {
                let _ = write!(buf, "{n}");
            }
            SQLChunk::Value(value) => {
                let _ = value.write_inline(buf);
            }
            SQLChunk::Binding(binding) => binding.write(buf, hoisted),
            SQLChunk::Template(template) => template.write(buf, hoisted),
        }
    }

    fn starts_with_whitespace(&self) -> bool {
        match self {
            SQLChunk::Raw(text) => text.is_empty() || text.starts_with(char::is_whitespace),
            SQLChunk::Template(template) => template.starts_with_whitespace(),
            _ => false,
        }
    }

    fn ends_with_whitespace(&self) -> bool {
        match self {
            SQLChunk::Raw(text) => text.is_empty() || text.ends_with(char::is_whitespace),
            SQLChunk::Template(template) => template.ends_with_whitespace(),
            _ => false,
        }
    }
}

/// Spacing rule between two adjacent chunks
pub(crate) fn chunk_needs_space(current: &SQLChunk<'_>, next: &SQLChunk<'_>) -> bool {
    if current.ends_with_whitespace() || next.starts_with_whitespace() {
        return false;
    }
    match (current, next) {
        (_, SQLChunk::Token(Token::COMMA | Token::SEMI | Token::RPAREN | Token::DOT)) => false,
        (SQLChunk::Token(Token::LPAREN | Token::DOT), _) => false,
        (current, SQLChunk::Token(Token::LPAREN)) => {
            matches!(current, SQLChunk::Token(t) if t.is_keyword())
        }
        _ => true,
    }
}

/// Returns `true` when `name` can be written without escaping
pub(crate) fn is_bare_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_ident(buf: &mut impl Write, name: &str) {
    if is_bare_ident(name) {
        let _ = buf.write_str(name);
        return;
    }
    let _ = buf.write_char('`');
    for c in name.chars() {
        if c == '`' {
            let _ = buf.write_char('\\');
        }
        let _ = buf.write_char(c);
    }
    let _ = buf.write_char('`');
}

impl<'a> From<Token> for SQLChunk<'a> {
    #[inline]
    fn from(value: Token) -> Self {
        SQLChunk::Token(value)
    }
}

impl<'a> From<SurrealValue> for SQLChunk<'a> {
    #[inline]
    fn from(value: SurrealValue) -> Self {
        SQLChunk::Value(value)
    }
}

impl<'a> From<Binding<'a>> for SQLChunk<'a> {
    #[inline]
    fn from(value: Binding<'a>) -> Self {
        SQLChunk::Binding(value)
    }
}
