//! Values interpolated into queries and sent as write payloads.

use compact_str::{CompactString, ToCompactString};
use regex::Regex;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::sync::LazyLock;

/// Largest integer a JSON consumer can hold without precision loss (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

static RECORD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*:\S+$").expect("record id regex"));

/// A record link: `table:id`.
///
/// ```
/// use surql_core::RecordId;
///
/// let id = RecordId::new("user", "henry");
/// assert_eq!(id.to_string(), "user:henry");
/// assert_eq!(RecordId::new("user", "user:henry"), id);
/// assert_eq!(RecordId::parse("user:henry"), Some(id));
/// assert_eq!(RecordId::parse("hello world"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    table: CompactString,
    id: CompactString,
}

impl RecordId {
    /// Build a link, accepting either a bare key or an already prefixed one.
    pub fn new(table: impl AsRef<str>, id: impl AsRef<str>) -> Self {
        let table = table.as_ref();
        let id = id.as_ref();
        let id = id
            .strip_prefix(table)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(id);
        Self {
            table: table.to_compact_string(),
            id: id.to_compact_string(),
        }
    }

    /// Parse a `table:id` string.
    pub fn parse(s: &str) -> Option<Self> {
        if !Self::is_record_id(s) {
            return None;
        }
        let (table, id) = s.split_once(':')?;
        Some(Self {
            table: table.to_compact_string(),
            id: id.to_compact_string(),
        })
    }

    /// Returns `true` when `s` has the shape of a record link.
    pub fn is_record_id(s: &str) -> bool {
        RECORD_ID.is_match(s)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table, self.id)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordIdVisitor;

        impl Visitor<'_> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a record link of the form table:id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RecordId, E> {
                RecordId::parse(v).ok_or_else(|| E::custom(format!("invalid record link `{v}`")))
            }
        }

        deserializer.deserialize_str(RecordIdVisitor)
    }
}

/// A value that can be written into a query or a write payload.
///
/// `None` is an absent value: object members holding it are dropped from
/// payloads, and it renders as `NONE` in query text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SurrealValue {
    #[default]
    None,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Record(RecordId),
    Array(Vec<SurrealValue>),
    Object(BTreeMap<String, SurrealValue>),
}

impl SurrealValue {
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, SurrealValue::None)
    }

    /// Convert any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Transform into a JSON write payload.
    ///
    /// Arrays map element-wise, objects recurse dropping absent members,
    /// record links become `"table:id"` strings and numbers go through
    /// [`normalize_number`]. Returns `None` for an absent value.
    pub fn into_content(self) -> Option<Value> {
        match self {
            SurrealValue::None => None,
            SurrealValue::Null => Some(Value::Null),
            SurrealValue::Bool(b) => Some(Value::Bool(b)),
            SurrealValue::Number(n) => Some(normalize_number(n)),
            SurrealValue::String(s) => Some(Value::String(s)),
            SurrealValue::Record(record) => Some(Value::String(record.to_string())),
            SurrealValue::Array(items) => Some(Value::Array(
                items.into_iter().filter_map(SurrealValue::into_content).collect(),
            )),
            SurrealValue::Object(members) => Some(Value::Object(
                members
                    .into_iter()
                    .filter_map(|(key, value)| value.into_content().map(|v| (key, v)))
                    .collect::<Map<String, Value>>(),
            )),
        }
    }

    /// Write as an inline template value: strings single-quoted, everything
    /// else as a literal.
    pub fn write_inline(&self, buf: &mut impl Write) -> fmt::Result {
        match self {
            SurrealValue::String(s) => write_quoted(buf, s),
            other => other.write_literal(buf),
        }
    }

    /// Write as the right-hand side of a `LET` binding: record-shaped
    /// strings pass through unquoted, everything else is JSON-encoded.
    pub fn write_binding(&self, buf: &mut impl Write) -> fmt::Result {
        match self {
            SurrealValue::String(s) if RecordId::is_record_id(s) => buf.write_str(s),
            other => other.write_literal(buf),
        }
    }

    /// Write as a SurrealQL literal. Strings inside are JSON-quoted and
    /// record links stay bare.
    pub fn write_literal(&self, buf: &mut impl Write) -> fmt::Result {
        match self {
            SurrealValue::None => buf.write_str("NONE"),
            SurrealValue::Null => buf.write_str("NULL"),
            SurrealValue::Bool(b) => write!(buf, "{b}"),
            SurrealValue::Number(n) => write!(buf, "{n}"),
            SurrealValue::String(s) => write_json_string(buf, s),
            SurrealValue::Record(record) => write!(buf, "{record}"),
            SurrealValue::Array(items) => {
                buf.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        buf.write_char(',')?;
                    }
                    item.write_literal(buf)?;
                }
                buf.write_char(']')
            }
            SurrealValue::Object(members) => {
                buf.write_char('{')?;
                let mut first = true;
                for (key, value) in members {
                    if value.is_none() {
                        continue;
                    }
                    if !first {
                        buf.write_char(',')?;
                    }
                    first = false;
                    write_json_string(buf, key)?;
                    buf.write_char(':')?;
                    value.write_literal(buf)?;
                }
                buf.write_char('}')
            }
        }
    }
}

fn write_quoted(buf: &mut impl Write, s: &str) -> fmt::Result {
    buf.write_char('\'')?;
    for c in s.chars() {
        match c {
            '\'' => buf.write_str("\\'")?,
            '\\' => buf.write_str("\\\\")?,
            c => buf.write_char(c)?,
        }
    }
    buf.write_char('\'')
}

fn write_json_string(buf: &mut impl Write, s: &str) -> fmt::Result {
    write!(buf, "{}", Value::String(s.to_owned()))
}

/// Apply the numeric policy for write payloads.
///
/// Safe integers pass through (integral floats collapse to integers), any
/// other number is sent as its string form.
///
/// ```
/// use serde_json::{Number, json};
/// use surql_core::value::normalize_number;
///
/// assert_eq!(normalize_number(Number::from(42)), json!(42));
/// assert_eq!(normalize_number(Number::from_f64(3.0).unwrap()), json!(3));
/// assert_eq!(normalize_number(Number::from_f64(1.5).unwrap()), json!("1.5"));
/// assert_eq!(normalize_number(Number::from(u64::MAX)), json!("18446744073709551615"));
/// ```
pub fn normalize_number(n: Number) -> Value {
    if let Some(i) = n.as_i64() {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER {
            return Value::Number(n);
        }
    } else if let Some(u) = n.as_u64() {
        if u <= MAX_SAFE_INTEGER {
            return Value::Number(n);
        }
    } else if let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.abs() <= MAX_SAFE_INTEGER as f64
    {
        return Value::Number(Number::from(f as i64));
    }
    Value::String(n.to_string())
}

/// Apply [`normalize_number`] to every number inside a JSON document.
pub fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => normalize_number(n),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(k, v)| (k, normalize_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Object payload builder.
///
/// ```
/// use surql_core::{Content, SurrealValue};
///
/// let content = Content::new().set("name", "henry").set("age", 30).set("nickname", None::<String>);
/// let json = SurrealValue::from(content).into_content().unwrap();
/// assert_eq!(json.to_string(), r#"{"age":30,"name":"henry"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content(BTreeMap<String, SurrealValue>);

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<SurrealValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SurrealValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Content> for SurrealValue {
    fn from(content: Content) -> Self {
        SurrealValue::Object(content.0)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SurrealValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    SurrealValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for SurrealValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(SurrealValue::Null, SurrealValue::Number)
    }
}

impl From<f32> for SurrealValue {
    fn from(value: f32) -> Self {
        SurrealValue::from(f64::from(value))
    }
}

impl From<bool> for SurrealValue {
    fn from(value: bool) -> Self {
        SurrealValue::Bool(value)
    }
}

impl From<&str> for SurrealValue {
    fn from(value: &str) -> Self {
        SurrealValue::String(value.to_owned())
    }
}

impl From<String> for SurrealValue {
    fn from(value: String) -> Self {
        SurrealValue::String(value)
    }
}

impl From<RecordId> for SurrealValue {
    fn from(value: RecordId) -> Self {
        SurrealValue::Record(value)
    }
}

impl<T: Into<SurrealValue>> From<Option<T>> for SurrealValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SurrealValue::None, Into::into)
    }
}

impl<T: Into<SurrealValue>> From<Vec<T>> for SurrealValue {
    fn from(values: Vec<T>) -> Self {
        SurrealValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SurrealValue>> From<BTreeMap<String, T>> for SurrealValue {
    fn from(members: BTreeMap<String, T>) -> Self {
        SurrealValue::Object(members.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<Value> for SurrealValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SurrealValue::Null,
            Value::Bool(b) => SurrealValue::Bool(b),
            Value::Number(n) => SurrealValue::Number(n),
            Value::String(s) => SurrealValue::String(s),
            Value::Array(items) => SurrealValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(members) => SurrealValue::Object(
                members.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
