//! SurrealQL function calls and clause helpers for use inside templates.
//!
//! Arguments accept anything implementing [`ToSQL`]: fragments (fields from a
//! [`Scope`](crate::resolve::Scope), nested calls) are written as-is, plain
//! Rust values become literals.
//!
//! ```
//! use surql_core::functions::{count, limit, string};
//! use surql_core::sql::SQL;
//! use surql_core::ql;
//!
//! let name = SQL::raw("name");
//! let sql = ql!(
//!     "SELECT ", string::uppercase(name.clone()).alias("upper"), ", ", count(()),
//!     " FROM user WHERE ", string::starts_with(name, "ja"), " ", limit(10), ""
//! );
//! assert_eq!(
//!     sql.sql(),
//!     "SELECT string::uppercase(name) AS upper, count() FROM user WHERE string::startsWith(name, 'ja') LIMIT 10"
//! );
//! ```

pub mod array;
pub mod math;
pub mod meta;
pub mod rand;
pub mod string;
pub mod time;

use crate::sql::{SQL, Token};
use crate::traits::ToSQL;
use std::borrow::Cow;

/// `name(arg, arg, ...)`
pub(crate) fn call<'a, I>(name: &'static str, args: I) -> SQL<'a>
where
    I: IntoIterator<Item = SQL<'a>>,
{
    SQL::func(name, SQL::join(args, Token::COMMA))
}

/// `count()` for `()`, `count(expr)` otherwise
pub fn count<'a>(expr: impl ToSQL<'a>) -> SQL<'a> {
    SQL::func("count", expr.into_sql())
}

/// `VALUE expr`: select the bare value instead of an object
pub fn value<'a>(expr: impl ToSQL<'a>) -> SQL<'a> {
    SQL::token(Token::VALUE).append(expr.into_sql())
}

/// `LIMIT n`
pub fn limit(n: usize) -> SQL<'static> {
    SQL::token(Token::LIMIT).append(SQL::number(n))
}

/// `START n`
pub fn start(n: usize) -> SQL<'static> {
    SQL::token(Token::START).append(SQL::number(n))
}

/// Raw text, written verbatim
pub fn val<'a>(raw: impl Into<Cow<'a, str>>) -> SQL<'a> {
    SQL::raw(raw)
}
