//! `string::*` functions.

use super::call;
use crate::sql::SQL;
use crate::traits::ToSQL;

/// `string::concat(a, b, ...)`
pub fn concat<'a, I>(values: I) -> SQL<'a>
where
    I: IntoIterator,
    I::Item: ToSQL<'a>,
{
    call("string::concat", values.into_iter().map(ToSQL::into_sql))
}

pub fn contains<'a>(value: impl ToSQL<'a>, search: impl ToSQL<'a>) -> SQL<'a> {
    call("string::contains", [value.into_sql(), search.into_sql()])
}

pub fn ends_with<'a>(value: impl ToSQL<'a>, search: impl ToSQL<'a>) -> SQL<'a> {
    call("string::endsWith", [value.into_sql(), search.into_sql()])
}

/// `string::join(delimiter, a, b, ...)`
pub fn join<'a, I>(delimiter: impl ToSQL<'a>, values: I) -> SQL<'a>
where
    I: IntoIterator,
    I::Item: ToSQL<'a>,
{
    call(
        "string::join",
        std::iter::once(delimiter.into_sql()).chain(values.into_iter().map(ToSQL::into_sql)),
    )
}

pub fn len<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::len", [value.into_sql()])
}

pub fn lowercase<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::lowercase", [value.into_sql()])
}

pub fn repeat<'a>(value: impl ToSQL<'a>, times: usize) -> SQL<'a> {
    call("string::repeat", [value.into_sql(), SQL::number(times)])
}

pub fn replace<'a>(value: impl ToSQL<'a>, from: impl ToSQL<'a>, to: impl ToSQL<'a>) -> SQL<'a> {
    call(
        "string::replace",
        [value.into_sql(), from.into_sql(), to.into_sql()],
    )
}

pub fn reverse<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::reverse", [value.into_sql()])
}

/// `string::slice(value, start, len)`
pub fn slice<'a>(value: impl ToSQL<'a>, start: i64, len: usize) -> SQL<'a> {
    call(
        "string::slice",
        [value.into_sql(), SQL::value(start), SQL::number(len)],
    )
}

pub fn slug<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::slug", [value.into_sql()])
}

pub fn split<'a>(value: impl ToSQL<'a>, delimiter: impl ToSQL<'a>) -> SQL<'a> {
    call("string::split", [value.into_sql(), delimiter.into_sql()])
}

pub fn starts_with<'a>(value: impl ToSQL<'a>, search: impl ToSQL<'a>) -> SQL<'a> {
    call("string::startsWith", [value.into_sql(), search.into_sql()])
}

pub fn trim<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::trim", [value.into_sql()])
}

pub fn uppercase<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::uppercase", [value.into_sql()])
}

pub fn words<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
    call("string::words", [value.into_sql()])
}

/// `string::is::datetime(value, format)`
pub fn is_datetime<'a>(value: impl ToSQL<'a>, format: impl ToSQL<'a>) -> SQL<'a> {
    call("string::is::datetime", [value.into_sql(), format.into_sql()])
}

macro_rules! string_predicates {
    ($($name:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("`string::is::", stringify!($name), "(value)`")]
                pub fn [<is_ $name>]<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
                    call(concat!("string::is::", stringify!($name)), [value.into_sql()])
                }
            )*
        }
    };
}

string_predicates!(
    alphanum,
    alpha,
    ascii,
    domain,
    email,
    hexadecimal,
    latitude,
    longitude,
    numeric,
    semver,
    url,
    uuid,
);
