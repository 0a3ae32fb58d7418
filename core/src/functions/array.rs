//! `array::*` functions.

use super::call;
use crate::sql::SQL;
use crate::traits::ToSQL;

macro_rules! unary {
    ($($fn_name:ident => $sql_name:literal),* $(,)?) => {
        $(
            pub fn $fn_name<'a>(value: impl ToSQL<'a>) -> SQL<'a> {
                call($sql_name, [value.into_sql()])
            }
        )*
    };
}

unary!(
    len => "array::len",
    distinct => "array::distinct",
    flatten => "array::flatten",
    first => "array::first",
    last => "array::last",
    group => "array::group",
    sort => "array::sort",
);

/// `array::append(array, value)`
pub fn append<'a>(array: impl ToSQL<'a>, value: impl ToSQL<'a>) -> SQL<'a> {
    call("array::append", [array.into_sql(), value.into_sql()])
}

/// `array::union(a, b)`
pub fn union<'a>(a: impl ToSQL<'a>, b: impl ToSQL<'a>) -> SQL<'a> {
    call("array::union", [a.into_sql(), b.into_sql()])
}
