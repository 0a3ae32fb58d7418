//! `meta::*` functions on record links.

use super::call;
use crate::sql::SQL;
use crate::traits::ToSQL;

/// `meta::id(record)`: the key part of a record link
pub fn id<'a>(record: impl ToSQL<'a>) -> SQL<'a> {
    call("meta::id", [record.into_sql()])
}

/// `meta::tb(record)`: the table part of a record link
pub fn tb<'a>(record: impl ToSQL<'a>) -> SQL<'a> {
    call("meta::tb", [record.into_sql()])
}
