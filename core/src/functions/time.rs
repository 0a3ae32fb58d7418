//! `time::*` functions.

use super::call;
use crate::sql::SQL;
use crate::traits::ToSQL;

/// `time::now()`
pub fn now() -> SQL<'static> {
    call("time::now", [])
}

/// `time::floor(datetime, duration)`; the duration is written verbatim, e.g. `1w`
pub fn floor<'a>(datetime: impl ToSQL<'a>, duration: &'a str) -> SQL<'a> {
    call("time::floor", [datetime.into_sql(), SQL::raw(duration)])
}

/// `time::format(datetime, format)`
pub fn format<'a>(datetime: impl ToSQL<'a>, format: impl ToSQL<'a>) -> SQL<'a> {
    call("time::format", [datetime.into_sql(), format.into_sql()])
}

pub fn unix<'a>(datetime: impl ToSQL<'a>) -> SQL<'a> {
    call("time::unix", [datetime.into_sql()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_calls() {
        assert_eq!(now().sql(), "time::now()");
        assert_eq!(
            floor(SQL::raw("created"), "1w").sql(),
            "time::floor(created, 1w)"
        );
        assert_eq!(
            format(SQL::raw("created"), "%Y").sql(),
            "time::format(created, '%Y')"
        );
    }
}
