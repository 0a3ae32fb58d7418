//! `math::*` functions.

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
    abs => "math::abs",
    ceil => "math::ceil",
    floor => "math::floor",
    max => "math::max",
    mean => "math::mean",
    median => "math::median",
    min => "math::min",
    round => "math::round",
    sqrt => "math::sqrt",
    sum => "math::sum",
);

/// `math::fixed(value, places)`
pub fn fixed<'a>(value: impl ToSQL<'a>, places: usize) -> SQL<'a> {
    call("math::fixed", [value.into_sql(), SQL::number(places)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_calls() {
        assert_eq!(sum(SQL::raw("price")).sql(), "math::sum(price)");
        assert_eq!(fixed(SQL::raw("price"), 2).sql(), "math::fixed(price, 2)");
    }
}
