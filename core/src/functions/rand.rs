//! `rand::*` functions.

use super::call;
use crate::sql::SQL;

/// `rand()`
pub fn rand() -> SQL<'static> {
    call("rand", [])
}

pub fn uuid() -> SQL<'static> {
    call("rand::uuid", [])
}

/// `rand::int(min, max)`
pub fn int(min: i64, max: i64) -> SQL<'static> {
    call("rand::int", [SQL::value(min), SQL::value(max)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_calls() {
        assert_eq!(rand().sql(), "rand()");
        assert_eq!(uuid().sql(), "rand::uuid()");
        assert_eq!(int(1, 6).sql(), "rand::int(1, 6)");
    }
}
