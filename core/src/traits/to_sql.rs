//! ToSQL trait for converting types to SurrealQL fragments.

use crate::sql::{SQL, Token};
use crate::template::{Binding, Template};
use crate::value::{RecordId, SurrealValue};
use std::borrow::Cow;

/// Trait for types that can be converted to SurrealQL fragments.
///
/// Plain Rust values convert to inline literals (`'text'`, `42`, `true`),
/// so they can be used directly as function arguments.
pub trait ToSQL<'a> {
    fn to_sql(&self) -> SQL<'a>;

    /// Consume self and return SQL without cloning.
    /// Default delegates to `to_sql()`; types that own their SQL override it.
    fn into_sql(self) -> SQL<'a>
    where
        Self: Sized,
    {
        self.to_sql()
    }

    /// `self AS alias`
    fn alias(&self, alias: impl Into<Cow<'a, str>>) -> SQL<'a>
    where
        Self: Sized,
    {
        self.to_sql().alias(alias)
    }
}

impl<'a> ToSQL<'a> for SQL<'a> {
    fn to_sql(&self) -> SQL<'a> {
        self.clone()
    }

    fn into_sql(self) -> SQL<'a> {
        self
    }
}

impl<'a> ToSQL<'a> for Token {
    fn to_sql(&self) -> SQL<'a> {
        SQL::token(*self)
    }
}

impl<'a> ToSQL<'a> for Template<'a> {
    fn to_sql(&self) -> SQL<'a> {
        self.clone().into_sql()
    }

    fn into_sql(self) -> SQL<'a> {
        Template::into_sql(self)
    }
}

impl<'a> ToSQL<'a> for Binding<'a> {
    fn to_sql(&self) -> SQL<'a> {
        SQL::binding(self.clone())
    }

    fn into_sql(self) -> SQL<'a> {
        SQL::binding(self)
    }
}

impl<'a> ToSQL<'a> for SurrealValue {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(self.clone())
    }

    fn into_sql(self) -> SQL<'a> {
        SQL::value(self)
    }
}

impl<'a> ToSQL<'a> for RecordId {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(self.clone())
    }
}

impl<'a, T> ToSQL<'a> for &T
where
    T: ToSQL<'a>,
{
    fn to_sql(&self) -> SQL<'a> {
        (**self).to_sql()
    }
}

impl<'a> ToSQL<'a> for () {
    fn to_sql(&self) -> SQL<'a> {
        SQL::empty()
    }
}

impl<'a, T> ToSQL<'a> for Vec<T>
where
    T: ToSQL<'a>,
{
    fn to_sql(&self) -> SQL<'a> {
        SQL::join(self.iter().map(ToSQL::to_sql), Token::COMMA)
    }
}

impl<'a, T, const N: usize> ToSQL<'a> for [T; N]
where
    T: ToSQL<'a>,
{
    fn to_sql(&self) -> SQL<'a> {
        SQL::join(self.iter().map(ToSQL::to_sql), Token::COMMA)
    }
}

impl<'a> ToSQL<'a> for &'a str {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(*self)
    }
}

impl<'a> ToSQL<'a> for String {
    fn to_sql(&self) -> SQL<'a> {
        SQL::value(self.clone())
    }
}

macro_rules! impl_to_sql_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> ToSQL<'a> for $ty {
                #[inline]
                fn to_sql(&self) -> SQL<'a> {
                    SQL::value(*self)
                }
            }
        )*
    };
}

impl_to_sql_literal!(bool, i32, i64, u32, u64, usize, f64);
