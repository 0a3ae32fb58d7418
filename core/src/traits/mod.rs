//! Core traits for query generation.

mod model;
mod to_sql;

pub use model::*;
pub use to_sql::*;
