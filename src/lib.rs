//! # surql
//!
//! Typed SurrealQL composition for Rust: declare models once, select fields
//! by name, traverse graph relations, write templates with hoisted `LET`
//! bindings and chain statements across models into one request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use surql::prelude::*;
//!
//! struct User {
//!     id: String,
//! }
//!
//! struct Friends;
//!
//! impl Model for User {
//!     fn describe(table: &mut TableBuilder) {
//!         table
//!             .name("user")
//!             .scalar("name", ScalarType::String)
//!             .relation(
//!                 "friends",
//!                 RelationParams::new(Direction::Out, ModelRef::of::<Friends>())
//!                     .to(Direction::Out, ModelRef::of::<User>()),
//!             );
//!     }
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! impl Model for Friends {
//!     fn describe(table: &mut TableBuilder) {
//!         table.name("friends");
//!     }
//!
//!     fn id(&self) -> &str {
//!         ""
//!     }
//! }
//!
//! # async fn run<C: Connection>(db: Surreal<C>) -> surql::Result<()> {
//! db.create::<User>(Content::new().set("name", "henry")).await?;
//!
//! // SELECT name, ->friends->user AS friends FROM user WHERE name = 'henry'
//! let rows: Vec<serde_json::Value> = db
//!     .select::<User>(["name", "friends"])
//!     .r#where(ql!("name = ", "henry", ""))
//!     .all()
//!     .await?;
//!
//! // LET $min = 3;
//! // SELECT * FROM user WHERE string::len(name) > $min
//! let long_names = db
//!     .query::<User, _>(|f| {
//!         Ok(ql!(
//!             "SELECT * FROM ", f.table(), " WHERE ",
//!             string::len(f.field("name")?), " > ", bind("min", 3), ""
//!         ))
//!     })?
//!     .exec()
//!     .await?;
//! # let _ = (rows, long_names);
//! # Ok(()) }
//! ```
//!
//! ## Transports
//!
//! | Strategy  | `live` | `patch` |
//! |-----------|--------|---------|
//! | WebSocket | ✅     | ✅      |
//! | HTTP      | ❌     | ❌      |
//!
//! Operations the active transport cannot serve fail with
//! [`SurqlError::UnsupportedUnderStrategy`] before anything is sent.

mod builder;
pub mod config;
mod patch;
mod surreal;

/// Result type for surql operations
pub use surql_core::error::Result;

/// Template macro
pub use surql_core::ql;

pub use surql_core::error::SurqlError;

/// Error types
pub mod error {
    pub use crate::config::ConfigError;
    pub use surql_core::error::SurqlError;
}

/// Core fragments, templates, metadata and execution contract.
pub use surql_core as core;

/// Shared vocabulary types.
pub use surql_types as types;

pub use builder::select::{SelectBuilder, Selection};
pub use config::{ConnectionOptions, Credentials};
pub use patch::{Patch, PatchOp};
pub use surreal::{ModelQuery, Pipe, Surreal};

pub use surql_core::connection::{
    Action, Connection, LiveCallback, LiveHandle, Notification, Rows,
};
pub use surql_core::functions;
pub use surql_core::migrate::TableInfo;
pub use surql_core::pipeline::Chain;
pub use surql_core::resolve::Scope;
pub use surql_core::schema;
pub use surql_core::template::{CompiledStatement, bind};
pub use surql_core::traits::{Model, ToSQL};
pub use surql_core::value::{Content, RecordId, SurrealValue};
pub use surql_core::{SQL, Token};
pub use surql_types::{Direction, ScalarType, Strategy};

/// Everything needed to declare models and write queries.
pub mod prelude {
    pub use crate::{
        Chain, Connection, ConnectionOptions, Content, Direction, Model, Patch, RecordId, Rows,
        SQL, ScalarType, Scope, Selection, Strategy, Surreal, SurqlError, SurrealValue, ToSQL,
        bind, ql,
    };
    pub use surql_core::functions::{count, limit, start, val, value};
    pub use surql_core::functions::{array, math, meta, rand, string, time};
    pub use surql_core::schema::{
        FieldDescriptor, FieldIndex, IndexSpec, ModelRef, RelationParams, Shape, TableBuilder,
    };
}
