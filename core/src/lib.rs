//! Core building blocks for surql: SurrealQL fragments, the template
//! compiler, model metadata, field resolution and statement chains.

pub mod connection;
pub mod error;
pub mod functions;
pub mod helpers;
pub mod migrate;
pub mod pipeline;
pub mod resolve;
pub mod schema;
pub mod sql;
pub mod template;
pub mod tracing;
pub mod traits;
pub mod value;

// Re-export key types and traits
pub use connection::{Action, Connection, LiveCallback, LiveHandle, Notification, Rows};
pub use error::{Result, SurqlError};
pub use pipeline::Chain;
pub use resolve::{Resolver, Scope};
pub use schema::{ModelMeta, ModelRef, Registry, TableBuilder};
pub use sql::{SQL, SQLChunk, Token};
pub use template::{Binding, CompiledStatement, Interpolate, Part, Template, bind};
pub use traits::*;
pub use value::{Content, RecordId, SurrealValue};

pub use surql_types::{Direction, ScalarType, Strategy};
