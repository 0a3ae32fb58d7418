//! Tracing utilities for query and registry observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the query text and statement count.
///
/// ```ignore
/// surql_trace_query!(&text, chain.len());
/// ```
#[macro_export]
macro_rules! surql_trace_query {
    ($sql:expr, $statements:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, statements = $statements, "surql.query");
    };
}

/// Emit a trace-level event when a model's metadata enters the registry.
///
/// ```ignore
/// surql_trace_registry!("register", meta.table_name(), meta.fields().len());
/// ```
#[macro_export]
macro_rules! surql_trace_registry {
    ($event:literal, $table:expr, $fields:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(event = $event, table = %$table, fields = $fields, "surql.registry");
    };
}

/// Emit a warn-level event for declarations that are skipped or overridden.
///
/// ```ignore
/// surql_warn!(table, "surql.migrate: index without columns skipped");
/// ```
#[macro_export]
macro_rules! surql_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::warn!($($arg)+);
    };
}
