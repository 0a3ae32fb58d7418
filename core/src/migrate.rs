//! Index migration planning.
//!
//! Compares a model's declared indexes with the live table catalog returned
//! by `INFO FOR TABLE` and produces `DEFINE INDEX` statements for the ones
//! that are missing. Running the plan twice against an unchanged schema
//! yields nothing the second time.

use crate::schema::ModelMeta;
use crate::sql::SQL;
use compact_str::CompactString;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Catalog returned by `INFO FOR TABLE`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableInfo {
    #[serde(default)]
    pub events: BTreeMap<String, Value>,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
    #[serde(default)]
    pub indexes: BTreeMap<String, Value>,
    #[serde(default)]
    pub lives: BTreeMap<String, Value>,
    #[serde(default)]
    pub tables: BTreeMap<String, Value>,
}

impl TableInfo {
    pub fn has_index(&self, name: &str) -> bool {
        self.indexes.contains_key(name)
    }
}

/// `DEFINE INDEX` statements for every declared index absent from `info`.
///
/// The table-level index comes first, then field indexes in field order.
/// A table-level index without columns is skipped.
pub fn plan(meta: &ModelMeta, info: &TableInfo) -> Vec<SQL<'static>> {
    let table = meta.table_name();
    let mut seen: HashSet<CompactString> = HashSet::new();
    let mut statements = Vec::new();

    if let Some(index) = meta.table().index.as_ref().filter(|index| {
        if index.is_empty() {
            crate::surql_warn!(table, "surql.migrate: table index without columns skipped");
        }
        !index.is_empty()
    }) {
        let name = index.name();
        if !info.has_index(&name) && seen.insert(name) {
            statements.push(index.define(table));
        }
    }

    for field in meta.fields() {
        let Some(index) = &field.index else {
            continue;
        };
        if !info.has_index(&index.name) && seen.insert(index.name.clone()) {
            statements.push(index.define(table, field.name()));
        }
    }

    statements
}
