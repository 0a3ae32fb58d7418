//! Contract with the external SurrealDB client.
//!
//! The connection layer (transport, authentication, namespace selection) is
//! supplied by the caller; this crate only needs to submit query text and,
//! on duplex transports, open live subscriptions.

use crate::error::{Result, SurqlError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use surql_types::Strategy;
use uuid::Uuid;

/// Change event delivered to a live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Update,
    Delete,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub action: Action,
    /// The changed record, or a list of JSON patches when subscribed with diff
    pub result: Value,
}

/// Identifier of an open live subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiveHandle(pub Uuid);

pub type LiveCallback = Box<dyn Fn(Notification) + Send + Sync>;

/// A connected SurrealDB client.
pub trait Connection: Send + Sync {
    /// Active transport
    fn strategy(&self) -> Strategy;

    /// Submit query text; one result per statement, in order.
    fn query(&self, sql: &str) -> impl Future<Output = Result<Vec<Value>>> + Send;

    /// Open a live subscription on `table`.
    ///
    /// Duplex transports render the statement with
    /// [`helpers::live_select`](crate::helpers::live_select). The default
    /// implementation rejects the call, which is correct for request/response
    /// transports.
    fn live(
        &self,
        table: &str,
        diff: bool,
        callback: LiveCallback,
    ) -> impl Future<Output = Result<LiveHandle>> + Send {
        let strategy = self.strategy();
        let _ = (table, diff, callback);
        async move {
            Err(SurqlError::UnsupportedUnderStrategy {
                operation: "Live",
                strategy,
            })
        }
    }
}

/// Result set of one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows(Value);

impl Rows {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// No rows; returned by operations that skip the round-trip
    pub fn empty() -> Self {
        Self(Value::Array(Vec::new()))
    }

    /// Take the result of the last statement
    pub fn last_of(results: Vec<Value>) -> Result<Self> {
        results
            .into_iter()
            .last()
            .map(Self)
            .ok_or(SurqlError::EmptyResponse)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Array(rows) => rows.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode every row into `T`
    pub fn decode<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let rows = match self.0 {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            single => vec![single],
        };
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| SurqlError::Mapping(e.to_string())))
            .collect()
    }

    /// Decode the first row, if any
    pub fn first<T: DeserializeOwned>(self) -> Result<Option<T>> {
        Ok(self.decode()?.into_iter().next())
    }
}

impl Default for Rows {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn last_result_only() {
        let rows = Rows::last_of(vec![json!([1]), json!([{"name": "a"}, {"name": "b"}])]).unwrap();
        assert_eq!(rows.len(), 2);
        let decoded: Vec<Named> = rows.decode().unwrap();
        assert_eq!(decoded[1], Named { name: "b".into() });
        assert!(matches!(Rows::last_of(vec![]), Err(SurqlError::EmptyResponse)));
    }

    #[test]
    fn decode_shapes() {
        assert!(Rows::new(Value::Null).decode::<Named>().unwrap().is_empty());
        let single: Vec<String> = Rows::new(json!("x")).decode().unwrap();
        assert_eq!(single, ["x"]);
        assert!(matches!(
            Rows::new(json!([1])).decode::<Named>(),
            Err(SurqlError::Mapping(_))
        ));
    }

    #[test]
    fn notification_wire_format() {
        let id = Uuid::nil();
        let n: Notification = serde_json::from_value(json!({
            "id": id,
            "action": "UPDATE",
            "result": {"id": "user:a"}
        }))
        .unwrap();
        assert_eq!(n.action, Action::Update);
    }
}
