use serde_json::{Value, json};
use std::future::Future;
use std::sync::Mutex;
use surql_core::schema::{ModelRef, Registry, TableBuilder};
use surql_core::{Chain, Connection, Model, Notification, Scope, Strategy, SurqlError, bind, ql};
use surql_types::ScalarType;

/// Request/response transport that keeps the default `live`.
#[derive(Default)]
struct Recorder {
    sent: Mutex<Vec<String>>,
}

impl Connection for Recorder {
    fn strategy(&self) -> Strategy {
        Strategy::Http
    }

    fn query(&self, sql: &str) -> impl Future<Output = surql_core::Result<Vec<Value>>> + Send {
        self.sent.lock().unwrap().push(sql.to_owned());
        let results = sql
            .split(';')
            .filter(|s| !s.trim().is_empty())
            .enumerate()
            .map(|(i, _)| json!([i]))
            .collect();
        async move { Ok(results) }
    }
}

struct Account;

impl Model for Account {
    fn describe(table: &mut TableBuilder) {
        table.scalar("email", ScalarType::String);
    }

    fn id(&self) -> &str {
        ""
    }
}

#[tokio::test]
async fn default_live_is_rejected() {
    let conn = Recorder::default();
    let err = conn.live("account", false, Box::new(|_: Notification| {})).await.unwrap_err();
    assert!(matches!(
        err,
        SurqlError::UnsupportedUnderStrategy { operation: "Live", strategy: Strategy::Http }
    ));
    assert!(conn.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn chain_returns_last_statement_result() {
    let conn = Recorder::default();
    let rows = Chain::begin::<Account, _>(|f| {
        Ok(ql!("SELECT ", f.field("email")?, " FROM ", f.table(), ""))
    })
    .unwrap()
    .next::<Account, _>(|f| {
        Ok(ql!("DELETE ", f.record("a1"), " WHERE email = ", bind("email", "a@b.c"), ""))
    })
    .unwrap()
    .exec(&conn)
    .await
    .unwrap();

    // LET, SELECT, DELETE
    assert_eq!(rows.into_value(), json!([2]));
    assert_eq!(
        conn.sent.lock().unwrap().as_slice(),
        ["SELECT email FROM Account;LET $email = \"a@b.c\";\nDELETE Account:a1 WHERE email = $email;"]
    );
}

#[test]
fn default_table_name_is_type_identifier() {
    assert_eq!(Scope::<Account>::new().table_name(), "Account");
    assert_eq!(ModelRef::of::<Account>().default_table_name(), "Account");
}

#[test]
fn separate_registries_are_isolated() {
    let registry = Registry::new();
    let account = ModelRef::of::<Account>();
    assert!(!registry.contains(account));

    let meta = registry.ensure(account);
    assert_eq!(meta.table_name(), "Account");
    assert!(registry.contains(account));
    assert!(Registry::new().fields(account).is_none());

    let names: Vec<String> = registry
        .fields(account)
        .unwrap()
        .iter()
        .map(|f| f.name().to_owned())
        .collect();
    assert_eq!(names, ["email", "id"]);
}
