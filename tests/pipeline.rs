use common::{Todo, User, setup_db};
use serde_json::json;
use surql::prelude::*;

mod common;

fn mark_done(f: &Scope<Todo>) -> surql::Result<SQL<'static>> {
    Ok(ql!(
        "UPDATE ", f.table(), " SET ", f.field("done")?, " = ", bind("done", true), ""
    ))
}

fn henrys_friends(f: &Scope<User>) -> surql::Result<SQL<'static>> {
    Ok(ql!(
        "SELECT ", f.field("friends")?, " FROM ", f.record("henry"), ""
    ))
}

#[tokio::test]
async fn chain_submits_all_statements_and_returns_last() {
    let db = setup_db();
    db.connection().respond(vec![
        json!(null),
        json!([{"done": true}]),
        json!([{"friends": ["user:tobie"]}]),
    ]);

    let rows = db
        .pipe::<Todo, _>(mark_done)
        .unwrap()
        .pipe::<User, _>(henrys_friends)
        .unwrap()
        .exec()
        .await
        .unwrap();

    assert_eq!(rows.into_value(), json!([{"friends": ["user:tobie"]}]));

    let expected = format!(
        "{};{};",
        mark_done(&Scope::new()).unwrap().compile(),
        henrys_friends(&Scope::new()).unwrap().compile(),
    );
    assert_eq!(db.connection().queries(), [expected.clone()]);
    assert_eq!(
        expected,
        "LET $done = true;\nUPDATE Todo SET done = $done;SELECT ->friends->user AS friends FROM user:henry;"
    );
}

#[tokio::test]
async fn chain_keeps_order_and_duplicates() {
    let db = setup_db();
    let chain = Chain::begin::<User, _>(|f| Ok(ql!("SELECT count() FROM ", f.table(), "")))
        .unwrap()
        .next::<User, _>(|f| Ok(ql!("SELECT count() FROM ", f.table(), "")))
        .unwrap()
        .push(ql!("RETURN ", 1, ""));

    assert_eq!(chain.len(), 3);
    assert_eq!(
        chain.text(),
        "SELECT count() FROM user;SELECT count() FROM user;RETURN 1;"
    );

    let rows = chain.exec(db.connection()).await.unwrap();
    assert_eq!(rows.into_value(), json!([]));
    assert_eq!(db.connection().query_count(), 1);
}

#[tokio::test]
async fn builder_errors_stop_the_chain() {
    let db = setup_db();
    let err = db
        .pipe::<Todo, _>(mark_done)
        .unwrap()
        .pipe::<User, _>(|f| Ok(ql!("SELECT ", f.field("age")?, " FROM user")))
        .unwrap_err();
    assert!(matches!(err, SurqlError::FieldNotFound { .. }));
    assert_eq!(db.connection().query_count(), 0);
}

#[tokio::test]
async fn empty_chain_is_an_error() {
    let db = setup_db();
    let err = Chain::new().exec(db.connection()).await.unwrap_err();
    assert!(matches!(err, SurqlError::EmptyChain));
    assert_eq!(db.connection().query_count(), 0);
}

#[tokio::test]
async fn failures_propagate_unchanged() {
    let db = setup_db();
    db.connection().fail("parse error at line 1");
    let err = db
        .pipe::<Todo, _>(mark_done)
        .unwrap()
        .exec()
        .await
        .unwrap_err();
    assert!(matches!(err, SurqlError::Execution(ref msg) if msg == "parse error at line 1"));
    assert_eq!(db.connection().query_count(), 1);
}

#[tokio::test]
async fn model_query_runs_one_statement() {
    let db = setup_db();
    let query = db
        .query::<User, _>(|f| {
            Ok(ql!(
                "SELECT ", f.fields(["first", "last"])?, " FROM ", f.table(),
                " WHERE ", string::len(f.field("first")?), " > ", bind("min", 3),
                " ", limit(10), ""
            ))
        })
        .unwrap();

    assert_eq!(
        query.statement().to_string(),
        "LET $min = 3;\nSELECT first, last FROM user WHERE string::len(first) > $min LIMIT 10"
    );
    query.exec().await.unwrap();
    assert_eq!(db.connection().query_count(), 1);
}
