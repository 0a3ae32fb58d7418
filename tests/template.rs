use common::{Todo, User, setup_db};
use serde_json::json;
use surql::prelude::*;

mod common;

#[test]
fn models_interpolate_as_record_links() {
    let henry = User::new("henry");
    let sql = ql!("SELECT * FROM ", &henry, "->friends->user");
    assert_eq!(sql.sql(), "SELECT * FROM user:henry->friends->user");

    let statement = ql!("RELATE ", bind("a", &henry), "->friends->", bind("b", "user:tobie"), "")
        .compile();
    assert_eq!(
        statement.bindings(),
        ["LET $a = user:henry;", "LET $b = user:tobie;"]
    );
    assert_eq!(statement.text(), "RELATE $a->friends->$b");
}

#[test]
fn structured_bindings_are_json() {
    let statement = ql!(
        "UPDATE user MERGE ",
        bind("patch", json!({"tags": ["a", "b"], "age": 30, "nick": null})),
        ""
    )
    .compile();
    assert_eq!(
        statement.to_string(),
        "LET $patch = {\"age\":30,\"nick\":NULL,\"tags\":[\"a\",\"b\"]};\nUPDATE user MERGE $patch"
    );
}

#[test]
fn inline_strings_are_single_quoted() {
    let sql = ql!("SELECT * FROM user WHERE bio = ", "it's \"fine\"", "");
    assert_eq!(sql.sql(), r#"SELECT * FROM user WHERE bio = 'it\'s "fine"'"#);
}

#[test]
fn scope_fragments_in_templates() {
    let f = Scope::<Todo>::new();
    let sql = ql!(
        "SELECT ", string::uppercase(f.field("title").unwrap()).alias("title"), ", ",
        count(()).alias("total"), " FROM ", f.table(), " WHERE ",
        string::contains(f.field("body").unwrap(), "urgent"), " AND ",
        f.field("owner").unwrap(), " = ", f.json(&"user:henry").unwrap(),
        " GROUP ALL"
    );
    assert_eq!(
        sql.sql(),
        "SELECT string::uppercase(title) AS title, count() AS total FROM Todo WHERE string::contains(body, 'urgent') AND owner = \"user:henry\" GROUP ALL"
    );
}

#[test]
fn function_families() {
    let name = SQL::raw("name");
    assert_eq!(string::is_email(name.clone()).sql(), "string::is::email(name)");
    assert_eq!(string::slice(name.clone(), 0, 3).sql(), "string::slice(name, 0, 3)");
    assert_eq!(array::distinct(SQL::raw("tags")).sql(), "array::distinct(tags)");
    assert_eq!(math::round(SQL::raw("score")).sql(), "math::round(score)");
    assert_eq!(time::now().sql(), "time::now()");
    assert_eq!(meta::tb(SQL::raw("id")).sql(), "meta::tb(id)");
    assert_eq!(
        ql!("SELECT ", value(name), " FROM user ", start(5), " ", val("TIMEOUT 5s"), "").sql(),
        "SELECT VALUE name FROM user START 5 TIMEOUT 5s"
    );
}

#[tokio::test]
async fn compiled_text_reaches_the_connection() {
    let db = setup_db();
    db.raw(ql!(
        "SELECT * FROM ",
        Scope::<User>::new().table(),
        " WHERE first = ",
        bind("first", "Henry"),
        ""
    ))
    .await
    .unwrap();
    assert_eq!(
        db.connection().last_query().unwrap(),
        "LET $first = \"Henry\";\nSELECT * FROM user WHERE first = $first"
    );
}
