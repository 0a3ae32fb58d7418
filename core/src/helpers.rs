//! Statement builders shared by the model operations.

use crate::sql::{SQL, Token};
use crate::value::RecordId;

/// `table` or `table:id`
pub fn target(table: &str, id: Option<&str>) -> SQL<'static> {
    match id {
        Some(id) => SQL::value(RecordId::new(table, id)),
        None => SQL::ident(table.to_owned()),
    }
}

/// Helper function to create a SELECT clause, optionally in VALUE mode
pub fn select<'a>(fields: SQL<'a>, value: bool) -> SQL<'a> {
    let sql = SQL::token(Token::SELECT);
    let sql = if value { sql.push(Token::VALUE) } else { sql };
    sql.append(fields)
}

/// Helper function to create a FROM clause
pub fn from<'a>(target: SQL<'a>) -> SQL<'a> {
    SQL::token(Token::FROM).append(target)
}

/// Helper function to create a WHERE clause
pub fn where_clause<'a>(condition: SQL<'a>) -> SQL<'a> {
    SQL::token(Token::WHERE).append(condition)
}

/// Helper function to create a FETCH clause
pub fn fetch<'a, I, S>(fields: I) -> SQL<'a>
where
    I: IntoIterator<Item = S>,
    S: Into<std::borrow::Cow<'a, str>>,
{
    SQL::token(Token::FETCH).append(SQL::join(
        fields.into_iter().map(|f| SQL::raw(f)),
        Token::COMMA,
    ))
}

/// `CREATE <table> CONTENT <json>`
pub fn create(table: &str, content: &serde_json::Value) -> SQL<'static> {
    SQL::token(Token::CREATE)
        .append(SQL::ident(table.to_owned()))
        .push(Token::CONTENT)
        .append(SQL::json(content))
}

/// `INSERT INTO <table> <json>`
pub fn insert(table: &str, data: &serde_json::Value) -> SQL<'static> {
    SQL::token(Token::INSERT)
        .push(Token::INTO)
        .append(SQL::ident(table.to_owned()))
        .append(SQL::json(data))
}

/// How `UPDATE` applies its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Replace the whole record
    Content,
    /// Merge into the record
    Merge,
    /// Apply JSON patch operations
    Patch,
}

impl UpdateMode {
    pub const fn token(&self) -> Token {
        match self {
            UpdateMode::Content => Token::CONTENT,
            UpdateMode::Merge => Token::MERGE,
            UpdateMode::Patch => Token::PATCH,
        }
    }
}

/// `UPDATE <target> CONTENT|MERGE|PATCH <json>`
pub fn update(target: SQL<'static>, mode: UpdateMode, data: &serde_json::Value) -> SQL<'static> {
    SQL::token(Token::UPDATE)
        .append(target)
        .push(mode.token())
        .append(SQL::json(data))
}

/// `DELETE <target>`
pub fn delete(target: SQL<'static>) -> SQL<'static> {
    SQL::token(Token::DELETE).append(target)
}

/// `RELATE <from>-><edge>-><to>`
pub fn relate(from: &RecordId, edge: &str, edge_id: Option<&str>, to: &RecordId) -> SQL<'static> {
    let edge = match edge_id {
        Some(id) => RecordId::new(edge, id).to_string(),
        None => edge.to_owned(),
    };
    SQL::token(Token::RELATE).append(SQL::raw(format!("{from}->{edge}->{to}")))
}

/// `INFO FOR TABLE <table>`
pub fn info_for_table(table: &str) -> SQL<'static> {
    SQL::token(Token::INFO)
        .push(Token::FOR)
        .push(Token::TABLE)
        .append(SQL::ident(table.to_owned()))
}

/// `LIVE SELECT [DIFF | *] FROM <table>`
///
/// Statement text for [`Connection::live`](crate::connection::Connection::live)
/// implementations; the facade never submits it through `query`.
pub fn live_select(table: &str, diff: bool) -> SQL<'static> {
    SQL::token(Token::LIVE)
        .push(Token::SELECT)
        .push(if diff { Token::DIFF } else { Token::STAR })
        .push(Token::FROM)
        .append(SQL::ident(table.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn select_statement() {
        let sql = select(SQL::raw("name"), true)
            .append(from(target("user", Some("user:henry"))))
            .append(where_clause(SQL::raw("age > 3")))
            .append(fetch(["friends", "best"]));
        assert_eq!(
            sql.sql(),
            "SELECT VALUE name FROM user:henry WHERE age > 3 FETCH friends, best"
        );
    }

    #[test]
    fn write_statements() {
        assert_eq!(
            create("user", &json!({"name": "henry"})).sql(),
            r#"CREATE user CONTENT {"name":"henry"}"#
        );
        assert_eq!(
            insert("user", &json!([{"a": 1}, {"a": 2}])).sql(),
            r#"INSERT INTO user [{"a":1},{"a":2}]"#
        );
        assert_eq!(
            update(target("user", Some("a")), UpdateMode::Merge, &json!({"x": true})).sql(),
            r#"UPDATE user:a MERGE {"x":true}"#
        );
        assert_eq!(delete(target("user", None)).sql(), "DELETE user");
    }

    #[test]
    fn relate_and_info() {
        let from = RecordId::new("user", "a");
        let to = RecordId::new("user", "b");
        assert_eq!(
            relate(&from, "friends", None, &to).sql(),
            "RELATE user:a->friends->user:b"
        );
        assert_eq!(
            relate(&from, "friends", Some("f1"), &to).sql(),
            "RELATE user:a->friends:f1->user:b"
        );
        assert_eq!(info_for_table("user").sql(), "INFO FOR TABLE user");
        assert_eq!(live_select("user", true).sql(), "LIVE SELECT DIFF FROM user");
    }
}
