use serde::{Deserialize, Serialize};
use surql::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first: String,
    pub last: String,
}

impl Model for User {
    fn describe(table: &mut TableBuilder) {
        table
            .name("user")
            .index(IndexSpec::new(["first", "last"]).unique())
            .scalar("first", ScalarType::String)
            .scalar("last", ScalarType::String)
            .field(
                FieldDescriptor::scalar("email", ScalarType::String)
                    .with_index(FieldIndex::new("email_idx").unique()),
            )
            .field(FieldDescriptor::object(
                "address",
                Shape::new()
                    .field("city", ScalarType::String)
                    .optional("zip", ScalarType::String),
            ))
            .relation(
                "friends",
                RelationParams::new(Direction::Out, ModelRef::of::<Friends>())
                    .to(Direction::Out, ModelRef::of::<User>()),
            )
            .relation(
                "fans",
                RelationParams::new(Direction::In, ModelRef::of::<Likes>())
                    .to(Direction::In, ModelRef::of::<User>()),
            );
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl User {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            ..Self::default()
        }
    }
}

pub struct Friends;

impl Model for Friends {
    fn describe(table: &mut TableBuilder) {
        table.name("friends");
    }

    fn id(&self) -> &str {
        ""
    }
}

pub struct Likes;

impl Model for Likes {
    fn describe(table: &mut TableBuilder) {
        table.name("likes");
    }

    fn id(&self) -> &str {
        ""
    }
}

/// No explicit table name: the table is named after the type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl Model for Todo {
    fn describe(table: &mut TableBuilder) {
        table
            .scalar("title", ScalarType::String)
            .scalar("done", ScalarType::Bool)
            .record("owner", ModelRef::of::<User>())
            .field(
                FieldDescriptor::scalar("body", ScalarType::String)
                    .with_index(FieldIndex::new("body_search").search()),
            );
    }

    fn id(&self) -> &str {
        &self.id
    }
}
