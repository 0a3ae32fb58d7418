#![allow(dead_code)]

mod connection;
pub mod schema;

pub use connection::FakeConnection;
pub use schema::*;

use surql::{Strategy, Surreal};

pub fn setup_db() -> Surreal<FakeConnection> {
    Surreal::new(FakeConnection::new(Strategy::WebSocket))
}

pub fn setup_http_db() -> Surreal<FakeConnection> {
    Surreal::new(FakeConnection::new(Strategy::Http))
}
