//! Shared type definitions for surql
//!
//! This crate provides the small vocabulary shared by the surql crates:
//!
//! - [`Strategy`] - Transport mode of a connection (WebSocket, HTTP)
//! - [`Direction`] - Graph edge direction (`->`, `<-`)
//! - [`ScalarType`] - Value kinds used in field declarations
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

mod graph;
mod scalar;
mod strategy;

pub use graph::Direction;
pub use scalar::ScalarType;
pub use strategy::{Strategy, StrategyParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Direction, ScalarType, Strategy};
}
