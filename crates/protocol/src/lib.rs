//! Wire types for dollar-rs documents.
//!
//! This crate contains the serde-serializable shapes used to move a document
//! tree in and out of the in-memory DOM: the CLI reads and writes them as
//! JSON, and tests use them to describe fixtures.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * Tree-shaped: A snapshot owns its children, there are no node ids
//! * Stable: Changes only when the JSON format changes
//!
//! The live, mutable tree is `dollar::dom::Dom` in `dollar-rs`.

pub mod snapshot;

pub use snapshot::*;
