//! Command-line front end for dollar-rs.
//!
//! Reads a document (HTML or snapshot JSON), resolves a selector against it
//! and either reports the matches (`query`) or applies a chain of operations
//! and prints the resulting document (`apply`).

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
