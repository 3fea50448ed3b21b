//! Error types for dollar-rs.
//!
//! Selections never fail; these errors come from direct tree edits on the
//! in-memory [`Dom`](crate::dom::Dom) and from parsing operations and
//! snapshots.

use thiserror::Error;

use crate::dom::NodeId;

/// Result type alias for dollar-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of a [`Selection`](crate::Selection).
#[derive(Debug, Error)]
pub enum Error {
    /// Node handle does not belong to this document.
    #[error("Invalid node handle: {0:?}")]
    InvalidNode(NodeId),

    /// Operation requires an element but the node is text, a comment or the
    /// document itself.
    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// Insertion would create a cycle or move the document node.
    #[error("Hierarchy request failed: {0}")]
    HierarchyRequest(String),

    /// Name or class token is empty or contains characters it cannot hold.
    #[error("Invalid token: '{0}'")]
    InvalidToken(String),

    /// Operation string could not be parsed.
    #[error("Invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },

    /// Snapshot content cannot be loaded into a document.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
