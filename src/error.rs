//! Error types for rd2md operations.

use thiserror::Error;

use crate::model::NodeId;

/// Errors that can occur while loading or rendering a document tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing node: {0}")]
    MissingNode(NodeId),

    #[error("Malformed tree at node {node}: {reason}")]
    Malformed { node: NodeId, reason: String },

    #[error("Nesting too deep at node {node} (limit {limit})")]
    TooDeep { node: NodeId, limit: usize },
}

impl Error {
    pub(crate) fn malformed(node: NodeId, reason: impl Into<String>) -> Self {
        Error::Malformed {
            node,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
