use crate::tree::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("key segment must have a non-empty local id")]
    EmptyLocalId,

    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("malformed key bytes: {0}")]
    MalformedKey(#[from] std::str::Utf8Error),
}
