//! Error types for the amity-graph crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Malformed roster line {line}: {text:?}")]
    Malformed { line: usize, text: String },

    #[error("Duplicate person name: {name}")]
    DuplicateName { name: String },

    #[error("Friendship names an undeclared person: {name}")]
    UnknownName { name: String },

    #[error("Person cannot befriend themselves: {name}")]
    SelfFriendship { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
