//! amity-graph: immutable social graph model and roster construction.
//!
//! A `SocialGraph` is an arena of `Person` records addressed by dense index,
//! with friendships stored as index lists for O(1) neighbor lookup. The graph
//! is built once — from a roster file or from in-memory declarations — and is
//! read-only afterwards, so any number of analyses can share a reference to it.

pub mod error;
pub mod graph;
pub mod roster;

pub use error::GraphError;
pub use graph::{Person, SocialGraph};
