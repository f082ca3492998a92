//! Error types for the amity-analyze crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Graph error: {0}")]
    Graph(#[from] amity_graph::GraphError),

    /// A queried name is absent from the graph. Distinct from "no path",
    /// which is a successful query with an empty answer.
    #[error("Unknown person: {name}")]
    UnknownPerson { name: String },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
