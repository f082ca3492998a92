//! Report types for graph analyses.

use amity_graph::SocialGraph;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of a shortest-chain query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReport {
    pub run_id: Uuid,
    pub from: String,
    pub to: String,
    /// Names along the shortest chain, endpoints included. `None` when the
    /// two people are in different connected components.
    pub chain: Option<Vec<String>>,
    pub graph_stats: GraphStats,
    pub computed_at: DateTime<Utc>,
    pub computation_ms: u64,
}

/// Result of a school-circle query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirclesReport {
    pub run_id: Uuid,
    pub school: String,
    /// Maximal same-school friend groups. Empty when nobody attends the school.
    pub circles: Vec<Vec<String>>,
    pub graph_stats: GraphStats,
    pub computed_at: DateTime<Utc>,
    pub computation_ms: u64,
}

/// Result of a connector query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorsReport {
    pub run_id: Uuid,
    /// People whose removal would split the friendship graph.
    pub connectors: Vec<String>,
    pub graph_stats: GraphStats,
    pub computed_at: DateTime<Utc>,
    pub computation_ms: u64,
}

/// Summary statistics about the analyzed graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_people: usize,
    pub total_friendships: usize,
    pub schools: usize,
}

impl GraphStats {
    pub fn of(graph: &SocialGraph) -> Self {
        Self {
            total_people: graph.person_count(),
            total_friendships: graph.friendship_count(),
            schools: graph.school_count(),
        }
    }
}
