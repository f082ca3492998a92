//! amity-analyze: acquaintance chain, school circle, and connector analysis
//! over an immutable social graph.
//!
//! The three analyses take the graph read-only and keep all working state
//! (visited flags, BFS frontiers, discovery/low-link arrays) local to each
//! call, so independent analyses can share one graph without locking.

pub mod chain;
pub mod circles;
pub mod connectors;
pub mod error;
pub mod types;

pub use error::AnalyzeError;
pub use types::{ChainReport, CirclesReport, ConnectorsReport, GraphStats};

use std::path::Path;
use std::time::Instant;

use amity_graph::{roster, SocialGraph};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// Analysis engine over one social graph.
///
/// Owns the graph and wraps each analysis in a timestamped report suitable
/// for JSON output.
#[derive(Debug)]
pub struct AnalysisEngine {
    graph: SocialGraph,
}

impl AnalysisEngine {
    /// Wrap an already-built graph.
    pub fn new(graph: SocialGraph) -> Self {
        Self { graph }
    }

    /// Build the graph from a roster file and wrap it.
    pub fn from_roster(path: impl AsRef<Path>) -> error::Result<Self> {
        Ok(Self::new(roster::load(path)?))
    }

    /// The graph under analysis.
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Shortest acquaintance chain between two named people.
    pub fn chain_report(&self, from: &str, to: &str) -> error::Result<ChainReport> {
        let start = Instant::now();
        let chain = chain::shortest_chain(&self.graph, from, to)?;
        let computation_ms = start.elapsed().as_millis() as u64;

        info!(
            from,
            to,
            hops = chain.as_ref().map(|c| c.len().saturating_sub(1)),
            computation_ms,
            "chain analysis complete"
        );

        Ok(ChainReport {
            run_id: Uuid::new_v4(),
            from: from.to_string(),
            to: to.to_string(),
            chain,
            graph_stats: GraphStats::of(&self.graph),
            computed_at: Utc::now(),
            computation_ms,
        })
    }

    /// Friend circles within one school.
    pub fn circles_report(&self, school: &str) -> CirclesReport {
        let start = Instant::now();
        let circles = circles::school_circles(&self.graph, school);
        let computation_ms = start.elapsed().as_millis() as u64;

        info!(
            school,
            circles = circles.len(),
            computation_ms,
            "circle analysis complete"
        );

        CirclesReport {
            run_id: Uuid::new_v4(),
            school: school.to_string(),
            circles,
            graph_stats: GraphStats::of(&self.graph),
            computed_at: Utc::now(),
            computation_ms,
        }
    }

    /// People whose removal would fragment the friendship graph.
    pub fn connectors_report(&self) -> ConnectorsReport {
        let start = Instant::now();
        let connectors = connectors::connectors(&self.graph);
        let computation_ms = start.elapsed().as_millis() as u64;

        info!(
            connectors = connectors.len(),
            computation_ms,
            "connector analysis complete"
        );

        ConnectorsReport {
            run_id: Uuid::new_v4(),
            connectors,
            graph_stats: GraphStats::of(&self.graph),
            computed_at: Utc::now(),
            computation_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AnalysisEngine {
        let graph = SocialGraph::build(
            vec![
                ("sam".to_string(), Some("rutgers".to_string())),
                ("jane".to_string(), Some("rutgers".to_string())),
                ("bob".to_string(), None),
            ],
            vec![
                ("sam".to_string(), "jane".to_string()),
                ("jane".to_string(), "bob".to_string()),
            ],
        )
        .unwrap();
        AnalysisEngine::new(graph)
    }

    #[test]
    fn chain_report_carries_stats_and_payload() {
        let report = engine().chain_report("sam", "bob").unwrap();

        assert_eq!(report.from, "sam");
        assert_eq!(report.to, "bob");
        assert_eq!(report.chain, Some(vec!["sam".into(), "jane".into(), "bob".into()]));
        assert_eq!(report.graph_stats.total_people, 3);
        assert_eq!(report.graph_stats.total_friendships, 2);
        assert_eq!(report.graph_stats.schools, 1);
    }

    #[test]
    fn reports_serialize_to_json() {
        let engine = engine();

        let chain = serde_json::to_string(&engine.chain_report("sam", "sam").unwrap()).unwrap();
        assert!(chain.contains("\"chain\":[\"sam\"]"));

        let circles = serde_json::to_string(&engine.circles_report("rutgers")).unwrap();
        assert!(circles.contains("\"circles\":[[\"sam\",\"jane\"]]"));

        let connectors = serde_json::to_string(&engine.connectors_report()).unwrap();
        assert!(connectors.contains("\"connectors\":[\"jane\"]"));
    }

    #[test]
    fn unknown_person_propagates() {
        let err = engine().chain_report("sam", "ghost").unwrap_err();
        assert!(matches!(err, AnalyzeError::UnknownPerson { name } if name == "ghost"));
    }

    #[test]
    fn engine_is_debug_printable() {
        let dump = format!("{:?}", engine());
        assert!(dump.contains("sam"));
    }

    #[test]
    fn runs_get_distinct_ids() {
        let engine = engine();
        let a = engine.connectors_report();
        let b = engine.connectors_report();
        assert_ne!(a.run_id, b.run_id);
    }
}
