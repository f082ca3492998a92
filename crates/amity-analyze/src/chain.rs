//! Shortest acquaintance chain between two people.
//!
//! Unweighted BFS over the friendship adjacency with a parent link per
//! discovered person, walked backwards for path reconstruction.

use std::collections::VecDeque;

use amity_graph::SocialGraph;
use tracing::debug;

use crate::error::{AnalyzeError, Result};

/// Find the shortest chain of names from `from` to `to`.
///
/// Returns `Ok(None)` when both people exist but no chain connects them,
/// and `AnalyzeError::UnknownPerson` when either name is not in the graph.
/// The chain starts with `from`, ends with `to`, and every consecutive pair
/// is a friendship edge; its length minus one is the graph distance.
pub fn shortest_chain(graph: &SocialGraph, from: &str, to: &str) -> Result<Option<Vec<String>>> {
    let src = graph.lookup(from).ok_or_else(|| AnalyzeError::UnknownPerson {
        name: from.to_string(),
    })?;
    let dst = graph.lookup(to).ok_or_else(|| AnalyzeError::UnknownPerson {
        name: to.to_string(),
    })?;

    // A person is trivially chained to themselves; the parent walk below
    // would drop the source for this case.
    if src == dst {
        return Ok(Some(vec![graph.person(src).name.clone()]));
    }

    let mut parent: Vec<Option<usize>> = vec![None; graph.person_count()];
    let mut discovered = vec![false; graph.person_count()];
    let mut frontier = VecDeque::new();

    discovered[src] = true;
    frontier.push_back(src);

    while let Some(current) = frontier.pop_front() {
        // BFS explores by increasing distance, so the first time the
        // destination is dequeued its distance is already minimal.
        if current == dst {
            break;
        }
        for &friend in graph.friends(current) {
            if !discovered[friend] {
                discovered[friend] = true;
                parent[friend] = Some(current);
                frontier.push_back(friend);
            }
        }
    }

    if !discovered[dst] {
        debug!(from, to, "no chain between endpoints");
        return Ok(None);
    }

    let mut indices = vec![dst];
    let mut current = dst;
    while let Some(prev) = parent[current] {
        indices.push(prev);
        current = prev;
    }
    indices.reverse();

    Ok(Some(
        indices
            .into_iter()
            .map(|i| graph.person(i).name.clone())
            .collect(),
    ))
}
