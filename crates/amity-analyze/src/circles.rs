//! School circle discovery.
//!
//! A circle is a maximal group of people who attend one school and are
//! mutually reachable through friends at that same school — the connected
//! components of the school-induced subgraph, not graph-theoretic cliques.

use std::collections::VecDeque;

use amity_graph::SocialGraph;
use tracing::debug;

/// Find every friend circle within `school`.
///
/// Circles are disjoint, cover everyone whose school matches exactly, and
/// people at other schools never appear, not even as intermediate hops.
/// Returns an empty vector when nobody attends the school.
pub fn school_circles(graph: &SocialGraph, school: &str) -> Vec<Vec<String>> {
    let mut visited = vec![false; graph.person_count()];
    let mut circles = Vec::new();

    for start in 0..graph.person_count() {
        if visited[start] {
            continue;
        }
        if !attends(graph, start, school) {
            // Can never seed or join a circle for this school.
            visited[start] = true;
            continue;
        }

        // BFS confined to same-school friends. Marking at enqueue time keeps
        // membership duplicate-free; friends at other schools stay unvisited
        // here so their own circles can still claim them.
        let mut members = Vec::new();
        let mut frontier = VecDeque::new();
        visited[start] = true;
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            members.push(graph.person(current).name.clone());
            for &friend in graph.friends(current) {
                if !visited[friend] && attends(graph, friend, school) {
                    visited[friend] = true;
                    frontier.push_back(friend);
                }
            }
        }

        circles.push(members);
    }

    debug!(school, circles = circles.len(), "school circles computed");
    circles
}

fn attends(graph: &SocialGraph, index: usize, school: &str) -> bool {
    graph.person(index).school.as_deref() == Some(school)
}
