//! Connector (cut-vertex) detection.
//!
//! Standard articulation-point DFS: every vertex gets a discovery number and
//! a low-link value, the smallest discovery number its subtree can reach via
//! at most one back edge. A non-root vertex is a connector when some DFS
//! child cannot reach above it; a root is a connector when its DFS tree
//! branches into two or more subtrees.

use amity_graph::SocialGraph;
use tracing::debug;

/// Find every person whose removal would split the friendship graph.
///
/// Runs over every connected component, so disconnected graphs are covered.
/// People with at most one friend are never connectors and are filtered from
/// the candidates. Names come back in index order. Empty for an edgeless graph.
pub fn connectors(graph: &SocialGraph) -> Vec<String> {
    let n = graph.person_count();
    let mut dfs = Dfs {
        graph,
        disc: vec![None; n],
        low: vec![0; n],
        clock: 0,
        cut: vec![false; n],
    };

    for root in 0..n {
        if dfs.disc[root].is_none() {
            dfs.visit(root, None);
        }
    }

    let found: Vec<String> = (0..n)
        .filter(|&u| dfs.cut[u] && graph.friends(u).len() > 1)
        .map(|u| graph.person(u).name.clone())
        .collect();

    debug!(connectors = found.len(), "connector scan complete");
    found
}

struct Dfs<'g> {
    graph: &'g SocialGraph,
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    clock: usize,
    cut: Vec<bool>,
}

impl Dfs<'_> {
    fn visit(&mut self, u: usize, parent: Option<usize>) {
        let graph = self.graph;
        let disc_u = self.clock;
        self.clock += 1;
        self.disc[u] = Some(disc_u);
        self.low[u] = disc_u;
        let mut tree_children = 0;

        for &v in graph.friends(u) {
            match self.disc[v] {
                None => {
                    tree_children += 1;
                    self.visit(v, Some(u));
                    self.low[u] = self.low[u].min(self.low[v]);
                    // Child subtree cannot climb above u without u itself.
                    if parent.is_some() && self.low[v] >= disc_u {
                        self.cut[u] = true;
                    }
                }
                Some(disc_v) => {
                    if parent != Some(v) {
                        self.low[u] = self.low[u].min(disc_v);
                    }
                }
            }
        }

        if parent.is_none() && tree_children > 1 {
            self.cut[u] = true;
        }
    }
}
