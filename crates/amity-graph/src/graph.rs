//! The in-memory social graph: people, schools, and friendship adjacency.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};

/// A person in the acquaintance graph.
#[derive(Debug, Clone)]
pub struct Person {
    /// Dense index (0..N-1), stable for the graph's lifetime.
    pub index: usize,
    /// Unique, case-sensitive name.
    pub name: String,
    /// School affiliation. `None` means no school.
    pub school: Option<String>,
    /// Indices of direct friends, in declaration order. Symmetric: if A
    /// lists B, B lists A.
    pub friends: Vec<usize>,
}

/// Immutable graph of people and their friendships.
///
/// People are owned by the graph and addressed by dense index; friendships
/// are stored as index lists rather than cross-references, so neighbor
/// lookup is O(1) and the structure stays acyclic for the borrow checker.
#[derive(Debug)]
pub struct SocialGraph {
    people: Vec<Person>,
    name_index: HashMap<String, usize>,
}

impl SocialGraph {
    /// Build a graph from person declarations and friendship pairs.
    ///
    /// Rejects duplicate names, friendships naming undeclared people, and
    /// self-friendships. A repeated friendship pair is tolerated and inserted
    /// only once. Each accepted pair lands in both adjacency lists.
    pub fn build<P, F>(people: P, friendships: F) -> Result<Self>
    where
        P: IntoIterator<Item = (String, Option<String>)>,
        F: IntoIterator<Item = (String, String)>,
    {
        let mut graph = Self {
            people: Vec::new(),
            name_index: HashMap::new(),
        };

        for (name, school) in people {
            let index = graph.people.len();
            if graph.name_index.insert(name.clone(), index).is_some() {
                return Err(GraphError::DuplicateName { name });
            }
            graph.people.push(Person {
                index,
                name,
                school,
                friends: Vec::new(),
            });
        }

        for (a, b) in friendships {
            let ia = graph
                .lookup(&a)
                .ok_or_else(|| GraphError::UnknownName { name: a.clone() })?;
            let ib = graph
                .lookup(&b)
                .ok_or_else(|| GraphError::UnknownName { name: b.clone() })?;
            if ia == ib {
                return Err(GraphError::SelfFriendship { name: a });
            }
            if graph.people[ia].friends.contains(&ib) {
                continue;
            }
            graph.people[ia].friends.push(ib);
            graph.people[ib].friends.push(ia);
        }

        Ok(graph)
    }

    /// Resolve a name to its dense index.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// The person at `index`.
    ///
    /// Indices come from this graph (`lookup`, adjacency lists, iteration up
    /// to `person_count`), so they are always in range.
    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }

    /// Friend indices of the person at `index`, in declaration order.
    pub fn friends(&self, index: usize) -> &[usize] {
        &self.people[index].friends
    }

    /// All people, in index order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of people in the graph.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of distinct friendships (each undirected edge counted once).
    pub fn friendship_count(&self) -> usize {
        self.people.iter().map(|p| p.friends.len()).sum::<usize>() / 2
    }

    /// Number of distinct schools named by at least one person.
    pub fn school_count(&self) -> usize {
        self.people
            .iter()
            .filter_map(|p| p.school.as_deref())
            .collect::<HashSet<_>>()
            .len()
    }
}
