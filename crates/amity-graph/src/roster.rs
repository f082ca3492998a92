//! Roster file parsing.
//!
//! The persisted graph description, one record per line:
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|n
//! aparna|y|rutgers
//! bob|n
//! sam|jane
//! jane|aparna
//! ```
//!
//! The first line is the person count; the next N lines declare people
//! (`name|y|school` for students, `name|n` for everyone else); each remaining
//! line declares one friendship between two previously declared people.
//! Blank lines are skipped and fields are whitespace-trimmed.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{GraphError, Result};
use crate::graph::SocialGraph;

/// Load and parse a roster file.
pub fn load(path: impl AsRef<Path>) -> Result<SocialGraph> {
    let text = fs::read_to_string(path.as_ref())?;
    let graph = parse(&text)?;
    info!(
        roster = %path.as_ref().display(),
        people = graph.person_count(),
        friendships = graph.friendship_count(),
        "loaded roster"
    );
    Ok(graph)
}

/// Parse roster text into a graph.
pub fn parse(text: &str) -> Result<SocialGraph> {
    // (1-based line number, trimmed content) for every non-blank line.
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    let Some(&(header_line, header)) = lines.first() else {
        return Err(GraphError::Malformed {
            line: 1,
            text: "empty roster".to_string(),
        });
    };
    let count: usize = header.parse().map_err(|_| GraphError::Malformed {
        line: header_line,
        text: header.to_string(),
    })?;

    // `lines` is non-empty here; this form cannot overflow on an absurd count.
    if lines.len() - 1 < count {
        return Err(GraphError::Malformed {
            line: header_line,
            text: format!("declares {count} people, roster has {}", lines.len() - 1),
        });
    }

    let mut people = Vec::with_capacity(count);
    for &(line, decl) in &lines[1..=count] {
        people.push(parse_person(line, decl)?);
    }

    let mut friendships = Vec::new();
    for &(line, entry) in &lines[count + 1..] {
        friendships.push(parse_friendship(line, entry)?);
    }

    SocialGraph::build(people, friendships)
}

fn parse_person(line: usize, decl: &str) -> Result<(String, Option<String>)> {
    let parts: Vec<&str> = decl.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [name, "n"] if !name.is_empty() => Ok(((*name).to_string(), None)),
        [name, "y", school] if !name.is_empty() && !school.is_empty() => {
            Ok(((*name).to_string(), Some((*school).to_string())))
        }
        _ => Err(GraphError::Malformed {
            line,
            text: decl.to_string(),
        }),
    }
}

fn parse_friendship(line: usize, entry: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [a, b] if !a.is_empty() && !b.is_empty() => {
            Ok(((*a).to_string(), (*b).to_string()))
        }
        _ => Err(GraphError::Malformed {
            line,
            text: entry.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
4
sam|y|rutgers
jane|n
aparna|y|rutgers
bob|n
sam|jane
jane|aparna
";

    #[test]
    fn parse_sample_roster() {
        let graph = parse(SAMPLE).unwrap();

        assert_eq!(graph.person_count(), 4);
        assert_eq!(graph.friendship_count(), 2);
        assert_eq!(graph.person(0).school.as_deref(), Some("rutgers"));
        assert_eq!(graph.person(1).school, None);

        let jane = graph.lookup("jane").unwrap();
        assert_eq!(graph.friends(jane).len(), 2);
    }

    #[test]
    fn blank_lines_and_padding_tolerated() {
        let text = "\n 2 \n\n  sam|y|rutgers\n\njane|n\n  sam | jane \n\n";
        let graph = parse(text).unwrap();

        assert_eq!(graph.person_count(), 2);
        assert_eq!(graph.friendship_count(), 1);
        assert_eq!(graph.lookup("sam"), Some(0));
    }

    #[test]
    fn empty_roster_rejected() {
        let err = parse("\n\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { line: 1, .. }));
    }

    #[test]
    fn bad_header_rejected() {
        let err = parse("people: 3\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { line: 1, .. }));
    }

    #[test]
    fn truncated_declarations_rejected() {
        let err = parse("3\nsam|n\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { .. }));
    }

    #[test]
    fn absurd_count_header_rejected() {
        // A count near usize::MAX must come back as Malformed, not panic.
        let err = parse("18446744073709551615\nsam|n\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { line: 1, .. }));
    }

    #[test]
    fn bad_person_line_rejected() {
        // Student flag without a school.
        let err = parse("1\nsam|y\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { line: 2, .. }));
    }

    #[test]
    fn bad_friendship_line_rejected() {
        let err = parse("2\nsam|n\njane|n\nsam|jane|extra\n").unwrap_err();
        assert!(matches!(err, GraphError::Malformed { line: 4, .. }));
    }

    #[test]
    fn construction_errors_surface() {
        let err = parse("2\nsam|n\njane|n\nsam|ghost\n").unwrap_err();
        assert!(matches!(err, GraphError::UnknownName { name } if name == "ghost"));
    }

    #[test]
    fn roster_with_no_friendships() {
        let graph = parse("1\nloner|n\n").unwrap();
        assert_eq!(graph.person_count(), 1);
        assert_eq!(graph.friendship_count(), 0);
    }
}
