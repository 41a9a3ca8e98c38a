//! Display filtering.
//!
//! A [`PredicateKind`] decides which entries the Presentation Layer shows.
//! Filtering never touches the list itself: [`visible_set`] is a pure function
//! from a snapshot to the ids that should be displayed.

use crate::model::{Entry, EntryId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The active display filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateKind {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 3] = [
        PredicateKind::All,
        PredicateKind::Completed,
        PredicateKind::Incomplete,
    ];

    /// Lenient parse for values coming from UI attributes.
    ///
    /// Anything that is not `completed` or `incomplete` shows everything.
    pub fn from_attr(raw: &str) -> Self {
        raw.parse().unwrap_or(PredicateKind::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateKind::All => "all",
            PredicateKind::Completed => "completed",
            PredicateKind::Incomplete => "incomplete",
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            PredicateKind::All => true,
            PredicateKind::Completed => entry.completed,
            PredicateKind::Incomplete => !entry.completed,
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredicateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PredicateKind::All),
            "completed" => Ok(PredicateKind::Completed),
            "incomplete" => Ok(PredicateKind::Incomplete),
            other => Err(format!("unknown filter `{other}`")),
        }
    }
}

/// Ids of the entries that `kind` lets through.
pub fn visible_set(entries: &[Entry], kind: PredicateKind) -> HashSet<EntryId> {
    entries
        .iter()
        .filter(|entry| kind.matches(entry))
        .map(|entry| entry.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("a".into(), "Apples"),
            Entry::new("b".into(), "Bread").with_completed(true),
            Entry::new("c".into(), "Cheese"),
        ]
    }

    fn ids(raw: &[&str]) -> HashSet<EntryId> {
        raw.iter().map(|s| EntryId::from(*s)).collect()
    }

    #[test]
    fn test_all_shows_everything() {
        assert_eq!(visible_set(&sample(), PredicateKind::All), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_completed_only() {
        assert_eq!(visible_set(&sample(), PredicateKind::Completed), ids(&["b"]));
    }

    #[test]
    fn test_incomplete_only() {
        assert_eq!(visible_set(&sample(), PredicateKind::Incomplete), ids(&["a", "c"]));
    }

    #[test]
    fn test_empty_list() {
        for kind in PredicateKind::ALL {
            assert!(visible_set(&[], kind).is_empty());
        }
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("completed".parse::<PredicateKind>(), Ok(PredicateKind::Completed));
        assert_eq!(" Incomplete ".parse::<PredicateKind>(), Ok(PredicateKind::Incomplete));
        assert!("done".parse::<PredicateKind>().is_err());
    }

    #[test]
    fn test_from_attr_falls_back_to_all() {
        assert_eq!(PredicateKind::from_attr("done"), PredicateKind::All);
        assert_eq!(PredicateKind::from_attr(""), PredicateKind::All);
        assert_eq!(PredicateKind::from_attr("completed"), PredicateKind::Completed);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in PredicateKind::ALL {
            assert_eq!(kind.to_string().parse::<PredicateKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PredicateKind::Incomplete).unwrap(),
            "\"incomplete\""
        );
    }
}
