//! The two-group schedule value.

use std::collections::BTreeSet;

use serde::Serialize;

/// One side of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Group 0. Every component's BFS root lands here.
    First,
    /// Group 1.
    Second,
}

impl Group {
    /// The opposite group.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Position of this group in [`Schedule::groups`].
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Two disjoint sets of node labels.
///
/// Group labeling is only meaningful inside a connected component: which
/// side a component lands on says nothing about other components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    groups: [BTreeSet<String>; 2],
}

impl Schedule {
    /// Build a schedule from two groups. Disjointness is not checked here;
    /// use [`check_validity`](super::check_validity) for that.
    pub fn new(first: BTreeSet<String>, second: BTreeSet<String>) -> Self {
        Self {
            groups: [first, second],
        }
    }

    /// Both groups, as a proposal slice for [`check_validity`](super::check_validity).
    pub fn groups(&self) -> &[BTreeSet<String>] {
        &self.groups
    }

    /// One group.
    pub fn group(&self, group: Group) -> &BTreeSet<String> {
        &self.groups[group.index()]
    }

    /// Which group holds `label`, if any.
    pub fn group_of(&self, label: &str) -> Option<Group> {
        [Group::First, Group::Second]
            .into_iter()
            .find(|&g| self.group(g).contains(label))
    }

    /// Put `label` into `group`.
    pub(crate) fn assign(&mut self, label: &str, group: Group) {
        self.groups[group.index()].insert(label.to_string());
    }

    /// Total number of scheduled labels.
    pub fn len(&self) -> usize {
        self.groups.iter().map(BTreeSet::len).sum()
    }

    /// Whether neither group holds anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the schedule, returning `[first, second]`.
    pub fn into_groups(self) -> [BTreeSet<String>; 2] {
        self.groups
    }
}
