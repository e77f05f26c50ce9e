//! Append-only sequence of board snapshots.

use super::types::Snapshot;
use serde::Serialize;

/// Ordered snapshots from game start to the latest move.
///
/// Step 0 is always the empty board, so a history is never empty. Only the
/// controller can grow or cut it; everyone else gets a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty opening board.
    pub(crate) fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of recorded snapshots (moves made plus one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the opening snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Never empty: `new` seeds step 0 and `truncate_after` keeps it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Index of the most recent snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// All snapshots in order.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Drops every snapshot after `step`.
    pub(crate) fn truncate_after(&mut self, step: usize) {
        self.snapshots.truncate(step + 1);
    }

    /// Appends a snapshot and returns its step.
    pub(crate) fn push(&mut self, snapshot: Snapshot) -> usize {
        self.snapshots.push(snapshot);
        self.last_step()
    }
}

impl std::ops::Index<usize> for History {
    type Output = Snapshot;

    fn index(&self, step: usize) -> &Snapshot {
        &self.snapshots[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
