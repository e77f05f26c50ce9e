//! Jump targets for a history view.

use super::history::History;
use serde::Serialize;

/// Label of a move-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveLabel {
    /// Step 0, the empty board.
    GameStart,
    /// Step `k > 0`, the board after move `k`.
    Move(usize),
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => write!(f, "Go to game start"),
            MoveLabel::Move(step) => write!(f, "Go to move #{}", step),
        }
    }
}

/// One jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveEntry {
    /// History step to pass to `jump_to`.
    pub step: usize,
    /// Display label.
    pub label: MoveLabel,
    /// True for the snapshot under the cursor.
    pub is_current: bool,
}

/// Lazy view over a controller's history, one entry per snapshot.
///
/// The list is `Copy`; every call to [`MoveList::iter`] starts over from
/// game start.
#[derive(Debug, Clone, Copy)]
pub struct MoveList<'a> {
    history: &'a History,
    cursor: usize,
}

impl<'a> MoveList<'a> {
    pub(crate) fn new(history: &'a History, cursor: usize) -> Self {
        Self { history, cursor }
    }

    /// Number of entries (equals history length).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: game start is always listed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Iterates from game start to the latest move.
    pub fn iter(&self) -> MoveListIter<'a> {
        MoveListIter {
            list: *self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for MoveList<'a> {
    type Item = MoveEntry;
    type IntoIter = MoveListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [`MoveEntry`] values.
#[derive(Debug, Clone)]
pub struct MoveListIter<'a> {
    list: MoveList<'a>,
    next: usize,
}

impl Iterator for MoveListIter<'_> {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<MoveEntry> {
        if self.next >= self.list.len() {
            return None;
        }

        let step = self.next;
        self.next += 1;
        let label = if step == 0 {
            MoveLabel::GameStart
        } else {
            MoveLabel::Move(step)
        };
        Some(MoveEntry {
            step,
            label,
            is_current: step == self.list.cursor,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIter<'_> {}
