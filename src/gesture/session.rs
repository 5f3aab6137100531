use super::axis::Axis;
use super::mode::Mode;
use crate::grid::Cells;
use crate::grid::Position;

/// State of one open gesture, from press to release.
///
/// `temporary` is what is currently previewed on screen. `pending` only
/// exists for fills: every cell previewed within the current segment, kept
/// even after the preview shrinks, until the segment is locked in or the
/// gesture commits.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    anchor: Position,
    lock: Option<Axis>,
    temporary: Cells,
    pending: Cells,
}

impl Session {
    pub fn new(mode: Mode, anchor: Position) -> Self {
        Self {
            mode,
            anchor,
            lock: None,
            temporary: Cells::empty(),
            pending: Cells::empty(),
        }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn anchor(&self) -> Position {
        self.anchor
    }
    /// Axis of the fill segment currently being extended.
    pub fn lock(&self) -> Option<Axis> {
        self.lock
    }
    pub fn temporary(&self) -> Cells {
        self.temporary
    }
    pub fn pending(&self) -> Cells {
        self.pending
    }

    /// Starts a new fill segment if `axis` differs from the current one,
    /// handing back the previous segment's cells to be locked in.
    pub(crate) fn relock(&mut self, axis: Axis) -> Option<Cells> {
        match self.lock.replace(axis) {
            Some(prior) if prior == axis => None,
            _ => Some(self.pending.drain()),
        }
    }
    /// Drops the preview, handing back what was previewed.
    pub(crate) fn unpreview(&mut self) -> Cells {
        self.temporary.drain()
    }
    pub(crate) fn preview(&mut self, p: Position) {
        self.temporary.insert(p);
    }
    pub(crate) fn reserve(&mut self, p: Position) {
        self.pending.insert(p);
    }
    /// Everything a fill adds on release.
    pub(crate) fn fill(&self) -> Cells {
        self.temporary.union(self.pending)
    }
}
