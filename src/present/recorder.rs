use super::highlight::Highlight;
use super::presenter::Presenter;
use crate::grid::Cells;
use crate::grid::Hand;
use crate::grid::Position;
use crate::range::Summary;

/// One presenter callback, captured as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Selected(Position, Hand),
    Deselected(Position, Hand),
    Highlight(Position, Highlight),
    Unhighlight,
    Summarize(Summary),
}

/// Presenter that remembers everything it was told.
///
/// Besides the raw log it folds notices into the visual state a real screen
/// would show, so callers can render from it or assert against it.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    notices: Vec<Notice>,
    active: Cells,
    fill: Cells,
    erase: Cells,
    summary: Option<Summary>,
}

impl Recorder {
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
    /// Cells currently drawn as selected.
    pub fn active(&self) -> Cells {
        self.active
    }
    /// Cells currently previewed as fill or erase.
    pub fn preview(&self, kind: Highlight) -> Cells {
        match kind {
            Highlight::Fill => self.fill,
            Highlight::Erase => self.erase,
        }
    }
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
    /// Drops the log but keeps the folded visual state.
    pub fn forget(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Presenter for Recorder {
    fn selected(&mut self, p: Position, h: Hand) {
        self.active.insert(p);
        self.notices.push(Notice::Selected(p, h));
    }
    fn deselected(&mut self, p: Position, h: Hand) {
        self.active.remove(p);
        self.notices.push(Notice::Deselected(p, h));
    }
    fn highlight(&mut self, p: Position, kind: Highlight) {
        match kind {
            Highlight::Fill => self.fill.insert(p),
            Highlight::Erase => self.erase.insert(p),
        };
        self.notices.push(Notice::Highlight(p, kind));
    }
    fn unhighlight(&mut self) {
        self.fill.clear();
        self.erase.clear();
        self.notices.push(Notice::Unhighlight);
    }
    fn summarize(&mut self, s: &Summary) {
        self.summary = Some(s.clone());
        self.notices.push(Notice::Summarize(s.clone()));
    }
}
