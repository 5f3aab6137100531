use super::axis::Axis;
use super::button::Button;
use super::event::Gesture;
use super::mode::Mode;
use super::session::Session;
use crate::grid::Grid;
use crate::grid::Hand;
use crate::grid::Position;
use crate::present::Highlight;
use crate::present::Presenter;
use crate::range::Range;

/// Owns one grid widget's state and turns gestures into range mutations.
///
/// At most one [`Session`] is open at a time. Add and Remove gestures touch
/// the range as soon as a cell is entered. ShiftFill and RectErase only
/// preview their effect until release; a fill additionally locks in each
/// segment as soon as the pointer moves on to a different row, column or
/// pair. Every visual consequence goes out through the presenter before the
/// call returns.
#[derive(Debug)]
pub struct Controller<P> {
    grid: Grid,
    range: Range,
    session: Option<Session>,
    sticky: Option<Mode>,
    live: bool,
    presenter: P,
}

impl<P> Controller<P>
where
    P: Presenter,
{
    pub fn new(presenter: P) -> Self {
        Self {
            grid: Grid::new(),
            range: Range::empty(),
            session: None,
            sticky: None,
            live: false,
            presenter,
        }
    }
    /// Refresh the summary after every Add/Remove application,
    /// not just when the gesture ends.
    pub fn live(mut self, live: bool) -> Self {
        self.set_live(live);
        self
    }
    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn range(&self) -> &Range {
        &self.range
    }
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
    pub fn sticky(&self) -> Option<Mode> {
        self.sticky
    }
    pub fn presenter(&self) -> &P {
        &self.presenter
    }
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Mode control: pressing a mode makes it sticky for every following
    /// gesture, pressing the same mode again releases it.
    pub fn toggle(&mut self, mode: Mode) -> Option<Mode> {
        self.sticky = match self.sticky {
            Some(current) if current == mode => None,
            _ => Some(mode),
        };
        match self.sticky {
            Some(mode) => log::debug!("{:<32}{:<32}", "sticky mode", mode),
            None => log::debug!("{:<32}", "sticky mode released"),
        }
        self.sticky
    }
    pub fn unstick(&mut self) {
        if let Some(mode) = self.sticky {
            self.toggle(mode);
        }
    }

    /// Selects a single hand outside of any gesture.
    pub fn select(&mut self, hand: Hand) -> bool {
        let changed = self.range.add(hand, &mut self.presenter);
        self.refresh();
        changed
    }
    /// Deselects a single hand outside of any gesture.
    pub fn deselect(&mut self, hand: Hand) -> bool {
        let changed = self.range.remove(hand, &mut self.presenter);
        self.refresh();
        changed
    }

    pub fn dispatch(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Start { at, button, shift } => self.start(at, button, shift),
            Gesture::Move { at, .. } => self.enter(at),
            Gesture::End => self.end(),
            Gesture::Cancel => self.cancel(),
        }
    }

    /// Opens a gesture on `at` and applies it to that first cell.
    /// A gesture left open by a misbehaving adapter is committed first.
    pub fn start(&mut self, at: Position, button: Button, shift: bool) {
        if self.session.is_some() {
            log::warn!("gesture started while another is open, committing the stale one");
            self.end();
        }
        let mode = Mode::arbitrate(button, shift, self.sticky);
        log::debug!("{:<32}{:<32}", "gesture start", format!("{} {}", mode, at));
        self.session = Some(Session::new(mode, at));
        self.apply(at);
    }
    /// Pointer entered `at` during a gesture. The mode chosen at start holds
    /// for the whole gesture, so modifier changes mid-drag are ignored.
    pub fn enter(&mut self, at: Position) {
        if self.session.is_some() {
            self.apply(at);
        }
    }
    /// Releases the gesture and commits its preview into the range.
    pub fn end(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        match session.mode() {
            Mode::ShiftFill => {
                for p in session.fill() {
                    self.range.add(self.grid.hand_at(p), &mut self.presenter);
                }
            }
            Mode::RectErase => {
                for p in session.temporary() {
                    self.range.remove(self.grid.hand_at(p), &mut self.presenter);
                }
            }
            Mode::Add | Mode::Remove => {}
        }
        log::debug!("{:<32}{:<32}", "gesture commit", session.mode());
        self.presenter.unhighlight();
        self.refresh();
    }
    /// Abandons the gesture without committing its preview. Fill segments
    /// already locked in and cells already painted by Add/Remove stay.
    pub fn cancel(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        log::debug!("{:<32}{:<32}", "gesture cancel", session.mode());
        self.presenter.unhighlight();
        self.refresh();
    }
    /// Pushes the current combo summary to the presenter.
    pub fn refresh(&mut self) {
        let summary = self.range.summary();
        log::debug!("{:<32}{:<32}", "range summary", summary);
        self.presenter.summarize(&summary);
    }

    fn apply(&mut self, at: Position) {
        match self.session.as_ref().map(Session::mode) {
            Some(Mode::Add) => self.paint(at, true),
            Some(Mode::Remove) => self.paint(at, false),
            Some(Mode::ShiftFill) => self.fill(at),
            Some(Mode::RectErase) => self.erase(at),
            None => {}
        }
    }

    fn paint(&mut self, at: Position, add: bool) {
        let hand = self.grid.hand_at(at);
        let changed = match add {
            true => self.range.add(hand, &mut self.presenter),
            false => self.range.remove(hand, &mut self.presenter),
        };
        if changed && self.live {
            self.refresh();
        }
    }

    fn fill(&mut self, at: Position) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let axis = Axis::from(at);
        if let Some(locked) = session.relock(axis) {
            if !locked.is_empty() {
                log::debug!("{:<32}{:<32}", "fill segment locked", locked.len());
            }
            for p in locked {
                self.range.add(self.grid.hand_at(p), &mut self.presenter);
            }
        }
        session.unpreview();
        self.presenter.unhighlight();
        for p in axis.span(at) {
            session.preview(p);
            session.reserve(p);
            self.presenter.highlight(p, Highlight::Fill);
        }
    }

    fn erase(&mut self, at: Position) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.unpreview();
        self.presenter.unhighlight();
        for p in Position::span(session.anchor(), at).filter(|p| self.range.covers(p)) {
            session.preview(p);
            self.presenter.highlight(p, Highlight::Erase);
        }
    }
}

impl Default for Controller<()> {
    fn default() -> Self {
        Self::new(())
    }
}
