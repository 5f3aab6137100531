use super::highlight::Highlight;
use crate::grid::Hand;
use crate::grid::Position;
use crate::range::Summary;

/// Trait for whatever draws the grid.
/// Implementations can be DOM bindings, terminal renderers, test recorders, etc.
///
/// The controller only ever talks to the screen through these callbacks, and
/// calls them synchronously from within the event that caused the change.
/// Every method defaults to doing nothing, so a presenter only overrides
/// what it cares about, and `()` is a valid presenter that draws nothing.
pub trait Presenter {
    /// A hand entered the range.
    fn selected(&mut self, _: Position, _: Hand) {}
    /// A hand left the range.
    fn deselected(&mut self, _: Position, _: Hand) {}
    /// A cell joined the temporary preview of an open gesture.
    fn highlight(&mut self, _: Position, _: Highlight) {}
    /// Every temporary preview was dropped.
    fn unhighlight(&mut self) {}
    /// Combo totals changed, or a gesture ended.
    fn summarize(&mut self, _: &Summary) {}
}

impl Presenter for () {}

impl<P> Presenter for &mut P
where
    P: Presenter + ?Sized,
{
    fn selected(&mut self, p: Position, h: Hand) {
        (**self).selected(p, h)
    }
    fn deselected(&mut self, p: Position, h: Hand) {
        (**self).deselected(p, h)
    }
    fn highlight(&mut self, p: Position, h: Highlight) {
        (**self).highlight(p, h)
    }
    fn unhighlight(&mut self) {
        (**self).unhighlight()
    }
    fn summarize(&mut self, s: &Summary) {
        (**self).summarize(s)
    }
}
