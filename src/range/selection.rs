use super::summary::Summary;
use crate::Combos;
use crate::Percent;
use crate::grid::Cells;
use crate::grid::Grid;
use crate::grid::Hand;
use crate::grid::Position;
use crate::present::Presenter;

/// The set of selected starting hands.
///
/// Membership is stored by grid position. Mutations are idempotent and only
/// reach the presenter when they actually change membership.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Range(Cells);

impl Range {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        self.0.contains(&Position::from(*hand))
    }
    pub fn covers(&self, p: &Position) -> bool {
        self.0.contains(p)
    }
    /// Returns whether the hand was newly added.
    pub fn add<P>(&mut self, hand: Hand, presenter: &mut P) -> bool
    where
        P: Presenter,
    {
        let p = Position::from(hand);
        let fresh = self.0.insert(p);
        if fresh {
            presenter.selected(p, hand);
        }
        fresh
    }
    /// Returns whether the hand was present.
    pub fn remove<P>(&mut self, hand: Hand, presenter: &mut P) -> bool
    where
        P: Presenter,
    {
        let p = Position::from(hand);
        let found = self.0.remove(p);
        if found {
            presenter.deselected(p, hand);
        }
        found
    }
    /// Number of distinct hands selected.
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn combos(&self) -> Combos {
        self.hands().map(|h| h.weight()).sum()
    }
    pub fn percent(&self) -> Percent {
        self.summary().percent()
    }
    pub fn summary(&self) -> Summary {
        Summary::from(self.combos())
    }
    /// Selected hands in grid order.
    pub fn hands(&self) -> impl Iterator<Item = Hand> {
        self.0.map(Hand::from)
    }
    pub fn cells(&self) -> Cells {
        self.0
    }
}

impl From<Cells> for Range {
    fn from(cells: Cells) -> Self {
        Self(cells)
    }
}

/// selects every hand of the grid, in the grid's order
impl From<&Grid> for Range {
    fn from(grid: &Grid) -> Self {
        grid.hands().map(Position::from).collect::<Cells>().into()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self.hands().map(|h| h.to_string()).collect::<Vec<_>>();
        write!(f, "{}", labels.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::TOTAL_COMBOS;
    use crate::present::Notice;
    use crate::present::Recorder;

    #[test]
    fn add_is_idempotent() {
        let hand = Hand::random();
        let mut once = Range::empty();
        let mut twice = Range::empty();
        once.add(hand, &mut ());
        twice.add(hand, &mut ());
        twice.add(hand, &mut ());
        assert!(once == twice);
        assert!(twice.size() == 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let hand = Hand::random();
        let mut range = Range::empty();
        range.add(hand, &mut ());
        assert!(range.remove(hand, &mut ()));
        assert!(!range.remove(hand, &mut ()));
        assert!(range == Range::empty());
    }

    #[test]
    fn add_then_remove_restores_empty() {
        let hand = Hand::random();
        let mut range = Range::empty();
        range.add(hand, &mut ());
        range.remove(hand, &mut ());
        assert!(range.size() == 0);
        assert!(range.combos() == 0);
    }

    #[test]
    fn notifies_only_on_change() {
        let aa = Hand::try_from("AA").unwrap();
        let mut recorder = Recorder::default();
        let mut range = Range::empty();
        range.add(aa, &mut recorder);
        range.add(aa, &mut recorder);
        range.remove(aa, &mut recorder);
        range.remove(aa, &mut recorder);
        let p = Position::from(aa);
        assert!(recorder.notices() == [Notice::Selected(p, aa), Notice::Deselected(p, aa)]);
    }

    #[test]
    fn whole_grid() {
        let range = Range::from(&Grid::new());
        assert!(range.size() == 169);
        assert!(range.combos() == TOTAL_COMBOS);
        assert!(range.percent() == 100.);
    }

    #[test]
    fn pocket_aces() {
        let mut range = Range::empty();
        range.add(Hand::try_from("AA").unwrap(), &mut ());
        assert!(range.combos() == 6);
        assert!((range.percent() - 0.45).abs() < 0.01);
    }

    #[test]
    fn display_in_grid_order() {
        let mut range = Range::empty();
        for label in ["AKo", "AA", "AKs"] {
            range.add(Hand::try_from(label).unwrap(), &mut ());
        }
        assert!(range.to_string() == "AA,AKs,AKo");
    }
}
