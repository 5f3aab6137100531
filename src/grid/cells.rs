use super::position::Position;
use crate::CELLS;

/// An unordered set of grid positions, packed into a 169-bit string.
///
/// Bit `i` is set when the position with row-major index `i` is a member.
/// The set is `Copy`, never allocates, and iterates in row-major order, which
/// keeps every notification sequence derived from it deterministic.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Cells([u64; 3]);

impl Cells {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn full() -> Self {
        Position::all().collect()
    }
    /// Returns whether the position was newly inserted.
    pub fn insert(&mut self, p: Position) -> bool {
        let (word, bit) = Self::locate(p);
        let fresh = self.0[word] & bit == 0;
        self.0[word] |= bit;
        fresh
    }
    /// Returns whether the position was present.
    pub fn remove(&mut self, p: Position) -> bool {
        let (word, bit) = Self::locate(p);
        let found = self.0[word] & bit != 0;
        self.0[word] &= !bit;
        found
    }
    pub fn contains(&self, p: &Position) -> bool {
        let (word, bit) = Self::locate(*p);
        self.0[word] & bit != 0
    }
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }
    pub fn clear(&mut self) {
        self.0 = [0; 3];
    }
    pub fn union(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] | other.0[i]))
    }
    /// Empties the set, handing back what it held.
    pub fn drain(&mut self) -> Self {
        std::mem::take(self)
    }

    fn locate(p: Position) -> (usize, u64) {
        let i = u8::from(p) as usize;
        debug_assert!(i < CELLS);
        (i / 64, 1 << (i % 64))
    }
}

/// we can empty a set from low to high
/// by removing the lowest position until the set is empty
impl Iterator for Cells {
    type Item = Position;
    fn next(&mut self) -> Option<Self::Item> {
        let word = self.0.iter().position(|w| *w != 0)?;
        let bit = self.0[word].trailing_zeros() as usize;
        self.0[word] &= self.0[word] - 1;
        Some(Position::from((word * 64 + bit) as u8))
    }
}

impl FromIterator<Position> for Cells {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut cells = Self::empty();
        cells.extend(iter);
        cells
    }
}
impl Extend<Position> for Cells {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn insert_is_idempotent() {
        let p = Position::random();
        let mut cells = Cells::empty();
        assert!(cells.insert(p));
        assert!(!cells.insert(p));
        assert!(cells.len() == 1);
        assert!(cells.contains(&p));
    }

    #[test]
    fn remove_is_idempotent() {
        let p = Position::random();
        let mut cells = Cells::empty();
        cells.insert(p);
        assert!(cells.remove(p));
        assert!(!cells.remove(p));
        assert!(cells.is_empty());
    }

    #[test]
    fn full_grid() {
        let cells = Cells::full();
        assert!(cells.len() == CELLS);
        assert!(cells.collect::<Vec<_>>() == Position::all().collect::<Vec<_>>());
    }

    #[test]
    fn iterates_row_major() {
        let a = Position::try_from((12, 12)).unwrap();
        let b = Position::try_from((0, 1)).unwrap();
        let c = Position::try_from((5, 0)).unwrap();
        let cells = [a, b, c].into_iter().collect::<Cells>();
        assert!(cells.collect::<Vec<_>>() == vec![b, c, a]);
    }

    #[test]
    fn union_and_drain() {
        let a = Position::try_from((0, 0)).unwrap();
        let b = Position::try_from((9, 9)).unwrap();
        let mut lhs = [a].into_iter().collect::<Cells>();
        let rhs = [b].into_iter().collect::<Cells>();
        let both = lhs.union(rhs);
        assert!(both.len() == 2);
        assert!(lhs.drain().len() == 1);
        assert!(lhs.is_empty());
    }
}
