use crate::CELLS;
use crate::RANKS;

/// A cell of the 13x13 grid.
///
/// Rows and columns both follow strength-descending rank order, so (0, 0) is
/// AA and (12, 12) is 22. Positions are validated on construction; every
/// `Position` in circulation is inside the grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn row(&self) -> usize {
        self.row as usize
    }
    pub fn col(&self) -> usize {
        self.col as usize
    }
    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELLS as u8).map(Self::from)
    }
    /// Inclusive rectangle spanned by two corners, in row-major order.
    /// The corners may be given in any order.
    pub fn span(a: Self, b: Self) -> impl Iterator<Item = Self> {
        let rows = a.row.min(b.row)..=a.row.max(b.row);
        let cols = a.col.min(b.col)..=a.col.max(b.col);
        rows.flat_map(move |row| cols.clone().map(move |col| Self { row, col }))
    }
    /// Positions are only built from in-bounds coordinates inside the crate.
    /// Callers holding untrusted coordinates go through `TryFrom`.
    pub(crate) fn at(row: usize, col: usize) -> Self {
        assert!(row < RANKS && col < RANKS, "invalid position ({}, {})", row, col);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }
}

/// (row, col) validation
impl TryFrom<(usize, usize)> for Position {
    type Error = anyhow::Error;
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row < RANKS && col < RANKS {
            Ok(Self::at(row, col))
        } else {
            Err(anyhow::anyhow!("invalid position ({}, {})", row, col))
        }
    }
}
impl From<Position> for (usize, usize) {
    fn from(p: Position) -> Self {
        (p.row(), p.col())
    }
}

/// u8 isomorphism
/// row-major index into the grid
/// AKs
/// 1
impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.row * RANKS as u8 + p.col
    }
}
impl From<u8> for Position {
    fn from(n: u8) -> Self {
        assert!((n as usize) < CELLS, "invalid position u8: {}", n);
        Self {
            row: n / RANKS as u8,
            col: n % RANKS as u8,
        }
    }
}

impl crate::Arbitrary for Position {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..CELLS as u8))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
