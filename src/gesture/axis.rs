use crate::grid::Category;
use crate::grid::Position;

/// Segment anchor of a fill gesture.
///
/// Each category fills along its own axis: a pair is a single cell, a suited
/// hand fills its column from the top row down, an offsuit hand fills its
/// row from the left column across. Suited cells sit above the diagonal and
/// offsuit cells below it, so a fill never leaves the category it started in.
/// Two cells belong to the same segment exactly when their axes are equal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    Single(Position),
    Column(usize),
    Row(usize),
}

impl Axis {
    /// Cells filled when the pointer rests on `at`.
    pub fn span(&self, at: Position) -> impl Iterator<Item = Position> {
        let (from, to) = match self {
            Self::Single(p) => (*p, *p),
            Self::Column(col) => (Position::at(0, *col), Position::at(at.row(), *col)),
            Self::Row(row) => (Position::at(*row, 0), Position::at(*row, at.col())),
        };
        Position::span(from, to)
    }
}

impl From<Position> for Axis {
    fn from(p: Position) -> Self {
        match Category::from(p) {
            Category::Pair => Self::Single(p),
            Category::Suited => Self::Column(p.col()),
            Category::Offsuit => Self::Row(p.row()),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Single(p) => write!(f, "single {}", p),
            Self::Column(col) => write!(f, "column {}", col),
            Self::Row(row) => write!(f, "row {}", row),
        }
    }
}
