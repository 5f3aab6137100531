use super::position::Position;
use crate::Combos;

/// Strategic class of a starting hand. Decides both where the hand sits on
/// the grid and how many concrete card combinations it stands for.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Pair,
    Suited,
    Offsuit,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[Self::Pair, Self::Suited, Self::Offsuit]
    }
    /// C(4,2) suit pairs for a pair, 4 shared suits for suited,
    /// 4 * 3 distinct-suit pairs for offsuit.
    pub const fn combos(&self) -> Combos {
        match self {
            Self::Pair => 6,
            Self::Suited => 4,
            Self::Offsuit => 12,
        }
    }
    /// Label suffix: "AA", "AKs", "AKo".
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Pair => "",
            Self::Suited => "s",
            Self::Offsuit => "o",
        }
    }
}

/// diagonal is paired, upper triangle suited, lower triangle offsuit
impl From<Position> for Category {
    fn from(p: Position) -> Self {
        match p.row().cmp(&p.col()) {
            std::cmp::Ordering::Equal => Self::Pair,
            std::cmp::Ordering::Less => Self::Suited,
            std::cmp::Ordering::Greater => Self::Offsuit,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pair => write!(f, "pair"),
            Self::Suited => write!(f, "suited"),
            Self::Offsuit => write!(f, "offsuit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_counts() {
        let count = |c: Category| Position::all().filter(|p| Category::from(*p) == c).count();
        assert!(count(Category::Pair) == 13);
        assert!(count(Category::Suited) == 78);
        assert!(count(Category::Offsuit) == 78);
    }

    #[test]
    fn weights_cover_every_combo() {
        let total = Position::all()
            .map(Category::from)
            .map(|c| c.combos())
            .sum::<Combos>();
        assert!(total == crate::TOTAL_COMBOS);
    }
}
