use super::category::Category;
use super::position::Position;
use crate::Combos;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

/// One of the 169 strategically distinct starting hands.
///
/// Labels are always normalized so the stronger rank leads: "AKs", never
/// "KAs". For pairs both ranks coincide. The bijection with [`Position`]
/// places pairs on the diagonal, suited hands at (high, low) and offsuit
/// hands at (low, high), with rank indices in strength-descending order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand {
    high: Rank,
    low: Rank,
    category: Category,
}

impl Hand {
    pub fn high(&self) -> Rank {
        self.high
    }
    pub fn low(&self) -> Rank {
        self.low
    }
    pub fn category(&self) -> Category {
        self.category
    }
    /// Combinatorial weight of this hand: 6, 4 or 12.
    pub fn weight(&self) -> Combos {
        self.category.combos()
    }
    /// Every concrete two-card holding represented by this hand.
    pub fn combos(&self) -> Vec<(Card, Card)> {
        let suits = Suit::all();
        let card = |rank: Rank, suit: Suit| Card::from((rank, suit));
        match self.category {
            Category::Pair => suits
                .iter()
                .enumerate()
                .flat_map(|(i, a)| suits[i + 1..].iter().map(move |b| (*a, *b)))
                .map(|(a, b)| (card(self.high, a), card(self.low, b)))
                .collect(),
            Category::Suited => suits
                .iter()
                .map(|s| (card(self.high, *s), card(self.low, *s)))
                .collect(),
            Category::Offsuit => suits
                .iter()
                .flat_map(|a| suits.iter().filter(move |b| *b != a).map(move |b| (*a, *b)))
                .map(|(a, b)| (card(self.high, a), card(self.low, b)))
                .collect(),
        }
    }
}

/// grid placement
impl From<Position> for Hand {
    fn from(p: Position) -> Self {
        let category = Category::from(p);
        let (a, b) = (Rank::at(p.row()), Rank::at(p.col()));
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        Self {
            high,
            low,
            category,
        }
    }
}
impl From<Hand> for Position {
    fn from(h: Hand) -> Self {
        let (hi, lo) = (h.high.index(), h.low.index());
        match h.category {
            Category::Pair | Category::Suited => Position::at(hi, lo),
            Category::Offsuit => Position::at(lo, hi),
        }
    }
}

/// str isomorphism
/// "AKs", "KAs", "ako", "TT"
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        let (a, b, suffix) = match chars.as_slice() {
            [a, b] => (*a, *b, None),
            [a, b, c] => (*a, *b, Some(c.to_ascii_lowercase())),
            _ => return Err(anyhow::anyhow!("invalid hand label: {}", s)),
        };
        let a = Rank::try_from(a)?;
        let b = Rank::try_from(b)?;
        let category = match (a == b, suffix) {
            (true, None) => Category::Pair,
            (false, Some('s')) => Category::Suited,
            (false, Some('o')) => Category::Offsuit,
            (true, Some(_)) => return Err(anyhow::anyhow!("pairs take no suffix: {}", s)),
            (false, None) => return Err(anyhow::anyhow!("missing s/o suffix: {}", s)),
            (false, Some(_)) => return Err(anyhow::anyhow!("invalid suffix: {}", s)),
        };
        Ok(Self {
            high: a.max(b),
            low: a.min(b),
            category,
        })
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self::from(<Position as crate::Arbitrary>::random())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.category.suffix())
    }
}
