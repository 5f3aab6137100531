use super::hand::Hand;
use super::position::Position;
use crate::CELLS;
use std::collections::HashMap;

/// Static lookup between grid positions and starting hands.
///
/// Both directions are tabulated once at construction, since the layout
/// never changes for the life of a widget.
#[derive(Debug, Clone)]
pub struct Grid {
    hands: [Hand; CELLS],
    positions: HashMap<Hand, Position>,
}

impl Grid {
    pub fn new() -> Self {
        let hands = std::array::from_fn(|i| Hand::from(Position::from(i as u8)));
        let positions = Position::all().map(|p| (Hand::from(p), p)).collect();
        Self { hands, positions }
    }
    pub fn hand_at(&self, p: Position) -> Hand {
        self.hands[u8::from(p) as usize]
    }
    pub fn position_of(&self, hand: &Hand) -> Position {
        self.positions
            .get(hand)
            .copied()
            .unwrap_or_else(|| Position::from(*hand))
    }
    /// All 169 hands in row-major order.
    pub fn hands(&self) -> impl Iterator<Item = Hand> + '_ {
        self.hands.iter().copied()
    }
    /// Rows of hands in display order, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Hand]> + '_ {
        self.hands.chunks(crate::RANKS)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
