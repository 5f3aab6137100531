use crate::grid::Hand;
use crate::grid::Position;
use crate::present::Highlight;
use crate::range::Summary;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSummary {
    pub combos: u16,
    pub percent: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCell {
    pub row: usize,
    pub col: usize,
    pub hand: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiHighlight {
    pub row: usize,
    pub col: usize,
    pub class: String,
}

impl From<&Summary> for ApiSummary {
    fn from(summary: &Summary) -> Self {
        Self {
            combos: summary.combos(),
            percent: summary.percent(),
            text: summary.to_string(),
        }
    }
}

impl From<(Position, Hand)> for ApiCell {
    fn from((position, hand): (Position, Hand)) -> Self {
        Self {
            row: position.row(),
            col: position.col(),
            hand: hand.to_string(),
            category: hand.category().to_string(),
        }
    }
}

impl From<(Position, Highlight)> for ApiHighlight {
    fn from((position, highlight): (Position, Highlight)) -> Self {
        Self {
            row: position.row(),
            col: position.col(),
            class: highlight.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_json() {
        let json = serde_json::to_value(ApiSummary::from(&Summary::from(6))).unwrap();
        assert!(json["combos"] == 6);
        assert!(json["text"] == "0.5% (6 / 1326)");
    }

    #[test]
    fn cell_json() {
        let hand = Hand::try_from("AKo").unwrap();
        let cell = ApiCell::from((Position::from(hand), hand));
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json == r#"{"row":1,"col":0,"hand":"AKo","category":"offsuit"}"#);
    }

    #[test]
    fn highlight_json() {
        let p = Position::try_from((4, 2)).unwrap();
        let json = serde_json::to_value(ApiHighlight::from((p, Highlight::Erase))).unwrap();
        assert!(json["class"] == "temp-erase");
    }
}
