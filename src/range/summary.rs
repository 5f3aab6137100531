use crate::Combos;
use crate::Percent;
use crate::TOTAL_COMBOS;

/// Combo count of a range and its share of all starting hands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    combos: Combos,
    percent: Percent,
}

impl Summary {
    pub fn combos(&self) -> Combos {
        self.combos
    }
    /// Share of the 1326 starting combinations, capped at 100.
    pub fn percent(&self) -> Percent {
        self.percent
    }
}

impl From<Combos> for Summary {
    fn from(combos: Combos) -> Self {
        let percent = (combos as Percent / TOTAL_COMBOS as Percent * 100.).min(100.);
        Self { combos, percent }
    }
}

/// "12.3% (164 / 1326)"
impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.1}% ({} / {})", self.percent, self.combos, TOTAL_COMBOS)
    }
}
