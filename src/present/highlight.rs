/// Kind of temporary preview shown on a cell while a gesture is open.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Highlight {
    /// Cell will be added when the gesture commits.
    Fill,
    /// Cell will be removed when the gesture commits.
    Erase,
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fill => write!(f, "temp-highlight"),
            Self::Erase => write!(f, "temp-erase"),
        }
    }
}
