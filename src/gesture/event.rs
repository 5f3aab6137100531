use super::button::Button;
use crate::grid::Position;

/// Normalized input consumed by the controller.
///
/// Device adapters are responsible for producing these from mouse or touch
/// events; nothing downstream knows which device was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Start {
        at: Position,
        button: Button,
        shift: bool,
    },
    Move {
        at: Position,
        shift: bool,
    },
    End,
    Cancel,
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start { at, button, shift } => match shift {
                true => write!(f, "start {} {}+shift", at, button),
                false => write!(f, "start {} {}", at, button),
            },
            Self::Move { at, .. } => write!(f, "move {}", at),
            Self::End => write!(f, "end"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}
