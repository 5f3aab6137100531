use super::button::Button;

/// What an open gesture does to the cells it passes over.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mode {
    /// Select every cell entered.
    Add,
    /// Deselect every cell entered.
    Remove,
    /// Preview a fill toward the top or left edge, commit on release.
    ShiftFill,
    /// Preview erasing a rectangle from the anchor, commit on release.
    RectErase,
}

impl Mode {
    pub const fn all() -> &'static [Self] {
        &[Self::Add, Self::Remove, Self::ShiftFill, Self::RectErase]
    }
    /// Picks the mode for a new gesture.
    ///
    /// A sticky mode chosen on the mode controls wins outright. Only without
    /// one are the desktop shortcuts consulted:
    /// shift+primary fills, shift+secondary erases a rectangle,
    /// secondary removes, anything else adds.
    pub fn arbitrate(button: Button, shift: bool, sticky: Option<Self>) -> Self {
        match (sticky, shift, button) {
            (Some(mode), _, _) => mode,
            (None, true, Button::Primary) => Self::ShiftFill,
            (None, true, Button::Secondary) => Self::RectErase,
            (None, false, Button::Secondary) => Self::Remove,
            (None, false, Button::Primary) => Self::Add,
        }
    }
}

/// control names used by the mode buttons
impl TryFrom<&str> for Mode {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "shiftFill" | "fill" => Ok(Self::ShiftFill),
            "rectErase" | "erase" => Ok(Self::RectErase),
            _ => Err(anyhow::anyhow!("unknown mode: {}", s)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
            Self::ShiftFill => write!(f, "shiftFill"),
            Self::RectErase => write!(f, "rectErase"),
        }
    }
}
