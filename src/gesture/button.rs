/// Pointer button that opened a gesture. Touch always reports `Primary`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Button {
    #[default]
    Primary,
    Secondary,
}

/// DOM `MouseEvent.button` code
/// 2 is the secondary (usually right) button, anything else counts as primary
impl From<i16> for Button {
    fn from(code: i16) -> Self {
        match code {
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}
impl From<Button> for i16 {
    fn from(b: Button) -> Self {
        match b {
            Button::Primary => 0,
            Button::Secondary => 2,
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_codes() {
        assert!(Button::from(0) == Button::Primary);
        assert!(Button::from(1) == Button::Primary);
        assert!(Button::from(2) == Button::Secondary);
        assert!(Button::from(i16::from(Button::Secondary)) == Button::Secondary);
    }
}
