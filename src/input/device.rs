use crate::Pixels;
use crate::grid::Position;

/// Raw device events as a host page sees them.
///
/// Mouse listeners sit on individual cells, so mouse events already know
/// their position. Touch events only carry a point and are hit-tested
/// against the grid bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Device {
    MouseDown {
        at: Position,
        button: i16,
        shift: bool,
    },
    MouseEnter {
        at: Position,
        shift: bool,
    },
    MouseUp,
    TouchStart {
        touches: usize,
        x: Pixels,
        y: Pixels,
    },
    TouchMove {
        x: Pixels,
        y: Pixels,
    },
    TouchEnd,
    ContextMenu {
        x: Pixels,
        y: Pixels,
    },
}
