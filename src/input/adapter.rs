use super::bounds::Bounds;
use super::device::Device;
use crate::GRID_BUFFER_PX;
use crate::gesture::Button;
use crate::gesture::Gesture;
use crate::grid::Position;

/// Outcome of one raw device event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Translation {
    /// Normalized gesture to hand to the controller, if any.
    pub gesture: Option<Gesture>,
    /// Whether the host should call `preventDefault` on the raw event.
    pub suppress: bool,
}

impl Translation {
    fn ignore() -> Self {
        Self::default()
    }
    fn suppress() -> Self {
        Self {
            gesture: None,
            suppress: true,
        }
    }
    fn emit(gesture: Gesture) -> Self {
        Self {
            gesture: Some(gesture),
            suppress: true,
        }
    }
    fn pass(gesture: Gesture) -> Self {
        Self {
            gesture: Some(gesture),
            suppress: false,
        }
    }
}

/// Turns mouse and touch events into the normalized gesture trio.
///
/// Touch behaves like a primary button without modifiers. Only single-finger
/// touches start a gesture, and a touch moving within the cell it last
/// reported produces nothing.
#[derive(Debug, Default, Clone)]
pub struct Adapter {
    bounds: Bounds,
    dragging: bool,
    last: Option<Position>,
}

impl Adapter {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            dragging: false,
            last: None,
        }
    }
    /// Grid moved or resized on screen.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn translate(&mut self, event: Device) -> Translation {
        match event {
            Device::MouseDown { at, button, shift } => {
                self.dragging = true;
                Translation::emit(Gesture::Start {
                    at,
                    button: Button::from(button),
                    shift,
                })
            }
            Device::MouseEnter { at, shift } => match self.dragging {
                true => Translation::pass(Gesture::Move { at, shift }),
                false => Translation::ignore(),
            },
            Device::MouseUp => self.release(false),
            Device::TouchStart { touches, x, y } => {
                if touches != 1 {
                    return Translation::ignore();
                }
                let Some(at) = self.bounds.cell_at(x, y) else {
                    return Translation::ignore();
                };
                self.dragging = true;
                self.last = Some(at);
                Translation::emit(Gesture::Start {
                    at,
                    button: Button::Primary,
                    shift: false,
                })
            }
            Device::TouchMove { x, y } => {
                if !self.dragging {
                    return Translation::ignore();
                }
                match self.bounds.cell_at(x, y) {
                    Some(at) if self.last != Some(at) => {
                        self.last = Some(at);
                        Translation::emit(Gesture::Move { at, shift: false })
                    }
                    _ => Translation::ignore(),
                }
            }
            Device::TouchEnd => self.release(true),
            Device::ContextMenu { x, y } => {
                match self.dragging || self.bounds.near(x, y, GRID_BUFFER_PX) {
                    true => Translation::suppress(),
                    false => Translation::ignore(),
                }
            }
        }
    }

    fn release(&mut self, suppress: bool) -> Translation {
        let was = std::mem::replace(&mut self.dragging, false);
        self.last = None;
        match (was, suppress) {
            (true, true) => Translation::emit(Gesture::End),
            (true, false) => Translation::pass(Gesture::End),
            (false, true) => Translation::suppress(),
            (false, false) => Translation::ignore(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> Adapter {
        Adapter::new(Bounds::new(0., 0., 130., 130.))
    }

    fn p(row: usize, col: usize) -> Position {
        Position::try_from((row, col)).unwrap()
    }

    #[test]
    fn mouse_trio() {
        let mut adapter = adapter();
        let down = adapter.translate(Device::MouseDown {
            at: p(0, 1),
            button: 2,
            shift: true,
        });
        assert!(down.suppress);
        assert!(
            down.gesture
                == Some(Gesture::Start {
                    at: p(0, 1),
                    button: Button::Secondary,
                    shift: true,
                })
        );
        let enter = adapter.translate(Device::MouseEnter {
            at: p(0, 2),
            shift: false,
        });
        assert!(enter.gesture == Some(Gesture::Move { at: p(0, 2), shift: false }));
        let up = adapter.translate(Device::MouseUp);
        assert!(up.gesture == Some(Gesture::End));
        assert!(!up.suppress);
        assert!(!adapter.dragging());
    }

    #[test]
    fn hover_without_press_is_ignored() {
        let mut adapter = adapter();
        let enter = adapter.translate(Device::MouseEnter {
            at: p(3, 3),
            shift: false,
        });
        assert!(enter == Translation::default());
        assert!(adapter.translate(Device::MouseUp).gesture.is_none());
    }

    #[test]
    fn touch_is_primary_without_shift() {
        let mut adapter = adapter();
        let start = adapter.translate(Device::TouchStart {
            touches: 1,
            x: 15.,
            y: 25.,
        });
        assert!(start.suppress);
        assert!(
            start.gesture
                == Some(Gesture::Start {
                    at: p(2, 1),
                    button: Button::Primary,
                    shift: false,
                })
        );
    }

    #[test]
    fn multi_touch_is_ignored() {
        let mut adapter = adapter();
        let start = adapter.translate(Device::TouchStart {
            touches: 2,
            x: 15.,
            y: 25.,
        });
        assert!(start == Translation::default());
        assert!(!adapter.dragging());
    }

    #[test]
    fn touch_outside_grid_is_ignored() {
        let mut adapter = adapter();
        let start = adapter.translate(Device::TouchStart {
            touches: 1,
            x: 200.,
            y: 25.,
        });
        assert!(start.gesture.is_none());
    }

    #[test]
    fn touch_move_within_same_cell_is_dropped() {
        let mut adapter = adapter();
        adapter.translate(Device::TouchStart {
            touches: 1,
            x: 5.,
            y: 5.,
        });
        let same = adapter.translate(Device::TouchMove { x: 8., y: 8. });
        assert!(same.gesture.is_none());
        let next = adapter.translate(Device::TouchMove { x: 15., y: 5. });
        assert!(next.gesture == Some(Gesture::Move { at: p(0, 1), shift: false }));
        let back = adapter.translate(Device::TouchMove { x: 5., y: 5. });
        assert!(back.gesture == Some(Gesture::Move { at: p(0, 0), shift: false }));
        let off = adapter.translate(Device::TouchMove { x: 500., y: 5. });
        assert!(off.gesture.is_none());
    }

    #[test]
    fn touch_end_always_suppresses() {
        let mut adapter = adapter();
        let idle = adapter.translate(Device::TouchEnd);
        assert!(idle.suppress);
        assert!(idle.gesture.is_none());
        adapter.translate(Device::TouchStart {
            touches: 1,
            x: 5.,
            y: 5.,
        });
        let end = adapter.translate(Device::TouchEnd);
        assert!(end.gesture == Some(Gesture::End));
    }

    #[test]
    fn context_menu_near_grid() {
        let mut adapter = adapter();
        assert!(adapter.translate(Device::ContextMenu { x: -5., y: 60. }).suppress);
        assert!(!adapter.translate(Device::ContextMenu { x: -9., y: 60. }).suppress);
        adapter.translate(Device::MouseDown {
            at: p(0, 0),
            button: 2,
            shift: false,
        });
        assert!(adapter.translate(Device::ContextMenu { x: 900., y: 900. }).suppress);
    }
}
