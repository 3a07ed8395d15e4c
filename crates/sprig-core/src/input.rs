//! Input events consumed by widgets, and pointer state tracking.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Device button index treated as the primary (activating) button.
pub const PRIMARY_DEVICE_BUTTON: u32 = 0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button.
    Left,
    Right,
    Middle,
}

/// Event delivered to a widget.
///
/// Pointer events carry their own coordinates. Device (controller) button
/// events carry none: widgets query a [`PointerSource`] for the current
/// pointer position when they handle one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetEvent {
    PointerMove {
        position: Point,
    },
    PointerDown {
        position: Point,
        button: MouseButton,
    },
    PointerUp {
        position: Point,
        button: MouseButton,
    },
    DeviceButtonDown {
        index: u32,
    },
    DeviceButtonUp {
        index: u32,
    },
}

impl WidgetEvent {
    pub fn pointer_move(x: f64, y: f64) -> Self {
        WidgetEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    /// Primary-button press at `(x, y)`.
    pub fn pointer_down(x: f64, y: f64) -> Self {
        WidgetEvent::PointerDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// Primary-button release at `(x, y)`.
    pub fn pointer_up(x: f64, y: f64) -> Self {
        WidgetEvent::PointerUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    /// Coordinates carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            WidgetEvent::PointerMove { position }
            | WidgetEvent::PointerDown { position, .. }
            | WidgetEvent::PointerUp { position, .. } => Some(*position),
            WidgetEvent::DeviceButtonDown { .. } | WidgetEvent::DeviceButtonUp { .. } => None,
        }
    }
}

/// Source of the current pointer position, queried at dispatch time.
pub trait PointerSource {
    fn pointer_position(&self) -> Point;
}

/// A fixed position.
impl PointerSource for Point {
    fn pointer_position(&self) -> Point {
        *self
    }
}

/// Latest pointer position and the buttons currently held, fed by
/// [`handle_event`](InputState::handle_event).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last pointer position carried by an event, in screen coordinates.
    pub pointer_position: Point,
    pressed_buttons: HashSet<MouseButton>,
    pressed_device_buttons: HashSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event. Device button events leave the pointer where it was.
    pub fn handle_event(&mut self, event: &WidgetEvent) {
        if let Some(position) = event.position() {
            self.pointer_position = position;
        }
        match *event {
            WidgetEvent::PointerMove { .. } => {}
            WidgetEvent::PointerDown { button, .. } => {
                self.pressed_buttons.insert(button);
            }
            WidgetEvent::PointerUp { button, .. } => {
                self.pressed_buttons.remove(&button);
            }
            WidgetEvent::DeviceButtonDown { index } => {
                self.pressed_device_buttons.insert(index);
            }
            WidgetEvent::DeviceButtonUp { index } => {
                self.pressed_device_buttons.remove(&index);
            }
        }
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn is_device_button_pressed(&self, index: u32) -> bool {
        self.pressed_device_buttons.contains(&index)
    }
}

impl PointerSource for InputState {
    fn pointer_position(&self) -> Point {
        self.pointer_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_buttons_follow_events() {
        let mut input = InputState::new();

        input.handle_event(&WidgetEvent::pointer_down(100.0, 80.0));
        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Right));
        assert_eq!(input.pointer_position(), Point::new(100.0, 80.0));

        input.handle_event(&WidgetEvent::pointer_up(120.0, 90.0));
        assert!(!input.is_button_pressed(MouseButton::Left));
        assert_eq!(input.pointer_position(), Point::new(120.0, 90.0));
    }

    #[test]
    fn test_device_buttons_keep_pointer() {
        let mut input = InputState::new();
        input.handle_event(&WidgetEvent::pointer_move(5.0, 5.0));
        input.handle_event(&WidgetEvent::DeviceButtonDown { index: 0 });

        assert!(input.is_device_button_pressed(0));
        assert!(!input.is_device_button_pressed(1));
        assert_eq!(input.pointer_position(), Point::new(5.0, 5.0));

        input.handle_event(&WidgetEvent::DeviceButtonUp { index: 0 });
        assert!(!input.is_device_button_pressed(0));
    }

    #[test]
    fn test_fixed_point_source() {
        let pointer = Point::new(3.0, 4.0);
        assert_eq!(pointer.pointer_position(), pointer);
    }
}
