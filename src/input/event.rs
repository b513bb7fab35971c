use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputAccumulator`](super::InputAccumulator),
/// which folds them into one [`InputSample`](super::InputSample) per frame.
///
/// # Example
///
/// ```ignore
/// input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// input.handle_event(InputEvent::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = wheel forward, moves the camera closer).
    Scroll {
        /// Scroll amount in wheel notches.
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
