//! Folds platform events into per-frame input samples.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::sample::{InputSample, InputSource};
use crate::options::ButtonBindings;

/// Collects [`InputEvent`]s between frames and hands them to the camera as a
/// single [`InputSample`].
///
/// Button state persists across samples; pointer and wheel deltas are
/// cleared every time a sample is taken.
#[derive(Debug, Clone)]
pub struct InputAccumulator {
    bindings: ButtonBindings,
    left: bool,
    right: bool,
    middle: bool,
    last_cursor_pos: Option<Vec2>,
    delta: Vec2,
    wheel: f32,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self::new(ButtonBindings::default())
    }
}

impl InputAccumulator {
    /// Create an accumulator with the given button assignments.
    #[must_use]
    pub fn new(bindings: ButtonBindings) -> Self {
        Self {
            bindings,
            left: false,
            right: false,
            middle: false,
            last_cursor_pos: None,
            delta: Vec2::ZERO,
            wheel: 0.0,
        }
    }

    /// Current button assignments.
    #[must_use]
    pub fn bindings(&self) -> ButtonBindings {
        self.bindings
    }

    /// Reassign the orbit and pan buttons. Held state is kept.
    pub fn set_bindings(&mut self, bindings: ButtonBindings) {
        self.bindings = bindings;
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Record one platform event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                // The first position only establishes a reference point.
                if let Some(last) = self.last_cursor_pos {
                    self.delta += pos - last;
                }
                self.last_cursor_pos = Some(pos);
            }
            InputEvent::MouseButton { button, pressed } => {
                let held = match button {
                    MouseButton::Left => &mut self.left,
                    MouseButton::Right => &mut self.right,
                    MouseButton::Middle => &mut self.middle,
                };
                *held = pressed;
            }
            InputEvent::Scroll { delta } => self.wheel += delta,
        }
    }

    /// Forget the last cursor position, e.g. when the cursor leaves the
    /// window, so re-entry does not produce a jump.
    pub fn reset_cursor(&mut self) {
        self.last_cursor_pos = None;
    }
}

impl InputSource for InputAccumulator {
    fn sample(&mut self) -> InputSample {
        let sample = InputSample {
            orbit_held: self.is_pressed(self.bindings.orbit),
            pan_held: self.is_pressed(self.bindings.pan),
            delta: self.delta,
            wheel: self.wheel,
        };
        self.delta = Vec2::ZERO;
        self.wheel = 0.0;
        sample
    }
}
