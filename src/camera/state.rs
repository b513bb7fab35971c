use glam::Vec3;

use super::orbit::NATURAL_UP;

/// Mutable camera state owned by an [`OrbitCamera`](super::OrbitCamera).
///
/// The accumulators integrate input over time; everything else is either
/// recomputed each frame (`eye`, `up`) or only moved by panning and direct
/// repositioning (`pivot`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera location, recomputed every update.
    pub eye: Vec3,
    /// Point the camera orbits and looks at.
    pub pivot: Vec3,
    /// Screen-space up reference, natural or inverted.
    pub up: Vec3,
    /// Integrated horizontal pointer input. Unbounded.
    pub horizontal_accum: f32,
    /// Integrated vertical pointer input. Reset when the pitch overflows.
    pub vertical_accum: f32,
    /// Integrated wheel input; `1.0` means no zoom.
    pub zoom_accum: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            pivot: Vec3::ZERO,
            up: NATURAL_UP,
            horizontal_accum: 0.0,
            vertical_accum: 0.0,
            zoom_accum: 1.0,
        }
    }
}

impl CameraState {
    /// Fresh state with the given eye and pivot.
    #[must_use]
    pub fn new(eye: Vec3, pivot: Vec3) -> Self {
        Self {
            eye,
            pivot,
            ..Self::default()
        }
    }

    /// Zero the rotation accumulators and undo any zoom.
    pub fn reset_accumulators(&mut self) {
        self.horizontal_accum = 0.0;
        self.vertical_accum = 0.0;
        self.zoom_accum = 1.0;
    }
}
