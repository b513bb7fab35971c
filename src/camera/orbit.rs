//! Per-frame orbit math.
//!
//! Every function here is a pure, total function of its inputs; the
//! [`OrbitCamera`](super::controller::OrbitCamera) threads its state through
//! them in a fixed order each update.

use std::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::input::InputSample;

/// Up vector used while the camera is on the near side of the pivot.
pub const NATURAL_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Up vector used once the camera has rotated past a pole.
pub const INVERTED_UP: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Rotation accumulators after one frame, plus the angles derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    /// Horizontal accumulator (never reset).
    pub horizontal: f32,
    /// Vertical accumulator, zero if it overflowed this frame.
    pub vertical: f32,
    /// Vertical accumulator after this frame's input, before any reset.
    pub raw_vertical: f32,
    /// Rotation about X in radians.
    pub rot_x: f32,
    /// Rotation about Y in radians.
    pub rot_y: f32,
    /// The vertical accumulator overflowed and was reset.
    pub reset: bool,
}

/// Integrate this frame's pointer delta into the rotation accumulators.
///
/// The delta only counts while the orbit button is held. If the derived
/// `rot_x` leaves `[-2π, 2π]` the vertical accumulator and `rot_x` are both
/// zeroed. `rot_y` is never wrapped.
#[must_use]
pub fn accumulate_angles(
    horizontal: f32,
    vertical: f32,
    sample: &InputSample,
    elapsed: f32,
    rotation_speed: f32,
) -> Angles {
    let step = if sample.orbit_held {
        sample.delta * elapsed * rotation_speed
    } else {
        Vec2::ZERO
    };
    let horizontal = horizontal + step.x;
    let raw_vertical = vertical + step.y;
    let mut vertical = raw_vertical;

    let mut rot_x = -vertical / PI;
    let rot_y = horizontal / PI;

    let reset = rot_x > PI * 2.0 || rot_x < -PI * 2.0;
    if reset {
        vertical = 0.0;
        rot_x = 0.0;
    }

    Angles {
        horizontal,
        vertical,
        raw_vertical,
        rot_x,
        rot_y,
        reset,
    }
}

/// Pick the up vector for a given `rot_x`.
///
/// Inverted strictly inside `(-3π/2, -π/2)` or `(π/2, 3π/2)`; the boundary
/// angles themselves keep the natural up.
#[must_use]
pub fn resolve_up(rot_x: f32) -> Vec3 {
    let quarter = PI / 2.0;
    let three_quarters = PI * 3.0 / 2.0;
    let past_lower_pole = rot_x < -quarter && rot_x > -three_quarters;
    let past_upper_pole = rot_x > quarter && rot_x < three_quarters;
    if past_lower_pole || past_upper_pole {
        INVERTED_UP
    } else {
        NATURAL_UP
    }
}

/// Integrate a wheel delta into the zoom accumulator.
///
/// Wheel forward (positive) shrinks the accumulator, moving the camera in.
#[must_use]
pub fn apply_zoom(zoom_accum: f32, zoom_factor: f32, wheel: f32) -> f32 {
    if wheel == 0.0 {
        zoom_accum
    } else {
        zoom_accum + zoom_factor * wheel * -1.0
    }
}

/// Signed orbit distance for the current zoom, never positive.
///
/// The result is the negated offset along local Z, so `-10.0` means the eye
/// sits ten units from the pivot. Closing in stops at the pivot; backing
/// out is unbounded.
#[must_use]
pub fn resolve_distance(pivot_distance: f32, zoom_accum: f32) -> f32 {
    let distance = -pivot_distance * zoom_accum;
    if distance > 0.0 {
        0.0
    } else {
        distance
    }
}

/// Compose the orbit transform: push out along Z by `-distance`, rotate
/// about X, then about Y, then move to the pivot.
///
/// The order is not interchangeable.
#[must_use]
pub fn compose_orbit(distance: f32, rot_x: f32, rot_y: f32, pivot: Vec3) -> Mat4 {
    Mat4::from_translation(pivot)
        * Mat4::from_rotation_y(rot_y)
        * Mat4::from_rotation_x(rot_x)
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -distance))
}

/// Eye position encoded by an orbit transform (its translation column).
#[must_use]
pub fn eye_from_transform(transform: &Mat4) -> Vec3 {
    transform.w_axis.truncate()
}

/// Screen-relative pan offset for a pointer `delta`.
///
/// Moving the pointer right slides the rig along the camera's left, moving
/// it down slides the rig up, at a speed proportional to `|distance|`.
/// Returns `None` when the view direction or the screen-right axis is
/// undefined (eye on the pivot, or looking straight along `up`).
#[must_use]
pub fn pan_offset(
    eye: Vec3,
    pivot: Vec3,
    up: Vec3,
    delta: Vec2,
    pan_speed: f32,
    distance: f32,
) -> Option<Vec3> {
    let dx = -delta.x;
    let dy = delta.y;
    let speed = pan_speed * distance.abs();

    let view_dir = (pivot - eye).try_normalize()?;
    let right = view_dir.cross(up).try_normalize()?;
    let true_up = right.cross(view_dir);

    Some(true_up * (dy * speed) - right * (dx * speed))
}
