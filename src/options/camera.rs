use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default orbit radius before any zoom is applied.
pub const DEFAULT_PIVOT_DISTANCE: f32 = 10.0;
/// Default wheel-to-zoom sensitivity.
pub const DEFAULT_ZOOM_FACTOR: f32 = 0.15;
/// Default pointer-to-rotation sensitivity.
pub const DEFAULT_ROTATION_SPEED: f32 = 100.0;
/// Default pan sensitivity.
pub const DEFAULT_PAN_SPEED: f32 = 0.01;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera tunables.
///
/// Values are taken as-is: a negative `pivot_distance` or speed is not
/// rejected, it just produces unusual (but deterministic) motion.
pub struct CameraOptions {
    /// Base orbit radius, scaled by the zoom accumulator.
    #[schemars(title = "Pivot Distance", range(min = 0.1, max = 1000.0), extend("step" = 0.5))]
    pub pivot_distance: f32,
    /// Wheel-to-zoom sensitivity.
    #[schemars(title = "Zoom Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_factor: f32,
    /// Pointer-delta-to-rotation sensitivity.
    #[schemars(title = "Rotation Speed", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub rotation_speed: f32,
    /// Pan sensitivity, scaled by the current orbit distance.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub pan_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            pivot_distance: DEFAULT_PIVOT_DISTANCE,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            pan_speed: DEFAULT_PAN_SPEED,
        }
    }
}

impl CameraOptions {
    /// Options with an explicit radius and sensitivities; pan speed keeps its
    /// default.
    #[must_use]
    pub fn new(pivot_distance: f32, zoom_factor: f32, rotation_speed: f32) -> Self {
        Self {
            pivot_distance,
            zoom_factor,
            rotation_speed,
            ..Self::default()
        }
    }
}
