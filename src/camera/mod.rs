//! Orbit camera: per-frame orbit math, the owned camera state, the
//! controller that drives them, and the sink that receives the result.

/// Orbit/zoom/pan controller.
pub mod controller;
/// Look-at camera and the sink trait.
pub mod core;
/// Pure per-frame orbit math.
pub mod orbit;
/// Mutable camera state and accumulators.
pub mod state;

pub use controller::OrbitCamera;
pub use self::core::{Camera, CameraSink};
pub use orbit::{INVERTED_UP, NATURAL_UP};
pub use state::CameraState;
