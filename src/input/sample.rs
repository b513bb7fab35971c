use glam::Vec2;

/// Everything the orbit camera reads from input in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Orbit button is held.
    pub orbit_held: bool,
    /// Pan button is held.
    pub pan_held: bool,
    /// Pointer movement since the previous frame, in pixels (+y is down).
    pub delta: Vec2,
    /// Wheel movement since the previous frame (0 when idle).
    pub wheel: f32,
}

impl InputSample {
    /// A frame with no buttons held and no movement.
    pub const IDLE: Self = Self {
        orbit_held: false,
        pan_held: false,
        delta: Vec2::ZERO,
        wheel: 0.0,
    };
}

/// Supplies one [`InputSample`] per camera update.
///
/// Implementations decide what "per frame" means: an accumulator drains the
/// deltas gathered since the last call, a script advances to its next frame.
pub trait InputSource {
    /// Take this frame's input.
    fn sample(&mut self) -> InputSample;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn sample(&mut self) -> InputSample {
        (**self).sample()
    }
}

/// A fixed sample repeats every frame.
impl InputSource for InputSample {
    fn sample(&mut self) -> InputSample {
        *self
    }
}
