//! Input handling: platform events, per-frame samples, and the sources that
//! feed samples to the camera.

/// Event folding into per-frame samples.
pub mod accumulator;
/// Platform-agnostic input events.
pub mod event;
/// The per-frame sample and the source trait.
pub mod sample;
/// Recorded input playback.
pub mod script;

pub use accumulator::InputAccumulator;
pub use event::{InputEvent, MouseButton};
pub use sample::{InputSample, InputSource};
pub use script::{InputScript, ScriptFrame, ScriptPlayer};
