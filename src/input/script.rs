//! Recorded input, replayed frame by frame.
//!
//! Scripts are TOML documents with one `[[frame]]` table per update:
//!
//! ```toml
//! [[frame]]
//! elapsed = 0.016
//! orbit = true
//! dx = 4.0
//!
//! [[frame]]
//! elapsed = 0.016
//! wheel = 1.0
//! ```
//!
//! Omitted fields default to zero / released.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sample::{InputSample, InputSource};
use crate::error::OrbitCamError;

/// One recorded frame: elapsed time plus the input seen during it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptFrame {
    /// Seconds since the previous frame.
    pub elapsed: f32,
    /// Orbit button held.
    pub orbit: bool,
    /// Pan button held.
    pub pan: bool,
    /// Horizontal pointer delta.
    pub dx: f32,
    /// Vertical pointer delta.
    pub dy: f32,
    /// Wheel delta.
    pub wheel: f32,
}

impl ScriptFrame {
    /// The input half of the frame.
    #[must_use]
    pub fn sample(&self) -> InputSample {
        InputSample {
            orbit_held: self.orbit,
            pan_held: self.pan,
            delta: Vec2::new(self.dx, self.dy),
            wheel: self.wheel,
        }
    }
}

/// A sequence of recorded frames.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputScript {
    /// Frames in playback order.
    #[serde(rename = "frame", default)]
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    /// Parse a script from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, OrbitCamError> {
        toml::from_str(content)
            .map_err(|e| OrbitCamError::ScriptParse(e.to_string()))
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OrbitCamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Start playback from the first frame.
    #[must_use]
    pub fn player(&self) -> ScriptPlayer<'_> {
        ScriptPlayer {
            frames: &self.frames,
            cursor: 0,
        }
    }
}

/// Plays an [`InputScript`] back as an [`InputSource`].
///
/// Each [`sample`](InputSource::sample) consumes one frame; once the script
/// is exhausted every further sample is idle.
#[derive(Debug, Clone)]
pub struct ScriptPlayer<'a> {
    frames: &'a [ScriptFrame],
    cursor: usize,
}

impl ScriptPlayer<'_> {
    /// Elapsed time of the frame the next sample will return, or `None`
    /// once playback is finished.
    #[must_use]
    pub fn next_elapsed(&self) -> Option<f32> {
        self.frames.get(self.cursor).map(|f| f.elapsed)
    }

    /// Index of the next frame to be played.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl InputSource for ScriptPlayer<'_> {
    fn sample(&mut self) -> InputSample {
        match self.frames.get(self.cursor) {
            Some(frame) => {
                self.cursor += 1;
                frame.sample()
            }
            None => InputSample::IDLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r"
[[frame]]
elapsed = 0.5
orbit = true
dx = 2.0

[[frame]]
elapsed = 0.25
wheel = -1.0
";

    #[test]
    fn parses_frames_with_defaults() {
        let script = InputScript::from_toml(SCRIPT).unwrap();
        assert_eq!(script.frames.len(), 2);
        assert_eq!(
            script.frames[0],
            ScriptFrame {
                elapsed: 0.5,
                orbit: true,
                dx: 2.0,
                ..ScriptFrame::default()
            }
        );
        assert!(!script.frames[1].pan);
        assert_eq!(script.frames[1].wheel, -1.0);
    }

    #[test]
    fn empty_document_is_an_empty_script() {
        let script = InputScript::from_toml("").unwrap();
        assert!(script.frames.is_empty());
        assert_eq!(script.player().next_elapsed(), None);
    }

    #[test]
    fn player_advances_then_idles() {
        let script = InputScript::from_toml(SCRIPT).unwrap();
        let mut player = script.player();

        assert_eq!(player.next_elapsed(), Some(0.5));
        let first = player.sample();
        assert!(first.orbit_held);
        assert_eq!(first.delta, Vec2::new(2.0, 0.0));

        assert_eq!(player.next_elapsed(), Some(0.25));
        assert_eq!(player.sample().wheel, -1.0);

        assert_eq!(player.next_elapsed(), None);
        assert_eq!(player.sample(), InputSample::IDLE);
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn bad_field_type_is_a_script_error() {
        let err = InputScript::from_toml("[[frame]]\norbit = 3").unwrap_err();
        assert!(matches!(err, OrbitCamError::ScriptParse(_)));
    }
}
