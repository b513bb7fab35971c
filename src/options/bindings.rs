use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Bindings", inline)]
#[serde(default)]
/// Which mouse buttons drive orbiting and panning.
///
/// Both may be held in the same frame; nothing stops the two from being
/// bound to the same button either.
pub struct ButtonBindings {
    /// Button that orbits the camera around the pivot while held.
    #[schemars(title = "Orbit Button")]
    pub orbit: MouseButton,
    /// Button that pans the whole rig while held.
    #[schemars(title = "Pan Button")]
    pub pan: MouseButton,
}

impl Default for ButtonBindings {
    fn default() -> Self {
        Self {
            orbit: MouseButton::Left,
            pan: MouseButton::Right,
        }
    }
}
