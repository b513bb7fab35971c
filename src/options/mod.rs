//! Camera tunables and button bindings with TOML preset support.
//!
//! Options serialize to/from TOML; every section uses `#[serde(default)]`
//! so a file that only overrides `[camera]` (or a single field of it) loads
//! cleanly.

mod bindings;
mod camera;

use std::path::Path;

pub use bindings::ButtonBindings;
pub use camera::{
    CameraOptions, DEFAULT_PAN_SPEED, DEFAULT_PIVOT_DISTANCE,
    DEFAULT_ROTATION_SPEED, DEFAULT_ZOOM_FACTOR,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitCamError;

/// Top-level options container.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit radius and sensitivities.
    pub camera: CameraOptions,
    /// Mouse button assignments.
    pub bindings: ButtonBindings,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, OrbitCamError> {
        toml::from_str(content)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitCamError> {
        let content = std::fs::read_to_string(path).map_err(OrbitCamError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitCamError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitCamError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_reference_values() {
        let camera = CameraOptions::default();
        assert_eq!(camera.pivot_distance, 10.0);
        assert_eq!(camera.zoom_factor, 0.15);
        assert_eq!(camera.rotation_speed, 100.0);
        assert_eq!(camera.pan_speed, 0.01);

        let bindings = ButtonBindings::default();
        assert_eq!(bindings.orbit, MouseButton::Left);
        assert_eq!(bindings.pan, MouseButton::Right);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
zoom_factor = 0.3

[bindings]
pan = "middle"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.zoom_factor, 0.3);
        assert_eq!(opts.camera.pivot_distance, 10.0);
        assert_eq!(opts.bindings.pan, MouseButton::Middle);
        assert_eq!(opts.bindings.orbit, MouseButton::Left);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nzoom_factor = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, OrbitCamError::OptionsParse(_)));
    }

    #[test]
    fn explicit_constructor_keeps_default_pan_speed() {
        let camera = CameraOptions::new(25.0, 0.5, 40.0);
        assert_eq!(camera.pivot_distance, 25.0);
        assert_eq!(camera.zoom_factor, 0.5);
        assert_eq!(camera.rotation_speed, 40.0);
        assert_eq!(camera.pan_speed, DEFAULT_PAN_SPEED);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = std::env::temp_dir()
            .join(format!("orbitcam-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.pan_speed = 0.05;
        opts.bindings.orbit = MouseButton::Middle;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("bindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("pivot_distance").is_some());
        assert!(camera.get("pan_speed").is_some());
    }
}
