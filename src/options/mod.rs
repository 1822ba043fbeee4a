//! Centralized camera options with TOML preset support.
//!
//! All tweakable settings (projection, free-camera movement, orbit
//! bounds) are consolidated here. Options serialize to/from TOML so a
//! host can ship view presets; `json_schema` describes the UI-exposed
//! subset.

mod free;
mod projection;
mod target;

use std::path::Path;

pub use free::FreeCameraOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use target::TargetCameraOptions;

use crate::error::CamrigError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[target]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Perspective projection parameters.
    pub projection: ProjectionOptions,
    /// Free-fly camera movement parameters.
    pub free: FreeCameraOptions,
    /// Orbit camera focus, distance, and clamp parameters.
    pub target: TargetCameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamrigError> {
        let content = std::fs::read_to_string(path).map_err(CamrigError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        log::info!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamrigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamrigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamrigError::Io)?;
        }
        std::fs::write(path, content).map_err(CamrigError::Io)?;
        log::info!("saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[target]
max_distance = 50.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.target.max_distance, 50.0);
        // Everything else should be default
        assert_eq!(opts.target.min_distance, 1.0);
        assert_eq!(opts.projection.fovy, 45.0);
        assert_eq!(opts.free.speed, 0.5);
    }

    #[test]
    fn rigs_pick_up_option_values() {
        use crate::camera::free::FreeCamera;
        use crate::camera::rig::CameraRig;
        use crate::camera::target::TargetCamera;

        let mut opts = Options::default();
        opts.projection.fovy = 60.0;
        opts.free.speed = 2.0;
        opts.target.distance = 100.0; // out of [1, 10], must clamp

        let free = FreeCamera::from_options(&opts, 1.6);
        assert_eq!(free.speed(), 2.0);
        assert_eq!(free.core().fovy(), 60.0);
        assert_eq!(free.core().aspect_ratio(), 1.6);

        let target = TargetCamera::from_options(&opts, 1.6);
        assert_eq!(target.distance(), 10.0);
        assert_eq!(target.core().fovy(), 60.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("projection"));
        assert!(props.contains_key("free"));
        assert!(props.contains_key("target"));

        // Projection should expose fovy but not the clip planes.
        let projection = &props["projection"]["properties"];
        assert!(projection.get("fovy").is_some());
        assert!(projection.get("znear").is_none());
        assert!(projection.get("zfar").is_none());

        // Target should expose pitch bounds but not the raw focus point.
        let target = &props["target"]["properties"];
        assert!(target.get("min_pitch").is_some());
        assert!(target.get("target").is_none());
    }
}
