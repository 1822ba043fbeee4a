use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Target Camera", inline)]
#[serde(default)]
/// Orbit camera focus, distance, and clamp parameters.
pub struct TargetCameraOptions {
    /// Initial focus point in world space.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Initial orbit distance (clamped into the distance bounds).
    #[schemars(title = "Distance", range(min = 0.1, max = 1000.0))]
    pub distance: f32,
    /// Minimum orbit distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Maximum orbit distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Lower pitch clamp bound in degrees.
    #[schemars(title = "Min Pitch", range(min = -89.0, max = 0.0), extend("step" = 1.0))]
    pub min_pitch: f32,
    /// Upper pitch clamp bound in degrees.
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub max_pitch: f32,
}

impl Default for TargetCameraOptions {
    fn default() -> Self {
        Self {
            target: [0.0, 0.0, 0.0],
            distance: 5.0,
            min_distance: 1.0,
            max_distance: 10.0,
            min_pitch: -60.0,
            max_pitch: 60.0,
        }
    }
}
