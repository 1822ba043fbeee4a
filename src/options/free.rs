use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Camera", inline)]
#[serde(default)]
/// Free-fly camera movement parameters.
pub struct FreeCameraOptions {
    /// Movement speed in meters per second.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
}

impl Default for FreeCameraOptions {
    fn default() -> Self {
        Self { speed: 0.5 }
    }
}
