//! Light status as reported by the bulb.

use std::fmt;

use serde::Deserialize;

use crate::types::{Brightness, PowerMode, SceneMode};

/// The last known settings of a light bulb.
///
/// Built from a `getPilot` reply, or from a power mode for simulated bulbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightStatus {
    emitting: bool,
    brightness: Option<Brightness>,
    scene: Option<SceneMode>,
}

impl LightStatus {
    /// Check if the light is emitting.
    pub fn emitting(&self) -> bool {
        self.emitting
    }

    /// Get the reported brightness.
    pub fn brightness(&self) -> Option<&Brightness> {
        self.brightness.as_ref()
    }

    /// Get the reported scene.
    pub fn scene(&self) -> Option<&SceneMode> {
        self.scene.as_ref()
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.emitting() { "on" } else { "off" })?;
        if let Some(brightness) = self.brightness() {
            write!(f, ", bri {}", brightness.value())?;
        }
        if let Some(scene) = self.scene() {
            write!(f, ", scene {scene}")?;
        }
        Ok(())
    }
}

impl From<&PowerMode> for LightStatus {
    fn from(power: &PowerMode) -> Self {
        LightStatus {
            emitting: power.state(),
            brightness: None,
            scene: None,
        }
    }
}

impl From<&BulbStatus> for LightStatus {
    fn from(bulb: &BulbStatus) -> Self {
        let res = &bulb.result;

        LightStatus {
            emitting: res.emitting,
            brightness: res.dimming.and_then(Brightness::from_dimming),
            scene: res.scene.and_then(SceneMode::create),
        }
    }
}

/// Bulb status as reported by the bulb via getPilot.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct BulbStatus {
    pub result: BulbStatusResult,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct BulbStatusResult {
    #[serde(rename = "state")]
    pub emitting: bool,
    pub dimming: Option<u8>,
    #[serde(rename = "sceneId")]
    pub scene: Option<u16>,
}
