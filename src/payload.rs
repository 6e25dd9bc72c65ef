//! Pilot payload for Wiz lights.

use serde::Serialize;

use crate::types::{Brightness, SceneMode};

/// A pilot payload to send to Wiz lights.
///
/// A payload bundles scene and brightness into a single `setPilot` command so
/// the bulb applies them together.
///
/// # Creating Payloads
///
/// 1. **From a single attribute** using the [`From`] trait:
///    ```
///    use wiz_hue_bridge::{Payload, SceneMode};
///    let payload = Payload::from(&SceneMode::Sunset);
///    ```
///
/// 2. **Builder pattern** for combining attributes:
///    ```
///    use wiz_hue_bridge::{Payload, Brightness, SceneMode};
///    let mut payload = Payload::from(&SceneMode::Ocean);
///    payload.brightness(&Brightness::create(200));
///    assert_eq!(payload.scene_id(), Some(1));
///    assert_eq!(payload.dimming(), Some(78));
///    ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Payload {
    #[serde(rename = "sceneId")]
    pub(crate) scene: Option<u16>,
    pub(crate) dimming: Option<u8>,
}

impl Payload {
    /// Create a new empty payload.
    ///
    /// At least one attribute must be set for the payload to be valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiz_hue_bridge::Payload;
    ///
    /// let payload = Payload::new();
    /// assert_eq!(payload.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this payload contains at least one attribute.
    pub fn is_valid(&self) -> bool {
        self.scene.is_some() || self.dimming.is_some()
    }

    /// Set the scene mode.
    pub fn scene(&mut self, scene: &SceneMode) {
        self.scene = Some(scene.id());
    }

    /// Set the brightness level, converted to the bulb's dimming percentage.
    pub fn brightness(&mut self, brightness: &Brightness) {
        self.dimming = Some(brightness.dimming());
    }

    pub fn scene_id(&self) -> Option<u16> {
        self.scene
    }

    pub fn dimming(&self) -> Option<u8> {
        self.dimming
    }
}

impl From<&SceneMode> for Payload {
    fn from(scene: &SceneMode) -> Self {
        let mut p = Payload::new();
        p.scene(scene);
        p
    }
}

impl From<&Brightness> for Payload {
    fn from(brightness: &Brightness) -> Self {
        let mut p = Payload::new();
        p.brightness(brightness);
        p
    }
}
