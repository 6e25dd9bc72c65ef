//! Validated light state changes parsed from a request body.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::errors::ValidationError;
use crate::types::{Brightness, SceneMode};

type Result<T> = std::result::Result<T, ValidationError>;

/// The state changes requested for a light.
///
/// Built only through [`validate`], so a `ChangeSet` always has at least one
/// field set and every field is in range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSet {
    pub on: Option<bool>,
    pub brightness: Option<Brightness>,
    pub scene: Option<SceneMode>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.on.is_none() && self.brightness.is_none() && self.scene.is_none()
    }
}

/// Parses a light state request body.
///
/// Recognised fields are `on` (boolean), `wiz_scene` (scene name) and `bri`
/// (number in 0-255, truncated). Anything else in the object is ignored.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wiz_hue_bridge::{SceneMode, ValidationError, validate};
///
/// let changes = validate(Some(&json!({"on": true, "wiz_scene": "Ocean"}))).unwrap();
/// assert_eq!(changes.on, Some(true));
/// assert_eq!(changes.scene, Some(SceneMode::Ocean));
///
/// assert_eq!(validate(Some(&json!({"bri": 300}))), Err(ValidationError::InvalidBrightness));
/// ```
pub fn validate(body: Option<&Value>) -> Result<ChangeSet> {
    let fields = body
        .and_then(Value::as_object)
        .ok_or(ValidationError::InvalidPayload)?;

    let changes = ChangeSet {
        on: parse_on(fields)?,
        scene: parse_scene(fields)?,
        brightness: parse_brightness(fields)?,
    };

    if changes.is_empty() {
        return Err(ValidationError::NoChangesProvided);
    }
    Ok(changes)
}

fn parse_on(fields: &Map<String, Value>) -> Result<Option<bool>> {
    fields
        .get("on")
        .map(|on| on.as_bool().ok_or(ValidationError::MissingOrInvalidField))
        .transpose()
}

fn parse_scene(fields: &Map<String, Value>) -> Result<Option<SceneMode>> {
    fields
        .get("wiz_scene")
        .map(|scene| {
            scene
                .as_str()
                .and_then(|name| SceneMode::from_str(name).ok())
                .ok_or(ValidationError::MissingOrInvalidField)
        })
        .transpose()
}

fn parse_brightness(fields: &Map<String, Value>) -> Result<Option<Brightness>> {
    let Some(bri) = fields.get("bri") else {
        return Ok(None);
    };
    let value = bri
        .as_f64()
        .filter(|v| (0.0..=255.0).contains(v))
        .ok_or(ValidationError::InvalidBrightness)?;
    // Range checked above; the cast drops the fraction.
    Ok(Some(Brightness::create(value as u8)))
}
