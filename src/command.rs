//! Compiles validated changes into a single bulb command.

use crate::changes::ChangeSet;
use crate::payload::Payload;

/// The one protocol operation issued for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledCommand {
    /// Turn on, optionally applying a pilot payload.
    TurnOn(Option<Payload>),
    TurnOff,
    Toggle,
}

impl CompiledCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CompiledCommand::TurnOn(_) => "turn_on",
            CompiledCommand::TurnOff => "turn_off",
            CompiledCommand::Toggle => "toggle",
        }
    }
}

/// Maps a change set onto a bulb command.
///
/// `on: false` wins over every other field since a bulb cannot be switched
/// off with attributes. Otherwise scene and brightness are merged into one
/// pilot payload; a request with only attributes turns the light on with them.
///
/// # Examples
///
/// ```
/// use wiz_hue_bridge::{ChangeSet, CompiledCommand, SceneMode, compile};
///
/// let changes = ChangeSet { on: Some(true), scene: Some(SceneMode::Focus), ..Default::default() };
/// let CompiledCommand::TurnOn(Some(payload)) = compile(&changes) else { panic!() };
/// assert_eq!(payload.scene_id(), Some(15));
/// ```
pub fn compile(changes: &ChangeSet) -> CompiledCommand {
    if changes.on == Some(false) {
        return CompiledCommand::TurnOff;
    }

    let mut payload = changes.scene.as_ref().map(Payload::from);
    if let Some(brightness) = &changes.brightness {
        payload
            .get_or_insert_with(Payload::new)
            .brightness(brightness);
    }
    CompiledCommand::TurnOn(payload)
}
