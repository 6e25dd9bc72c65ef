//! Power mode for light control.

/// Power state for a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl PowerMode {
    /// The opposite of the given emitting state.
    pub fn toggled(emitting: bool) -> Self {
        if emitting { PowerMode::Off } else { PowerMode::On }
    }

    pub(crate) fn state(self) -> bool {
        matches!(self, PowerMode::On)
    }
}
