//! Brightness control for Wiz lights.

/// Brightness level on the Hue scale (0-255).
///
/// Wiz bulbs take brightness as a `dimming` percentage between 10 and 100;
/// [`Brightness::dimming`] performs that conversion.
///
/// # Examples
///
/// ```
/// use wiz_hue_bridge::Brightness;
///
/// assert_eq!(Brightness::new().dimming(), 100);
/// assert_eq!(Brightness::create(128).dimming(), 50);
/// assert_eq!(Brightness::create(0).dimming(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl Brightness {
    const MIN_DIMMING: u8 = 10;
    const MAX_DIMMING: u8 = 100;

    pub fn new() -> Self {
        Brightness { value: u8::MAX }
    }

    pub fn create(value: u8) -> Self {
        Brightness { value }
    }

    /// Builds a brightness from a bulb-reported dimming percentage.
    ///
    /// Returns None if the percentage is outside the firmware range (10-100).
    pub fn from_dimming(dimming: u8) -> Option<Self> {
        if !(Self::MIN_DIMMING..=Self::MAX_DIMMING).contains(&dimming) {
            return None;
        }
        let value = (u16::from(dimming) * 255 + 50) / 100;
        Some(Brightness {
            value: u8::try_from(value).unwrap_or(u8::MAX),
        })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// The Wiz `dimming` percentage for this level.
    pub fn dimming(&self) -> u8 {
        let percent = (u16::from(self.value) * 100 + 127) / 255;
        u8::try_from(percent)
            .unwrap_or(Self::MAX_DIMMING)
            .clamp(Self::MIN_DIMMING, Self::MAX_DIMMING)
    }
}
