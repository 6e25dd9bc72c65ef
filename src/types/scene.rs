//! Preset lighting scenes.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Preset lighting scenes with static colors or dynamic animations.
///
/// Scenes parse from, and display as, the names the Wiz app shows.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wiz_hue_bridge::SceneMode;
///
/// let scene = SceneMode::from_str("Pastel Colors").unwrap();
/// assert_eq!(scene, SceneMode::PastelColors);
/// assert_eq!(scene.id(), 8);
/// assert!(SceneMode::from_str("pastel colors").is_err());
/// ```
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq)]
pub enum SceneMode {
    Ocean = 1,
    Romance = 2,
    Sunset = 3,
    Party = 4,
    Fireplace = 5,
    Cozy = 6,
    Forest = 7,
    #[strum(to_string = "Pastel Colors")]
    PastelColors = 8,
    #[strum(to_string = "Wake up")]
    WakeUp = 9,
    Bedtime = 10,
    #[strum(to_string = "Warm White")]
    WarmWhite = 11,
    Daylight = 12,
    #[strum(to_string = "Cool white")]
    CoolWhite = 13,
    #[strum(to_string = "Night light")]
    NightLight = 14,
    Focus = 15,
    Relax = 16,
    #[strum(to_string = "True colors")]
    TrueColors = 17,
    #[strum(to_string = "TV time")]
    TvTime = 18,
    Plantgrowth = 19,
    Spring = 20,
    Summer = 21,
    Fall = 22,
    Deepdive = 23,
    Jungle = 24,
    Mojito = 25,
    Club = 26,
    Christmas = 27,
    Halloween = 28,
    Candlelight = 29,
    #[strum(to_string = "Golden white")]
    GoldenWhite = 30,
    Pulse = 31,
    Steampunk = 32,
    Diwali = 33,
    Alarm = 35,
    #[strum(to_string = "Warm Feeling")]
    WarmFeeling = 36,
    Rhythm = 1000,
}

impl SceneMode {
    pub fn create(value: u16) -> Option<Self> {
        SceneMode::iter().find(|scene| scene.id() == value)
    }

    pub fn id(&self) -> u16 {
        *self as u16
    }
}
