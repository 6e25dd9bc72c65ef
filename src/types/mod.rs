//! Value types for light control parameters.

mod brightness;
mod power;
mod scene;

pub use brightness::Brightness;
pub use power::PowerMode;
pub use scene::SceneMode;
