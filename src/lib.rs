//! # wiz_hue_bridge
//!
//! A small Hue-style HTTP API in front of Philips Wiz smart lights.
//!
//! Requests such as `PUT /api/lights/{light_id}/state` are validated,
//! compiled into a single Wiz UDP command, sent to the bulb under a timeout,
//! and answered with the state the bulb reports afterwards.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wiz_hue_bridge::{AppState, Config, router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let app = router(AppState::from_config(&config));
//!     let listener = tokio::net::TcpListener::bind(config.listen).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Request Flow
//!
//! 1. [`validate`] turns the JSON body into a [`ChangeSet`]
//! 2. [`resolve`] turns the light id into a host, appending the configured domain
//!    to short names
//! 3. [`compile`] turns the changes into one [`CompiledCommand`]
//! 4. [`DeviceSession`] sends the command, then reads the bulb state back
//!
//! ## HTTP API
//!
//! - `GET /` - greeting
//! - `PUT /api/lights/{light_id}/state` - body fields `on`, `bri` (0-255) and
//!   `wiz_scene` (a [`SceneMode`] name)
//! - `PUT /api/lights/{light_id}/state/on/toggle` - flip the power state
//!
//! ## Communication
//!
//! All communication with Wiz bulbs occurs over UDP on port 38899. The bulbs must
//! be on the same local network and reachable by IP or DNS name.

mod changes;
mod command;
mod config;
mod errors;
mod light;
mod payload;
mod resolver;
mod server;
mod session;
mod status;
mod types;

// Re-export public API
pub use changes::{ChangeSet, validate};
pub use command::{CompiledCommand, compile};
pub use config::Config;
pub use errors::{Error, SessionError, ValidationError};
pub use light::Light;
pub use payload::Payload;
pub use resolver::resolve;
pub use server::{ApiError, AppState, router};
pub use session::{COMMAND_TIMEOUT, ClientFactory, DeviceSession, LightClient, UdpClientFactory};
pub use status::LightStatus;
pub use types::{Brightness, PowerMode, SceneMode};
