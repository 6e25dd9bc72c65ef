//! Short-lived command sessions with a single bulb.
//!
//! A [`DeviceSession`] opens a fresh client for every request, sends one
//! command and then reads the bulb state back. Both calls run under the same
//! per-call timeout and are never retried here.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use log::{debug, info, warn};

use crate::command::CompiledCommand;
use crate::errors::{Error, SessionError};
use crate::light::Light;
use crate::payload::Payload;
use crate::status::LightStatus;

/// How long each bulb call may take before the request fails.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// The operations a session needs from a bulb protocol client.
pub trait LightClient: Send + Sync {
    fn turn_on<'a>(&'a self, payload: Option<&'a Payload>) -> BoxFuture<'a, Result<(), Error>>;

    fn turn_off(&self) -> BoxFuture<'_, Result<(), Error>>;

    fn toggle(&self) -> BoxFuture<'_, Result<(), Error>>;

    /// Reads the bulb's current state.
    fn update_state(&self) -> BoxFuture<'_, Result<LightStatus, Error>>;
}

/// Builds one client per session.
pub trait ClientFactory: Send + Sync {
    fn connect(&self, address: &str) -> Box<dyn LightClient>;
}

impl LightClient for Light {
    fn turn_on<'a>(&'a self, payload: Option<&'a Payload>) -> BoxFuture<'a, Result<(), Error>> {
        Box::pin(Light::turn_on(self, payload))
    }

    fn turn_off(&self) -> BoxFuture<'_, Result<(), Error>> {
        Box::pin(Light::turn_off(self))
    }

    fn toggle(&self) -> BoxFuture<'_, Result<(), Error>> {
        Box::pin(Light::toggle(self))
    }

    fn update_state(&self) -> BoxFuture<'_, Result<LightStatus, Error>> {
        Box::pin(self.get_status())
    }
}

/// Creates UDP [`Light`] clients on a fixed bulb port.
#[derive(Debug, Clone, Copy)]
pub struct UdpClientFactory {
    port: u16,
}

impl UdpClientFactory {
    pub fn new(port: u16) -> Self {
        UdpClientFactory { port }
    }
}

impl Default for UdpClientFactory {
    fn default() -> Self {
        Self::new(Light::PORT)
    }
}

impl ClientFactory for UdpClientFactory {
    fn connect(&self, address: &str) -> Box<dyn LightClient> {
        Box::new(Light::with_port(address, self.port))
    }
}

/// Runs commands against bulbs through a [`ClientFactory`].
#[derive(Clone)]
pub struct DeviceSession {
    factory: Arc<dyn ClientFactory>,
    timeout: Duration,
}

impl DeviceSession {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self::with_timeout(factory, COMMAND_TIMEOUT)
    }

    pub fn with_timeout(factory: Arc<dyn ClientFactory>, timeout: Duration) -> Self {
        DeviceSession { factory, timeout }
    }

    /// Sends `command` to the bulb at `address`, then returns its refreshed
    /// state.
    pub async fn execute(
        &self,
        address: &str,
        command: &CompiledCommand,
    ) -> Result<LightStatus, SessionError> {
        let client = self.factory.connect(address);
        info!("sending {} to {}", command.name(), address);

        let sent = match command {
            CompiledCommand::TurnOn(payload) => client.turn_on(payload.as_ref()),
            CompiledCommand::TurnOff => client.turn_off(),
            CompiledCommand::Toggle => client.toggle(),
        };
        self.bounded(address, sent).await?;

        let status = self.bounded(address, client.update_state()).await?;
        debug!("{} reports {}", address, status);
        Ok(status)
    }

    async fn bounded<T>(
        &self,
        address: &str,
        call: BoxFuture<'_, Result<T, Error>>,
    ) -> Result<T, SessionError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!("light {} unreachable: {}", address, e);
                Err(SessionError::Connectivity(e))
            }
            Err(_) => {
                warn!("light {} timed out after {:?}", address, self.timeout);
                Err(SessionError::Timeout(self.timeout))
            }
        }
    }
}
