//! Individual light control over the Wiz UDP protocol.

use std::net::SocketAddr;
use std::time::Duration;

use log::debug;
use serde_json::{Value, json};
use tokio::net::UdpSocket;

use crate::errors::Error;
use crate::payload::Payload;
use crate::status::{BulbStatus, LightStatus};
use crate::types::PowerMode;

type Result<T> = std::result::Result<T, Error>;

/// Represents a single Wiz smart light bulb.
///
/// A `Light` communicates with a physical Wiz bulb over UDP. The host may be
/// an IP literal or a DNS name; names are resolved on every command.
///
/// # Example
///
/// ```
/// use wiz_hue_bridge::Light;
///
/// let light = Light::new("bulb1.home.arpa");
/// assert_eq!(light.host(), "bulb1.home.arpa");
/// assert_eq!(light.port(), Light::PORT);
/// ```
#[derive(Debug, Clone)]
pub struct Light {
    host: String,
    port: u16,
}

impl Light {
    pub const PORT: u16 = 38899;
    const TIMEOUT_MS: u64 = 1000;
    const MAX_RETRIES: u32 = 3;
    const RETRY_DELAYS_MS: [u64; 3] = [750, 1500, 3000];

    pub fn new(host: &str) -> Self {
        Self::with_port(host, Self::PORT)
    }

    pub fn with_port(host: &str, port: u16) -> Self {
        Light {
            host: host.to_string(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Turns the light on, applying the pilot payload if one is given.
    pub async fn turn_on(&self, payload: Option<&Payload>) -> Result<()> {
        let Some(payload) = payload else {
            return self.set_power(PowerMode::On).await;
        };
        if !payload.is_valid() {
            return Err(Error::NoAttribute);
        }

        let mut params = serde_json::to_value(payload).map_err(Error::JsonDump)?;
        params["state"] = Value::Bool(true);
        self.send_command(&json!({"method": "setPilot", "params": params}))
            .await?;
        Ok(())
    }

    pub async fn turn_off(&self) -> Result<()> {
        self.set_power(PowerMode::Off).await
    }

    /// Reads the current state and sends the opposite power state.
    pub async fn toggle(&self) -> Result<()> {
        let status = self.get_status().await?;
        self.set_power(PowerMode::toggled(status.emitting())).await
    }

    /// Queries the bulb for current status (live network call).
    pub async fn get_status(&self) -> Result<LightStatus> {
        let resp = self.send_command(&json!({"method": "getPilot"})).await?;
        let status: BulbStatus = serde_json::from_value(resp).map_err(Error::JsonLoad)?;
        Ok(LightStatus::from(&status))
    }

    async fn set_power(&self, power: PowerMode) -> Result<()> {
        self.send_command(&json!({"method": "setState", "params": {"state": power.state()}}))
            .await?;
        Ok(())
    }

    /// Sends `msg` and waits for the reply, resending lost datagrams.
    ///
    /// Name resolution happens once up front; a host that does not resolve
    /// fails straight away.
    async fn send_command(&self, msg: &Value) -> Result<Value> {
        let msg_str = serde_json::to_string(msg).map_err(Error::JsonDump)?;
        let addr = self.resolve().await?;
        let mut last_error = None;

        for attempt in 0..=Self::MAX_RETRIES {
            match self.send_udp(addr, &msg_str).await {
                Ok(response) => {
                    debug!("UDP response from {}: {:?}", self.host, response);
                    return check_reply(msg, response);
                }
                Err(e) => {
                    debug!("UDP attempt {} to {} failed: {}", attempt, self.host, e);
                    last_error = Some(e);
                    if attempt < Self::MAX_RETRIES {
                        let delay_idx = (attempt as usize).min(Self::RETRY_DELAYS_MS.len() - 1);
                        tokio::time::sleep(Duration::from_millis(Self::RETRY_DELAYS_MS[delay_idx]))
                            .await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::resolve(&self.host)))
    }

    async fn resolve(&self) -> Result<SocketAddr> {
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| Error::socket("resolve", e))?
            .next()
            .ok_or_else(|| Error::resolve(&self.host))
    }

    async fn send_udp(&self, addr: SocketAddr, msg: &str) -> Result<Value> {
        let bind_addr = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| Error::socket("bind", e))?;

        socket
            .connect(addr)
            .await
            .map_err(|e| Error::socket("connect", e))?;

        socket
            .send(msg.as_bytes())
            .await
            .map_err(|e| Error::socket("send", e))?;

        let mut buffer = [0u8; 4096];

        let bytes = tokio::time::timeout(
            Duration::from_millis(Self::TIMEOUT_MS),
            socket.recv(&mut buffer),
        )
        .await
        .map_err(|_| {
            Error::socket(
                "receive",
                std::io::Error::new(std::io::ErrorKind::TimedOut, "receive timeout"),
            )
        })?
        .map_err(|e| Error::socket("receive", e))?;

        let response = String::from_utf8(buffer[..bytes].to_vec()).map_err(Error::Utf8Decode)?;
        serde_json::from_str(&response).map_err(Error::JsonLoad)
    }
}

fn check_reply(msg: &Value, response: Value) -> Result<Value> {
    match response.get("error") {
        None => Ok(response),
        Some(err) => Err(Error::Device {
            method: msg["method"].as_str().unwrap_or("unknown").to_string(),
            message: err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        }),
    }
}
