//! Process configuration, read once at startup.

use std::net::SocketAddr;

use clap::Parser;

use crate::light::Light;

/// Hue-style HTTP API for Wiz smart lights.
#[derive(Debug, Clone, Parser)]
#[command(name = "wiz-hue-bridge", version, about, long_about = None)]
pub struct Config {
    /// DNS domain appended to short light names (e.g. "home.arpa")
    #[arg(short, long, env = "WIZ_DOMAIN", value_parser = parse_domain)]
    pub domain: Option<String>,

    /// Address the HTTP API listens on
    #[arg(short, long, env = "WIZ_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// UDP port the bulbs listen on
    #[arg(long, env = "WIZ_BULB_PORT", default_value_t = Light::PORT)]
    pub bulb_port: u16,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// The configured domain, if any. An empty value means no domain.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|domain| !domain.is_empty())
    }

    /// Default log filter for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,wiz_hue_bridge=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            domain: None,
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            bulb_port: Light::PORT,
            verbose: 0,
        }
    }
}

/// Trims surrounding dots and whitespace.
fn parse_domain(raw: &str) -> Result<String, String> {
    let domain = raw.trim().trim_matches('.');
    if domain.contains(char::is_whitespace) {
        return Err(format!("invalid domain {raw:?}"));
    }
    Ok(domain.to_string())
}
