//! Light identifier to connection address resolution.

use std::net::IpAddr;

/// Maps a light identifier from a request path to a host the UDP client can
/// connect to.
///
/// IP literals and names already under `domain` are returned as-is; short
/// names gain the configured domain suffix. Without a domain the identifier is
/// left for the system resolver.
///
/// Numeric device IDs as used by the Wiz app are not supported.
///
/// # Examples
///
/// ```
/// use wiz_hue_bridge::resolve;
///
/// assert_eq!(resolve("10.0.0.5", Some("home.arpa")), "10.0.0.5");
/// assert_eq!(resolve("bulb1", Some("home.arpa")), "bulb1.home.arpa");
/// assert_eq!(resolve("bulb1.home.arpa", Some("home.arpa")), "bulb1.home.arpa");
/// assert_eq!(resolve("bulb1", None), "bulb1");
/// ```
pub fn resolve(identifier: &str, domain: Option<&str>) -> String {
    if identifier.parse::<IpAddr>().is_ok() {
        return identifier.to_string();
    }

    match domain {
        Some(domain) if !is_qualified(identifier, domain) => format!("{identifier}.{domain}"),
        _ => identifier.to_string(),
    }
}

fn is_qualified(identifier: &str, domain: &str) -> bool {
    identifier
        .strip_suffix(domain)
        .is_some_and(|host| host.ends_with('.'))
}
