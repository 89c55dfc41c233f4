//! Server configuration
//!
//! Everything the server needs is carried in [`ServerConfig`] and handed to
//! the router at startup. Command line flags (with environment fallbacks) are
//! parsed by [`Args`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::time::Duration;

use clap::Parser;

use crate::error::{FeedError, FeedResult};
use crate::types::Feed;

/// Default listen address, Go style: all interfaces, port 8080
pub const DEFAULT_ADDR: &str = ":8080";

/// Default push cadence
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Default upgrader write buffer size
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Command line arguments for the `flight-feed` binary
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-feed",
    version,
    about = "Serve a live page and push simulated traffic, status and situation reports over WebSocket"
)]
pub struct Args {
    /// HTTP service address (`:port`, `host:port` or `ip:port`)
    #[arg(long, env = "FLIGHT_FEED_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Milliseconds between pushed reports
    #[arg(long, env = "FLIGHT_FEED_INTERVAL_MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Feed the home page subscribes to
    #[arg(long, env = "FLIGHT_FEED_HOME", value_enum, default_value_t = Feed::Traffic)]
    pub feed: Feed,

    /// WebSocket write buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    pub write_buffer: usize,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,
    /// Delay between two reports on a push connection
    pub interval: Duration,
    /// Feed the home page connects to
    pub home_feed: Feed,
    /// Upgrader write buffer size
    pub write_buffer_size: usize,
}

impl ServerConfig {
    /// Build a config with default settings bound to `addr`
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            home_feed: Feed::Traffic,
            write_buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Override the push interval
    pub fn with_interval(mut self, interval: Duration) -> FeedResult<Self> {
        if interval.is_zero() {
            return Err(FeedError::ZeroInterval);
        }
        self.interval = interval;
        Ok(self)
    }

    /// Override the home page feed
    pub fn with_home_feed(mut self, feed: Feed) -> Self {
        self.home_feed = feed;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080))
    }
}

impl TryFrom<Args> for ServerConfig {
    type Error = FeedError;

    fn try_from(args: Args) -> FeedResult<Self> {
        let config = ServerConfig {
            addr: parse_listen_addr(&args.addr)?,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            home_feed: args.feed,
            write_buffer_size: args.write_buffer,
        };
        config.with_interval(Duration::from_millis(args.interval_ms))
    }
}

/// Parse a listen address
///
/// Accepts `:8080` (all interfaces), `127.0.0.1:8080`, `[::1]:8080` and
/// resolvable `host:port` pairs such as `localhost:8080`.
pub fn parse_listen_addr(addr: &str) -> FeedResult<SocketAddr> {
    let invalid = |reason: &str| FeedError::InvalidAddress {
        addr: addr.to_string(),
        reason: reason.to_string(),
    };

    let addr = addr.trim();
    if let Some(port) = addr.strip_prefix(':') {
        let port: u16 = port.parse().map_err(|_| invalid("port is not a number"))?;
        return Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port));
    }

    if let Ok(sock) = addr.parse::<SocketAddr>() {
        return Ok(sock);
    }

    if !addr.contains(':') {
        return Err(invalid("missing port"));
    }

    addr.to_socket_addrs()
        .map_err(|e| invalid(&e.to_string()))?
        .next()
        .ok_or_else(|| invalid("host did not resolve"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_only() {
        let addr = parse_listen_addr(":8080").unwrap();
        assert_eq!(addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_parse_full_address() {
        let addr = parse_listen_addr("127.0.0.1:9001").unwrap();
        assert_eq!(addr, "127.0.0.1:9001".parse::<SocketAddr>().unwrap());

        let addr = parse_listen_addr("[::1]:9001").unwrap();
        assert!(addr.is_ipv6());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_listen_addr(":http"),
            Err(FeedError::InvalidAddress { .. })
        ));
        assert!(matches!(
            parse_listen_addr("8080"),
            Err(FeedError::InvalidAddress { .. })
        ));
        assert!(parse_listen_addr(":70000").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["flight-feed"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.home_feed, Feed::Traffic);
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from([
            "flight-feed",
            "--addr",
            "127.0.0.1:3000",
            "--interval-ms",
            "250",
            "--feed",
            "situation",
        ])
        .unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.home_feed, Feed::Situation);
    }

    #[test]
    fn test_write_buffer_flag() {
        let args = Args::try_parse_from(["flight-feed", "--write-buffer", "4096"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.write_buffer_size, 4096);

        // axum's upgrader has no read buffer knob, so neither do we
        assert!(Args::try_parse_from(["flight-feed", "--read-buffer", "4096"]).is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = Args::try_parse_from(["flight-feed", "--interval-ms", "0"]).unwrap();
        assert!(matches!(
            ServerConfig::try_from(args),
            Err(FeedError::ZeroInterval)
        ));
    }
}
