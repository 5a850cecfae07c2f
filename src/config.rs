//! Process configuration: command-line flags with environment fallbacks.

use std::net::SocketAddr;
use clap::Parser;

pub const DEFAULT_PORT: u16 = 3000;

/// In-memory user registry exposed over HTTP.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "user_registry", version)]
pub struct Config {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: std::net::IpAddr,

    /// Number of requests that may queue for the registry actor.
    #[arg(long, env = "CHANNEL_CAPACITY", default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub channel_capacity: u32,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity as usize
    }
}
