//! Application configuration management

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result, ensure};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Load the standard authors, genres and books at startup
    pub seed_data: bool,

    /// Buffered events per notification channel before slow subscribers lag
    pub event_channel_capacity: usize,

    /// Maximum GraphQL query depth
    pub max_query_depth: usize,

    /// Maximum GraphQL query complexity
    pub max_query_complexity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
            seed_data: true,
            event_channel_capacity: 256,
            max_query_depth: 16,
            max_query_complexity: 1000,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: match lookup("HOST") {
                Some(v) => v.parse().with_context(|| format!("Invalid HOST: {v}"))?,
                None => defaults.host,
            },

            port: match lookup("PORT") {
                Some(v) => v.parse().with_context(|| format!("Invalid PORT: {v}"))?,
                None => defaults.port,
            },

            seed_data: lookup("SEED_DATA")
                .map(|v| parse_bool(&v))
                .unwrap_or(defaults.seed_data),

            event_channel_capacity: match lookup("EVENT_CHANNEL_CAPACITY") {
                Some(v) => v.parse().context("Invalid EVENT_CHANNEL_CAPACITY")?,
                None => defaults.event_channel_capacity,
            },

            max_query_depth: match lookup("GRAPHQL_MAX_DEPTH") {
                Some(v) => v.parse().context("Invalid GRAPHQL_MAX_DEPTH")?,
                None => defaults.max_query_depth,
            },

            max_query_complexity: match lookup("GRAPHQL_MAX_COMPLEXITY") {
                Some(v) => v.parse().context("Invalid GRAPHQL_MAX_COMPLEXITY")?,
                None => defaults.max_query_complexity,
            },
        };

        ensure!(
            config.event_channel_capacity > 0,
            "EVENT_CHANNEL_CAPACITY must be at least 1"
        );

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
