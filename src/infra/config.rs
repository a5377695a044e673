//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use chrono::Duration;
use std::net::SocketAddr;

pub const DEFAULT_API_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GATEWAY_URL: &str = "https://w3s.link/ipfs";
pub const DEFAULT_BOTTLE_TTL_SECS: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_addr: SocketAddr,
    /// Prefix for retrieval URLs handed back in upload results.
    pub gateway_url: String,
    /// Lifetime of a bottle that is not permanent.
    pub bottle_ttl: Duration,
}

impl Config {
    /// Reads the environment (after loading `.env` if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_addr = lookup("BOTTLE_API_ADDR").unwrap_or_else(|| DEFAULT_API_ADDR.to_string());
        let api_addr = api_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BOTTLE_API_ADDR must be a socket address, got `{}`", api_addr))?;

        let gateway_url = lookup("IPFS_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        if gateway_url.trim().is_empty() {
            anyhow::bail!("IPFS_GATEWAY_URL must not be empty");
        }

        let ttl_secs = match lookup("BOTTLE_TTL_SECS") {
            Some(v) => v
                .parse::<u64>()
                .with_context(|| format!("BOTTLE_TTL_SECS must be a valid u64, got `{}`", v))?,
            None => DEFAULT_BOTTLE_TTL_SECS,
        };
        let ttl_secs = i64::try_from(ttl_secs.max(1)).context("BOTTLE_TTL_SECS is too large")?;
        let bottle_ttl = Duration::try_seconds(ttl_secs).context("BOTTLE_TTL_SECS is too large")?;

        Ok(Self {
            api_addr,
            gateway_url,
            bottle_ttl,
        })
    }
}
