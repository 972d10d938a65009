//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::net::SocketAddr;
use std::path::PathBuf;

use acadira_core::sitemap::BaseUrl;
use acadira_core::{Result, SiteError};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Socket the HTTP listener binds to
    pub bind_addr: SocketAddr,

    /// Directory holding the built WASM bundle (`trunk build` output)
    pub static_dir: PathBuf,

    /// Public origin used for sitemap and robots.txt links
    pub base_url: BaseUrl,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| SiteError::Config(format!("BIND_ADDR '{bind_addr}': {e}")))?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into());

        let base_url = lookup("SITE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir),
            base_url: BaseUrl::parse(&base_url)?,
        })
    }
}
