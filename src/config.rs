//! Configuration for Meteo
//!
//! Centralized configuration with sensible defaults.

use crate::error::{MeteoError, Result};
use crate::protocol::{BUFFER_SIZE, DEFAULT_ADDR, DEFAULT_PORT, MIN_REQUEST_LEN};

/// Read timeout applied to each connection unless overridden (milliseconds)
///
/// A peer that never terminates its message is dropped after this long.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

/// Main configuration for a Meteo server or client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host to listen on (server) or connect to (client)
    pub listen_addr: String,

    /// TCP port
    pub port: u16,

    /// Connection read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,

    /// Sleep between accept polls while no client is waiting (milliseconds)
    pub accept_poll_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Capacity of a single message buffer, terminator included.
    /// Received messages longer than `buffer_size - 1` are truncated.
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            write_timeout_ms: 0,
            accept_poll_ms: 10,
            buffer_size: BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` string for binding or connecting
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.listen_addr, self.port)
    }

    /// Check the config before any network activity
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(MeteoError::Config("empty address".to_string()));
        }
        if self.buffer_size <= MIN_REQUEST_LEN {
            return Err(MeteoError::Config(format!(
                "buffer size {} cannot hold a message",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

/// Parse a port number as the CLIs accept it
///
/// Rejects anything outside 1..=65535.
pub fn parse_port(value: &str) -> Result<u16> {
    match value.trim().parse::<u32>() {
        Ok(port) if (1..=65535).contains(&port) => Ok(port as u16),
        _ => Err(MeteoError::Config(format!(
            "invalid port: {} (range 1-65535)",
            value
        ))),
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the host address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Let the OS choose the port when binding
    pub fn ephemeral_port(mut self) -> Self {
        self.config.port = 0;
        self
    }

    /// Set the message buffer capacity (in bytes)
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the accept poll interval (in milliseconds)
    pub fn accept_poll_ms(mut self, ms: u64) -> Self {
        self.config.accept_poll_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
