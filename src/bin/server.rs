//! Meteo Server Binary
//!
//! Starts the TCP weather server.

use std::sync::Arc;

use clap::Parser;
use meteo::config::{parse_port, DEFAULT_READ_TIMEOUT_MS};
use meteo::network::Server;
use meteo::protocol::{BUFFER_SIZE, DEFAULT_ADDR, DEFAULT_PORT};
use meteo::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// Meteo Server
#[derive(Parser, Debug)]
#[command(name = "meteo-server")]
#[command(about = "Weather server speaking the Meteo text protocol")]
#[command(version)]
struct Args {
    /// Listen address
    #[arg(short, long, default_value_t = DEFAULT_ADDR.to_string())]
    address: String,

    /// Listen port (1-65535)
    #[arg(short, long, default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    port: u16,

    /// Message buffer size in bytes
    #[arg(long, default_value_t = BUFFER_SIZE)]
    buffer_size: usize,

    /// Read timeout per connection in milliseconds (0 = none)
    #[arg(long, default_value_t = DEFAULT_READ_TIMEOUT_MS)]
    read_timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,meteo=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("Meteo Server v{}", meteo::VERSION);
    tracing::info!("Listen address: {}:{}", args.address, args.port);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.address)
        .port(args.port)
        .buffer_size(args.buffer_size)
        .read_timeout_ms(args.read_timeout_ms)
        .build();

    let engine = Arc::new(Engine::new());

    let mut server = match Server::bind(config, engine) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
