//! TCP Client
//!
//! Sends one request and reads back one response.

use std::io::{BufReader, BufWriter};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{MeteoError, Result};
use crate::protocol::{decode_response, read_frame, write_frame, WeatherResponse};

/// Client side of a single request/response exchange
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    server_addr: SocketAddr,
    buffer_size: usize,
}

impl Client {
    /// Connect to the server named by `config`
    pub fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let addrs: Vec<SocketAddr> = config
            .socket_addr()
            .to_socket_addrs()
            .map_err(|e| {
                MeteoError::Network(format!("Cannot resolve {}: {}", config.listen_addr, e))
            })?
            .collect();
        if addrs.is_empty() {
            return Err(MeteoError::Network(format!(
                "No address found for {}",
                config.listen_addr
            )));
        }

        let stream = TcpStream::connect(addrs.as_slice())?;
        let server_addr = stream.peer_addr()?;
        tracing::debug!("Connected to {}", server_addr);

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        let read_stream = stream.try_clone()?;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(stream),
            server_addr,
            buffer_size: config.buffer_size,
        })
    }

    /// Address of the connected server
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send `request` verbatim and wait for the response
    ///
    /// Consumes the client: the server closes after one exchange.
    pub fn request(mut self, request: &str) -> Result<WeatherResponse> {
        write_frame(&mut self.writer, request.as_bytes())?;
        tracing::debug!("Sent request {:?} to {}", request, self.server_addr);

        let raw = read_frame(&mut self.reader, self.buffer_size)?;
        decode_response(&raw)
    }
}
