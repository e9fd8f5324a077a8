//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::engine::Engine;
use crate::error::{MeteoError, Result};
use crate::protocol::{encode_response, read_frame, write_frame, WeatherResponse};

/// Handles a single client connection
///
/// One request, one response, then the connection is done.
pub struct Connection {
    /// TCP stream reader
    reader: BufReader<TcpStream>,

    /// TCP stream writer
    writer: BufWriter<TcpStream>,

    /// Reference to the request engine
    engine: Arc<Engine>,

    /// Peer address for logging
    peer_addr: String,

    /// Peer IP, shown in the request log line
    peer_ip: String,

    /// Message buffer capacity, terminator included
    buffer_size: usize,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, engine: Arc<Engine>, buffer_size: usize) -> Result<Self> {
        let (peer_addr, peer_ip) = match stream.peer_addr() {
            Ok(addr) => (addr.to_string(), addr.ip().to_string()),
            Err(_) => ("unknown".to_string(), "unknown".to_string()),
        };

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            engine,
            peer_addr,
            peer_ip,
            buffer_size,
        })
    }

    /// Configure connection timeouts (0 leaves the stream blocking forever)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        if read_ms > 0 {
            self.reader
                .get_ref()
                .set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            self.writer
                .get_ref()
                .set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Handle the connection (blocking until the response is sent)
    ///
    /// A client that goes away early is not an error. Anything else is
    /// returned so the caller can log it; the connection is closed either way.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        let raw = match read_frame(&mut self.reader, self.buffer_size) {
            Ok(raw) => raw,
            Err(MeteoError::Io(ref e)) if is_disconnect(e.kind()) => {
                tracing::debug!("Client {} disconnected: {}", self.peer_addr, e);
                return Ok(());
            }
            Err(MeteoError::Io(ref e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
            {
                tracing::debug!("Read timeout for client {}", self.peer_addr);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Richiesta \"{}\" dal client ip {}",
            String::from_utf8_lossy(&raw),
            self.peer_ip
        );

        let response = self.engine.execute(&raw);
        tracing::trace!("Response for {}: {:?}", self.peer_addr, response);

        if let Err(e) = self.send_response(&response) {
            if let MeteoError::Io(ref io_err) = e {
                if is_disconnect(io_err.kind()) {
                    tracing::debug!(
                        "Client {} disconnected before response could be sent: {}",
                        self.peer_addr,
                        e
                    );
                    return Ok(());
                }
            }
            return Err(e);
        }

        tracing::debug!("Connection to {} closed", self.peer_addr);
        Ok(())
    }

    /// Send a response to the client
    ///
    /// Nothing is written if the response does not fit the buffer.
    fn send_response(&mut self, response: &WeatherResponse) -> Result<()> {
        let message = encode_response(response, self.buffer_size)?;
        write_frame(&mut self.writer, &message)
    }
}

fn is_disconnect(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::UnexpectedEof
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::BrokenPipe
    )
}
