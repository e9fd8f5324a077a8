//! Protocol Module
//!
//! Defines the text wire protocol shared by client and server.
//!
//! ## Protocol Format
//!
//! Every message is a single frame: printable text followed by one
//! terminator byte (`0x00`). One request and one response per connection.
//!
//! ### Request Format
//! ```text
//! ┌──────────┬─────────────┬─────────────────────┬──────┐
//! │ Kind (1) │ Spaces (1+) │        City         │ 0x00 │
//! └──────────┴─────────────┴─────────────────────┴──────┘
//! ```
//!
//! ### Kinds
//! - `t`: temperature (°C)
//! - `h`: humidity (%)
//! - `w`: wind speed (km/h)
//! - `p`: pressure (hPa)
//!
//! ### Response Format
//! ```text
//! ┌────────────┬───┬──────────┬───┬─────────────┬──────┐
//! │ Status (u) │ ␠ │ Kind (1) │ ␠ │ Value (%.1) │ 0x00 │
//! └────────────┴───┴──────────┴───┴─────────────┴──────┘
//! ```
//!
//! ### Status Codes
//! - 0: SUCCESS
//! - 1: CITY_NOT_FOUND
//! - 2: INVALID_REQUEST

mod kind;
mod request;
mod response;
mod codec;

pub use kind::WeatherKind;
pub use request::{RawRequest, WeatherRequest};
pub use response::{Status, WeatherResponse};
pub use codec::{
    decode_request, decode_request_lenient, decode_response, encode_response, format_response,
    read_frame, strip_terminator, write_frame,
};

/// Default server host
pub const DEFAULT_ADDR: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 27015;

/// Default message buffer capacity, terminator included
pub const BUFFER_SIZE: usize = 512;

/// Capacity of the city field, terminator included (63 bytes of payload)
pub const CITY_CAPACITY: usize = 64;

/// Shortest request that can carry a kind, a separator and a city
pub const MIN_REQUEST_LEN: usize = 3;

/// Message terminator byte
pub const TERMINATOR: u8 = 0x00;
