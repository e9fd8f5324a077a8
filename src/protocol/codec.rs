//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! "<kind><space>+<city>" 0x00
//! ```
//!
//! ### Response
//! ```text
//! "<status> <kind> <value>" 0x00
//! ```
//!
//! Failure responses carry a `'\0'` kind. Since the frame ends at the first
//! `0x00`, what actually travels for them is `"<status> "` plus terminator,
//! and the decoder fills in the sentinels.

use std::io::{ErrorKind, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use super::{
    RawRequest, WeatherKind, WeatherRequest, WeatherResponse, CITY_CAPACITY, MIN_REQUEST_LEN,
    TERMINATOR,
};
use crate::error::{MeteoError, RequestError, Result};

// =============================================================================
// Request Decoding
// =============================================================================

/// Decode and validate a request, as the server does
///
/// Checks run in order, first failure wins: length, kind, city.
pub fn decode_request(bytes: &[u8]) -> std::result::Result<WeatherRequest, RequestError> {
    let bytes = check_length(bytes)?;

    let kind = WeatherKind::from_byte(bytes[0]).ok_or(RequestError::UnknownKind(bytes[0]))?;
    let city = decode_city(&bytes[1..])?;

    Ok(WeatherRequest { kind, city })
}

/// Decode a request without checking the kind byte
///
/// The client runs this on its own request string to recover the city name.
pub fn decode_request_lenient(bytes: &[u8]) -> std::result::Result<RawRequest, RequestError> {
    let bytes = check_length(bytes)?;
    let city = decode_city(&bytes[1..])?;

    Ok(RawRequest {
        kind: bytes[0],
        city,
    })
}

/// Cut at the terminator and enforce the minimum length
fn check_length(bytes: &[u8]) -> std::result::Result<&[u8], RequestError> {
    let bytes = strip_terminator(bytes);
    match bytes.len() {
        0 => Err(RequestError::Empty),
        len if len < MIN_REQUEST_LEN => Err(RequestError::TooShort(len)),
        _ => Ok(bytes),
    }
}

/// Skip every leading space, then copy the rest verbatim
fn decode_city(rest: &[u8]) -> std::result::Result<String, RequestError> {
    let start = rest
        .iter()
        .position(|&b| b != b' ')
        .ok_or(RequestError::MissingCity)?;

    let city = &rest[start..];
    let city = &city[..city.len().min(CITY_CAPACITY - 1)];

    Ok(String::from_utf8_lossy(city).into_owned())
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Format a response as text: `"<status> <kind> <value>"`
///
/// The value always carries exactly one fractional digit.
pub fn format_response(response: &WeatherResponse) -> String {
    format!(
        "{} {} {:.1}",
        response.status,
        char::from(response.kind),
        response.value
    )
}

/// Encode a response into the bytes to put on the wire (terminator excluded)
///
/// Fails if the formatted text plus terminator does not fit in `capacity`.
pub fn encode_response(response: &WeatherResponse, capacity: usize) -> Result<Bytes> {
    let text = format_response(response);

    if text.len() >= capacity {
        return Err(MeteoError::BufferTooSmall {
            needed: text.len() + 1,
            capacity,
        });
    }

    let body = strip_terminator(text.as_bytes());
    let mut message = BytesMut::with_capacity(body.len());
    message.put_slice(body);

    Ok(message.freeze())
}

/// Decode a response from bytes
///
/// Only the status must be present. A missing kind decodes as the `0`
/// sentinel and a missing or garbled value as `0.0`. Codes outside the
/// known sets are passed through untouched.
pub fn decode_response(bytes: &[u8]) -> Result<WeatherResponse> {
    let mut cursor = strip_terminator(bytes);

    // Status: unsigned decimal
    cursor = skip_whitespace(cursor);
    let digits = cursor.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(MeteoError::Protocol(format!(
            "Response without status: {:?}",
            String::from_utf8_lossy(bytes)
        )));
    }
    let status = std::str::from_utf8(&cursor[..digits])
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| MeteoError::Protocol("Response status out of range".to_string()))?;
    cursor = &cursor[digits..];

    // Kind: the next non-space byte
    cursor = skip_whitespace(cursor);
    let (kind, rest) = match cursor.split_first() {
        Some((&kind, rest)) => (kind, rest),
        None => (WeatherResponse::NO_KIND, cursor),
    };
    cursor = rest;

    // Value: the next token
    cursor = skip_whitespace(cursor);
    let token_len = cursor
        .iter()
        .take_while(|b| !b.is_ascii_whitespace())
        .count();
    let value = std::str::from_utf8(&cursor[..token_len])
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(0.0);

    Ok(WeatherResponse {
        status,
        kind,
        value,
    })
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Bytes before the first terminator (all of them if there is none)
pub fn strip_terminator(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == TERMINATOR) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Read one message from a stream
///
/// Stops at the terminator, at EOF, or after `capacity - 1` bytes, whichever
/// comes first; anything past that limit is dropped. The returned bytes
/// exclude the terminator. Fails if the peer closes before sending anything.
pub fn read_frame<R: Read>(reader: &mut R, capacity: usize) -> Result<Bytes> {
    let limit = capacity.saturating_sub(1);
    let mut frame = BytesMut::zeroed(limit);
    let mut filled = 0;

    while filled < limit {
        let n = match reader.read(&mut frame[filled..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        let terminated = frame[filled..filled + n].contains(&TERMINATOR);
        filled += n;
        if terminated {
            break;
        }
    }

    if filled == 0 {
        return Err(MeteoError::Network(
            "Connection closed before any data was received".to_string(),
        ));
    }

    frame.truncate(filled);
    let len = strip_terminator(&frame).len();
    frame.truncate(len);

    Ok(frame.freeze())
}

/// Write one message to a stream, terminator included
pub fn write_frame<W: Write>(writer: &mut W, message: &[u8]) -> Result<()> {
    writer.write_all(message)?;
    writer.write_all(&[TERMINATOR])?;
    writer.flush()?;
    Ok(())
}
