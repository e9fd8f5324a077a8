//! Request definitions
//!
//! Represents requests from clients.

use super::WeatherKind;

/// A validated request, as the server sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// Requested metric
    pub kind: WeatherKind,

    /// City name exactly as submitted (case preserved, at most 63 bytes)
    pub city: String,
}

/// A structurally decoded request whose kind byte was not checked
///
/// The client builds this from its own request string only to echo the
/// city name back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    /// First byte of the request, unchecked
    pub kind: u8,

    /// City name exactly as submitted (case preserved, at most 63 bytes)
    pub city: String,
}

impl RawRequest {
    /// Interpret the kind byte, if it is a known metric
    pub fn kind(&self) -> Option<WeatherKind> {
        WeatherKind::from_byte(self.kind)
    }
}
