//! Response definitions
//!
//! Represents responses to clients.

use super::WeatherKind;

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    Success = 0,
    CityNotFound = 1,
    InvalidRequest = 2,
}

impl Status {
    /// Look up a status by its wire code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Status::Success),
            1 => Some(Status::CityNotFound),
            2 => Some(Status::InvalidRequest),
            _ => None,
        }
    }

    /// Wire code for this status
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// A response to send to client
///
/// Fields hold raw wire values so a decoded response can carry codes this
/// side does not recognize. Use [`WeatherResponse::status`] and
/// [`WeatherResponse::kind`] to interpret them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherResponse {
    /// Status code
    pub status: u32,

    /// Kind byte, `0` unless the status is Success
    pub kind: u8,

    /// Measurement, `0.0` unless the status is Success
    pub value: f32,
}

impl WeatherResponse {
    /// Kind byte carried by failure responses
    pub const NO_KIND: u8 = 0;

    /// Create a SUCCESS response
    pub fn success(kind: WeatherKind, value: f32) -> Self {
        Self {
            status: Status::Success.code(),
            kind: kind.as_byte(),
            value,
        }
    }

    /// Create a failure response with the fixed sentinels
    pub fn failure(status: Status) -> Self {
        Self {
            status: status.code(),
            kind: Self::NO_KIND,
            value: 0.0,
        }
    }

    /// Create a CITY_NOT_FOUND response
    pub fn city_not_found() -> Self {
        Self::failure(Status::CityNotFound)
    }

    /// Create an INVALID_REQUEST response
    pub fn invalid_request() -> Self {
        Self::failure(Status::InvalidRequest)
    }

    /// Interpret the status code, if known
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.status)
    }

    /// Interpret the kind byte, if known
    pub fn kind(&self) -> Option<WeatherKind> {
        WeatherKind::from_byte(self.kind)
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some(Status::Success)
    }
}
