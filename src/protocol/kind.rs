//! Weather kind definitions
//!
//! The single-character metric identifiers carried by requests and responses.

use std::fmt;
use std::ops::RangeInclusive;

/// Weather metric identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WeatherKind {
    Temperature = b't',
    Humidity = b'h',
    Wind = b'w',
    Pressure = b'p',
}

impl WeatherKind {
    /// All kinds, in protocol order
    pub const ALL: [WeatherKind; 4] = [
        WeatherKind::Temperature,
        WeatherKind::Humidity,
        WeatherKind::Wind,
        WeatherKind::Pressure,
    ];

    /// Look up a kind by its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b't' => Some(WeatherKind::Temperature),
            b'h' => Some(WeatherKind::Humidity),
            b'w' => Some(WeatherKind::Wind),
            b'p' => Some(WeatherKind::Pressure),
            _ => None,
        }
    }

    /// Wire byte for this kind
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Wire character for this kind
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    /// Closed interval generated values are drawn from
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            WeatherKind::Temperature => -10.0..=40.0,
            WeatherKind::Humidity => 20.0..=100.0,
            WeatherKind::Wind => 0.0..=100.0,
            WeatherKind::Pressure => 950.0..=1050.0,
        }
    }

    /// Label shown by the client
    pub fn label(self) -> &'static str {
        match self {
            WeatherKind::Temperature => "Temperatura",
            WeatherKind::Humidity => "Umidità",
            WeatherKind::Wind => "Vento",
            WeatherKind::Pressure => "Pressione",
        }
    }

    /// Unit suffix shown by the client
    pub fn unit(self) -> &'static str {
        match self {
            WeatherKind::Temperature => "°C",
            WeatherKind::Humidity => "%",
            WeatherKind::Wind => " km/h",
            WeatherKind::Pressure => " hPa",
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
