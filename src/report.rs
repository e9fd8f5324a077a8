//! Client-side rendering of responses.

use std::fmt;
use std::net::IpAddr;

use crate::protocol::{Status, WeatherResponse};

pub const CITY_NOT_AVAILABLE: &str = "Città non disponibile";
pub const INVALID_REQUEST: &str = "Richiesta non valida";
pub const UNRECOGNIZED_RESPONSE: &str = "Risposta non riconosciuta";

/// What the client prints for a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A weather reading, printed to stdout
    Weather(String),

    /// A failure: `prefix` goes to stdout, `reason` to stderr
    Failure {
        prefix: String,
        reason: &'static str,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Weather(line) => write!(f, "{}", line),
            Report::Failure { prefix, reason } => write!(f, "{}{}", prefix, reason),
        }
    }
}

/// Render `response` for the city the user asked about
///
/// Unknown status codes and a success without a known kind are reported as
/// unrecognized instead of being trusted.
pub fn render(response: &WeatherResponse, city: &str, server_ip: IpAddr) -> Report {
    let prefix = format!("Ricevuto risultato dal server ip {}. ", server_ip);

    let reason = match (response.status(), response.kind()) {
        (Some(Status::Success), Some(kind)) => {
            return Report::Weather(format!(
                "{}{}: {} = {:.1}{}",
                prefix,
                city,
                kind.label(),
                response.value,
                kind.unit()
            ));
        }
        (Some(Status::CityNotFound), _) => CITY_NOT_AVAILABLE,
        (Some(Status::InvalidRequest), _) => INVALID_REQUEST,
        _ => UNRECOGNIZED_RESPONSE,
    };

    Report::Failure { prefix, reason }
}
