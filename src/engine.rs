//! Engine Module
//!
//! Turns a raw request into a response.
//!
//! ## Responsibilities
//! - Decode and validate incoming requests
//! - Check the city against the registry
//! - Draw a weather value for valid requests
//!
//! ## Validation Order
//! First failing check wins:
//! 1. Empty or shorter than 3 bytes → INVALID_REQUEST
//! 2. Unknown kind byte             → INVALID_REQUEST
//! 3. No city after the spaces      → INVALID_REQUEST
//! 4. City not in the registry      → CITY_NOT_FOUND
//! 5. Otherwise                     → SUCCESS with a generated value

use parking_lot::Mutex;

use crate::generator::WeatherGenerator;
use crate::protocol::{decode_request, Status, WeatherRequest, WeatherResponse};
use crate::registry::CityRegistry;

/// The request handling engine
///
/// Holds the one generator of the process. The server drives it from a
/// single thread, so the mutex is never contended.
pub struct Engine {
    /// Known cities
    registry: CityRegistry,

    /// Random source, seeded once at construction
    generator: Mutex<WeatherGenerator>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in registry with a time-seeded generator
    pub fn new() -> Self {
        Self::with_generator(CityRegistry::new(), WeatherGenerator::from_time())
    }

    /// Engine with an explicit registry and generator
    pub fn with_generator(registry: CityRegistry, generator: WeatherGenerator) -> Self {
        Self {
            registry,
            generator: Mutex::new(generator),
        }
    }

    /// Validate a raw request
    ///
    /// Returns the decoded request, or the failure status to report.
    pub fn validate(&self, raw: &[u8]) -> Result<WeatherRequest, Status> {
        let request = decode_request(raw).map_err(|e| {
            tracing::debug!("Rejected request: {}", e);
            e.status()
        })?;

        if !self.registry.is_supported(&request.city) {
            tracing::debug!("City not available: {}", request.city);
            return Err(Status::CityNotFound);
        }

        Ok(request)
    }

    /// Handle a raw request and build the response to send
    pub fn execute(&self, raw: &[u8]) -> WeatherResponse {
        match self.validate(raw) {
            Ok(request) => {
                let value = self.generator.lock().generate(request.kind);
                WeatherResponse::success(request.kind, value)
            }
            Err(status) => WeatherResponse::failure(status),
        }
    }
}
