//! Weather Value Generator
//!
//! Draws a uniformly distributed value for each requested metric.
//!
//! ## Ranges (closed intervals)
//! - temperature: -10.0 ..= 40.0 °C
//! - humidity:     20.0 ..= 100.0 %
//! - wind:          0.0 ..= 100.0 km/h
//! - pressure:    950.0 ..= 1050.0 hPa

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::protocol::WeatherKind;

/// Pseudo-random source for weather values
#[derive(Debug, Clone)]
pub struct WeatherGenerator {
    rng: StdRng,
}

impl Default for WeatherGenerator {
    fn default() -> Self {
        Self::from_time()
    }
}

impl WeatherGenerator {
    /// Generator seeded from the current time
    pub fn from_time() -> Self {
        Self::with_seed(time_seed())
    }

    /// Generator with a fixed seed (reproducible draws)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reseed from the current time
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(time_seed());
    }

    /// Draw a value for `kind` from its closed interval
    pub fn generate(&mut self, kind: WeatherKind) -> f32 {
        self.rng.gen_range(kind.range())
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
