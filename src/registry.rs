//! City Registry
//!
//! The fixed set of cities the server reports weather for.

/// Cities known to the server, in canonical casing
pub const SUPPORTED_CITIES: [&str; 10] = [
    "Bari", "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze",
    "Venezia",
];

/// Read-only, case-insensitive city lookup
#[derive(Debug, Clone, Copy)]
pub struct CityRegistry {
    cities: &'static [&'static str],
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRegistry {
    /// Registry over [`SUPPORTED_CITIES`]
    pub fn new() -> Self {
        Self {
            cities: &SUPPORTED_CITIES,
        }
    }

    /// Whether `name` is a supported city
    ///
    /// ASCII case is ignored but the whole name must match: `"ROMA"` is
    /// supported, `"Rom"` and `"Romaa"` are not.
    pub fn is_supported(&self, name: &str) -> bool {
        self.cities.iter().any(|city| city.eq_ignore_ascii_case(name))
    }

    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
