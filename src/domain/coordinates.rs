use thiserror::Error;

/// A latitude/longitude pair rounded to six decimal places (roughly 11 cm).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Error)]
pub enum CoordinatesError {
    #[error("Invalid latitude: {0}. Must be between -90 and 90")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}. Must be between -180 and 180")]
    InvalidLongitude(f64),
}

impl Coordinates {
    const DECIMAL_PLACES: i32 = 6;

    /// Build coordinates from raw degrees.
    ///
    /// Both values are rounded to six decimals before the range checks, so a
    /// value that rounds onto a pole or the antimeridian is still accepted.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        let latitude = Self::round(latitude);
        let longitude = Self::round(longitude);

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    fn round(value: f64) -> f64 {
        let factor = 10f64.powi(Self::DECIMAL_PLACES);
        (value * factor).round() / factor
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
