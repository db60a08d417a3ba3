use crate::domain::Coordinates;
use rand::Rng;

/// Share of points drawn from the populated latitude band.
pub const POPULATED_ZONE_WEIGHT: f64 = 0.7;
pub const POPULATED_LATITUDES: (f64, f64) = (-60.0, 70.0);

/// A point biased towards the latitudes most people live at.
///
/// This is a coarse heuristic, not a population model.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Coordinates {
    let (min_latitude, max_latitude) = if rng.random_bool(POPULATED_ZONE_WEIGHT) {
        POPULATED_LATITUDES
    } else {
        (-90.0, 90.0)
    };
    let latitude = rng.random_range(min_latitude..=max_latitude);
    let longitude = rng.random_range(-180.0..=180.0);

    Coordinates::new(latitude, longitude).expect("Drawn coordinates are always within range")
}
