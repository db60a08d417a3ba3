use crate::domain::{Coordinates, HouseNumber};

/// One fictitious postal address, generated in full and never mutated.
///
/// Field names on the wire follow the public API (`name`, `surname`,
/// `house_no`, `state`, `country`), the Rust names say what they hold.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Address {
    #[serde(rename = "name")]
    pub given_name: &'static str,
    #[serde(rename = "surname")]
    pub family_name: &'static str,
    #[serde(rename = "house_no")]
    pub house_number: HouseNumber,
    pub street: String,
    pub city: String,
    #[serde(rename = "state")]
    pub state_or_province: String,
    #[serde(rename = "country")]
    pub country_name: &'static str,
    pub country_code: &'static str,
    pub postal_code: String,
    pub phone: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}
