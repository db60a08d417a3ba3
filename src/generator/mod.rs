//! Procedural generation of fictitious addresses.
//!
//! Everything below takes the random number generator as an argument; there
//! is no global RNG. Reference tables are read-only once loaded, so an
//! [`AddressGenerator`] can be shared across threads freely.

pub mod city;
pub mod coordinates;
pub mod phone;
pub mod postal;
mod randomness;
mod reference;
pub mod region;
pub mod tables;
pub mod tokens;

pub use randomness::RandomnessSource;
pub use reference::{ReferenceData, ReferenceDataError, ReferenceTables};

use crate::domain::{Address, BatchSize, CountrySummary, HouseNumber};
use rand::Rng;
use tokens::pick;

#[derive(Debug)]
pub struct AddressGenerator {
    reference: ReferenceData,
}

impl AddressGenerator {
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Compose one complete address for a uniformly chosen country.
    pub fn generate_address<R: Rng + ?Sized>(&self, rng: &mut R) -> Address {
        let countries = self.reference.countries();
        let country = &countries[rng.random_range(0..countries.len())];
        let code = country.iso_code();

        let given_name = pick(rng, self.reference.given_names);
        let family_name = pick(rng, self.reference.family_names);
        let house_number = HouseNumber::parse(rng.random_range(
            u32::from(HouseNumber::MIN)..=u32::from(HouseNumber::MAX),
        ))
        .expect("Drawn house numbers are always within range");
        let street = format!(
            "{} {}",
            pick(rng, self.reference.street_prefixes),
            pick(rng, self.reference.street_suffixes)
        );

        let city = city::build(rng, self.reference.locale_style(code));
        let state_or_province = region::select(rng, self.reference.regions_of(code));
        let postal_code = postal::generate(rng, code);
        let phone = phone::generate(rng, country.phone_template());
        let coordinates = coordinates::generate(rng);

        Address {
            given_name,
            family_name,
            house_number,
            street,
            city,
            state_or_province,
            country_name: country.display_name(),
            country_code: code,
            postal_code,
            phone,
            coordinates,
        }
    }

    /// `size` independent addresses, in generation order.
    pub fn generate_batch<R: Rng + ?Sized>(&self, rng: &mut R, size: BatchSize) -> Vec<Address> {
        (0..size.get()).map(|_| self.generate_address(rng)).collect()
    }

    pub fn list_countries(&self) -> Vec<CountrySummary> {
        self.reference.country_summaries()
    }
}
