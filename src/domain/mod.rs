mod address;
mod batch_size;
mod coordinates;
mod country;
mod house_number;

pub use address::Address;
pub use batch_size::{BatchSize, BatchSizeError};
pub use coordinates::{Coordinates, CoordinatesError};
pub use country::{Country, CountryError, CountryRow, CountrySummary};
pub use house_number::{HouseNumber, HouseNumberError};
