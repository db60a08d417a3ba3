mod error;
mod get;

pub use error::AddressesError;
pub use get::{BatchQuery, get_many, get_one};
