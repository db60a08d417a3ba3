pub mod addresses;
mod countries;
mod health_check;
mod index;

pub use countries::list_countries;
pub use health_check::health_check;
pub use index::index;
