mod addresses;
mod countries;
mod health_check;
mod helpers;
mod index;
