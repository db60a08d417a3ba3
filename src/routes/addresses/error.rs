use crate::errors::error_chain_fmt;
use actix_web::{ResponseError, http::StatusCode};
use std::fmt::Formatter;

#[derive(thiserror::Error)]
pub enum AddressesError {
    #[error("{0}")]
    ValidationError(String),
}
impl ResponseError for AddressesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}
impl std::fmt::Debug for AddressesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
