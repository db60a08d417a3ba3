use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseNumber(u16);

#[derive(Debug, Error)]
pub enum HouseNumberError {
    #[error("House number must be between {min} and {max}, got {actual}.")]
    OutOfRange { min: u16, max: u16, actual: u32 },
}

impl HouseNumber {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 9999;

    pub fn parse(value: u32) -> Result<Self, HouseNumberError> {
        match u16::try_from(value) {
            Ok(number) if (Self::MIN..=Self::MAX).contains(&number) => Ok(Self(number)),
            _ => Err(HouseNumberError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            }),
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Display for HouseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl serde::Serialize for HouseNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}
