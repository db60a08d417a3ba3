use regex::Regex;
use thiserror::Error;

/// Static description of a supported country, as written in the reference tables.
#[derive(Debug, Clone, Copy)]
pub struct CountryRow {
    pub display_name: &'static str,
    pub iso_code: &'static str,
    /// `#` marks a digit slot, every other character is copied verbatim.
    pub phone_template: &'static str,
    pub phone_pattern: &'static str,
}

#[derive(Debug, Clone)]
pub struct Country {
    display_name: &'static str,
    iso_code: &'static str,
    phone_template: &'static str,
    phone_pattern: Regex,
}

#[derive(Debug, Error)]
pub enum CountryError {
    #[error("Country name cannot be empty.")]
    EmptyName,

    #[error("Invalid country code '{0}'. Expected two uppercase ASCII letters.")]
    InvalidCode(String),

    #[error("Phone template for {0} has no digit placeholder.")]
    TemplateWithoutDigits(String),

    #[error("Phone pattern for {code} does not compile")]
    InvalidPattern {
        code: String,
        #[source]
        source: regex::Error,
    },
}

impl Country {
    pub const PHONE_DIGIT_PLACEHOLDER: char = '#';

    /// Validate a reference row and compile its phone pattern.
    ///
    /// The pattern is anchored on both ends, a phone number must match it whole.
    pub fn parse(row: CountryRow) -> Result<Self, CountryError> {
        if row.display_name.trim().is_empty() {
            return Err(CountryError::EmptyName);
        }

        let is_valid_code =
            row.iso_code.len() == 2 && row.iso_code.chars().all(|c| c.is_ascii_uppercase());
        if !is_valid_code {
            return Err(CountryError::InvalidCode(row.iso_code.to_string()));
        }

        if !row.phone_template.contains(Self::PHONE_DIGIT_PLACEHOLDER) {
            return Err(CountryError::TemplateWithoutDigits(
                row.iso_code.to_string(),
            ));
        }

        let phone_pattern = Regex::new(&format!("^(?:{})$", row.phone_pattern)).map_err(
            |source| CountryError::InvalidPattern {
                code: row.iso_code.to_string(),
                source,
            },
        )?;

        Ok(Self {
            display_name: row.display_name,
            iso_code: row.iso_code,
            phone_template: row.phone_template,
            phone_pattern,
        })
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn iso_code(&self) -> &'static str {
        self.iso_code
    }

    pub fn phone_template(&self) -> &'static str {
        self.phone_template
    }

    pub fn is_valid_phone(&self, phone: &str) -> bool {
        self.phone_pattern.is_match(phone)
    }

    pub fn summary(&self) -> CountrySummary {
        CountrySummary {
            name: self.display_name,
            code: self.iso_code,
        }
    }
}

/// Public projection of a country, as listed by `/countries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CountrySummary {
    pub name: &'static str,
    pub code: &'static str,
}
