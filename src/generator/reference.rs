use crate::domain::{Country, CountryError, CountryRow, CountrySummary};
use crate::errors::error_chain_fmt;
use crate::generator::{city, phone, tables};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Raw, unchecked pools. [`ReferenceTables::BUILTIN`] is what the service ships with.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
    pub street_prefixes: &'static [&'static str],
    pub street_suffixes: &'static [&'static str],
    pub countries: &'static [CountryRow],
    pub regions: &'static [(&'static str, &'static [&'static str])],
    pub locale_styles: &'static [city::LocaleStyle],
}

impl ReferenceTables {
    pub const BUILTIN: Self = Self {
        given_names: tables::GIVEN_NAMES,
        family_names: tables::FAMILY_NAMES,
        street_prefixes: tables::STREET_PREFIXES,
        street_suffixes: tables::STREET_SUFFIXES,
        countries: tables::COUNTRIES,
        regions: tables::REGIONS,
        locale_styles: city::LOCALE_STYLES,
    };
}

/// Checked reference data, built once at startup and only read afterwards.
#[derive(Debug)]
pub struct ReferenceData {
    pub(crate) given_names: &'static [&'static str],
    pub(crate) family_names: &'static [&'static str],
    pub(crate) street_prefixes: &'static [&'static str],
    pub(crate) street_suffixes: &'static [&'static str],
    pub(crate) countries: Vec<Country>,
    pub(crate) regions: HashMap<&'static str, &'static [&'static str]>,
    pub(crate) locale_styles: &'static [city::LocaleStyle],
}

#[derive(thiserror::Error)]
pub enum ReferenceDataError {
    #[error("The {0} pool is empty.")]
    EmptyPool(&'static str),
    #[error("Invalid country entry")]
    InvalidCountry(#[from] CountryError),
    #[error("Country code {0} is listed more than once.")]
    DuplicateCountry(&'static str),
    #[error("Region list for {0} is empty.")]
    EmptyRegionList(&'static str),
    #[error("Locale style '{style}' has no {pool} to draw from.")]
    MissingVocabulary {
        style: &'static str,
        pool: &'static str,
    },
    #[error("Sample phone '{phone}' for {code} does not match its validation pattern.")]
    PhoneTemplateMismatch { code: &'static str, phone: String },
}
impl std::fmt::Debug for ReferenceDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ReferenceData {
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::load(ReferenceTables::BUILTIN)
    }

    /// Check every table and compile the country phone patterns.
    ///
    /// A broken table is a programming error: callers are expected to abort
    /// startup on `Err` rather than serve with partial data.
    #[tracing::instrument(name = "Loading reference data", skip(tables))]
    pub fn load(tables: ReferenceTables) -> Result<Self, ReferenceDataError> {
        let pools = [
            ("given name", tables.given_names),
            ("family name", tables.family_names),
            ("street prefix", tables.street_prefixes),
            ("street suffix", tables.street_suffixes),
        ];
        for (pool, entries) in pools {
            if entries.is_empty() {
                return Err(ReferenceDataError::EmptyPool(pool));
            }
        }

        if tables.countries.is_empty() {
            return Err(ReferenceDataError::EmptyPool("country"));
        }

        // Fixed seed: the sample only checks the template's shape
        let mut rng = StdRng::seed_from_u64(0);
        let mut countries: Vec<Country> = Vec::with_capacity(tables.countries.len());
        for row in tables.countries {
            let country = Country::parse(*row)?;
            if countries.iter().any(|c| c.iso_code() == country.iso_code()) {
                return Err(ReferenceDataError::DuplicateCountry(country.iso_code()));
            }

            let sample = phone::generate(&mut rng, country.phone_template());
            if !country.is_valid_phone(&sample) {
                return Err(ReferenceDataError::PhoneTemplateMismatch {
                    code: country.iso_code(),
                    phone: sample,
                });
            }

            countries.push(country);
        }

        let mut regions = HashMap::with_capacity(tables.regions.len());
        for (code, names) in tables.regions {
            if names.is_empty() {
                return Err(ReferenceDataError::EmptyRegionList(*code));
            }
            regions.insert(*code, *names);
        }

        for style in tables.locale_styles {
            if let Some(pool) = style.missing_vocabulary() {
                return Err(ReferenceDataError::MissingVocabulary {
                    style: style.name,
                    pool,
                });
            }
        }

        tracing::info!(
            countries = countries.len(),
            region_lists = regions.len(),
            "Reference data loaded"
        );

        Ok(Self {
            given_names: tables.given_names,
            family_names: tables.family_names,
            street_prefixes: tables.street_prefixes,
            street_suffixes: tables.street_suffixes,
            countries,
            regions,
            locale_styles: tables.locale_styles,
        })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_summaries(&self) -> Vec<CountrySummary> {
        self.countries.iter().map(Country::summary).collect()
    }

    pub fn regions_of(&self, country_code: &str) -> Option<&'static [&'static str]> {
        self.regions.get(country_code).copied()
    }

    pub fn locale_style(&self, country_code: &str) -> &city::LocaleStyle {
        city::style_in(self.locale_styles, country_code)
    }
}
