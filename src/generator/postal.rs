//! Country specific postal codes, driven by the [`POSTAL_LAYOUTS`] table.

use crate::generator::tokens::{alphanumeric, digits, letters};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Digits(usize),
    Letters(usize),
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostalLayout {
    Fixed(&'static [Segment]),
    /// `primary` is used with probability `primary_weight`, `alternative` otherwise.
    Weighted {
        primary: &'static [Segment],
        alternative: &'static [Segment],
        primary_weight: f64,
    },
    /// Uppercase letters and digits of a random length within the bounds.
    Alphanumeric { min_length: usize, max_length: usize },
}

use Segment::{Digits, Letters, Literal};

const FIVE_DIGITS: &[Segment] = &[Digits(5)];
const ZIP_PLUS_FOUR: &[Segment] = &[Digits(5), Literal("-"), Digits(4)];
const THREE_DASH_FOUR: &[Segment] = &[Digits(3), Literal("-"), Digits(4)];
const FIVE_DASH_THREE: &[Segment] = &[Digits(5), Literal("-"), Digits(3)];
const SIX_DIGITS: &[Segment] = &[Digits(6)];
const FOUR_DIGITS: &[Segment] = &[Digits(4)];
const BRITISH: &[Segment] = &[Letters(2), Digits(2), Literal(" "), Digits(1), Letters(2)];

const NORTH_AMERICAN: PostalLayout = PostalLayout::Weighted {
    primary: FIVE_DIGITS,
    alternative: ZIP_PLUS_FOUR,
    primary_weight: 0.7,
};

/// Used for every country code missing from [`POSTAL_LAYOUTS`].
pub const FALLBACK_LAYOUT: PostalLayout = PostalLayout::Alphanumeric {
    min_length: 6,
    max_length: 8,
};

pub const POSTAL_LAYOUTS: &[(&str, PostalLayout)] = &[
    ("US", NORTH_AMERICAN),
    ("CA", NORTH_AMERICAN),
    ("GB", PostalLayout::Fixed(BRITISH)),
    ("AU", PostalLayout::Fixed(FIVE_DIGITS)),
    ("DE", PostalLayout::Fixed(FIVE_DIGITS)),
    ("FR", PostalLayout::Fixed(FIVE_DIGITS)),
    ("ES", PostalLayout::Fixed(FIVE_DIGITS)),
    ("IT", PostalLayout::Fixed(FIVE_DIGITS)),
    ("NL", PostalLayout::Fixed(FIVE_DIGITS)),
    ("SE", PostalLayout::Fixed(FIVE_DIGITS)),
    ("NO", PostalLayout::Fixed(FIVE_DIGITS)),
    ("JP", PostalLayout::Fixed(THREE_DASH_FOUR)),
    ("KR", PostalLayout::Fixed(THREE_DASH_FOUR)),
    ("BR", PostalLayout::Fixed(FIVE_DASH_THREE)),
    ("IN", PostalLayout::Fixed(SIX_DIGITS)),
    ("CN", PostalLayout::Fixed(SIX_DIGITS)),
    ("MX", PostalLayout::Fixed(FIVE_DIGITS)),
    ("RU", PostalLayout::Fixed(SIX_DIGITS)),
    ("ZA", PostalLayout::Fixed(FOUR_DIGITS)),
    ("AR", PostalLayout::Fixed(FOUR_DIGITS)),
    ("TR", PostalLayout::Fixed(FIVE_DIGITS)),
];

pub fn layout_for(country_code: &str) -> &'static PostalLayout {
    POSTAL_LAYOUTS
        .iter()
        .find(|(code, _)| *code == country_code)
        .map(|(_, layout)| layout)
        .unwrap_or(&FALLBACK_LAYOUT)
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, country_code: &str) -> String {
    match *layout_for(country_code) {
        PostalLayout::Fixed(segments) => render(rng, segments),
        PostalLayout::Weighted {
            primary,
            alternative,
            primary_weight,
        } => {
            if rng.random_bool(primary_weight) {
                render(rng, primary)
            } else {
                render(rng, alternative)
            }
        }
        PostalLayout::Alphanumeric {
            min_length,
            max_length,
        } => {
            let length = rng.random_range(min_length..=max_length);
            alphanumeric(rng, length)
        }
    }
}

fn render<R: Rng + ?Sized>(rng: &mut R, segments: &[Segment]) -> String {
    let mut code = String::new();
    for segment in segments {
        match *segment {
            Digits(n) => code.push_str(&digits(rng, n)),
            Letters(n) => code.push_str(&letters(rng, n)),
            Literal(text) => code.push_str(text),
        }
    }
    code
}
