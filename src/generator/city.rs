//! City names styled after the naming conventions of a locale group.
//!
//! Each [`LocaleStyle`] lists the country codes it covers, its vocabulary and
//! the [`CityRule`] that assembles a name. Lookups scan the style table in
//! order and the first group listing a code wins, so Switzerland (listed as
//! both Germanic and Francophone) gets Germanic names.

use crate::generator::tokens::{CONSONANTS, VOWELS, capitalize, pick, pick_char, pseudo_name};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CityRule {
    /// Two sequential coin flips: `prefix + root` with `prefix_root`, otherwise
    /// `root + suffix` with `root_suffix`, otherwise a pseudo-name.
    Waterfall { prefix_root: f64, root_suffix: f64 },
    /// `prefix + suffix`.
    Compound,
    /// Even odds of `prefix + joiner + pseudo-name` or `pseudo-name + suffix`.
    Affixed { joiner: &'static str },
    /// Consonant-vowel syllables.
    Syllables { min: usize, max: usize },
    PseudoName,
}

#[derive(Debug, Clone, Copy)]
pub struct LocaleStyle {
    pub name: &'static str,
    pub codes: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub roots: &'static [&'static str],
    pub rule: CityRule,
}

const PSEUDO_NAME_LENGTH: (usize, usize) = (5, 10);
const JOINED_NAME_LENGTH: (usize, usize) = (3, 6);
const SUFFIXED_NAME_LENGTH: (usize, usize) = (4, 8);

pub const DEFAULT_STYLE: LocaleStyle = LocaleStyle {
    name: "default",
    codes: &[],
    prefixes: &[],
    suffixes: &[],
    roots: &[],
    rule: CityRule::PseudoName,
};

pub const LOCALE_STYLES: &[LocaleStyle] = &[
    LocaleStyle {
        name: "anglophone",
        codes: &["US", "CA", "GB", "AU"],
        prefixes: &["New", "North", "South", "East", "West", "Lake", "Port", "Fort", "Mount"],
        suffixes: &[
            "ville", "town", "burg", "field", "wood", "haven", "shore", "view", "dale", "brook",
        ],
        roots: &[
            "York", "London", "Oxford", "Cambridge", "Spring", "River", "Hill", "Forest", "Rock",
            "Green",
        ],
        rule: CityRule::Waterfall {
            prefix_root: 0.4,
            root_suffix: 0.7,
        },
    },
    LocaleStyle {
        name: "germanic",
        codes: &["DE", "AT", "CH"],
        prefixes: &[
            "Bad", "Berg", "Burg", "Frank", "Hamb", "Heidel", "Mun", "Stutt", "Wolfs",
        ],
        suffixes: &[
            "burg", "dorf", "feld", "hausen", "heim", "stadt", "berg", "bach", "see",
        ],
        roots: &[],
        rule: CityRule::Compound,
    },
    LocaleStyle {
        name: "francophone",
        codes: &["FR", "BE", "CH"],
        prefixes: &[
            "Saint", "Mont", "Val", "Bois", "Château", "Ville", "Font", "Beau", "Grand",
        ],
        suffixes: &["ville", "court", "fort", "bourg", "neur", "lieu", "mont", "mar", "cy"],
        roots: &[],
        rule: CityRule::Affixed { joiner: "-" },
    },
    LocaleStyle {
        name: "hispanic",
        codes: &["ES", "MX", "AR"],
        prefixes: &[
            "San", "Santa", "Los", "Las", "El", "La", "Villa", "Puerto", "Ciudad",
        ],
        suffixes: &["a", "o", "ia", "io", "ales", "anos", "illa", "illo"],
        roots: &[],
        rule: CityRule::Affixed { joiner: " " },
    },
    LocaleStyle {
        name: "italic",
        codes: &["IT"],
        prefixes: &["San", "Santa", "Monte", "Castel", "Villa", "Porto", "Citta"],
        suffixes: &["a", "o", "ia", "io", "ano", "ina", "etta", "ello"],
        roots: &[],
        rule: CityRule::Affixed { joiner: " " },
    },
    LocaleStyle {
        name: "east-asian",
        codes: &["JP", "KR", "CN"],
        prefixes: &[],
        suffixes: &[],
        roots: &[],
        rule: CityRule::Syllables { min: 2, max: 3 },
    },
];

impl LocaleStyle {
    /// Name of the first vocabulary pool the rule draws from that is empty.
    pub fn missing_vocabulary(&self) -> Option<&'static str> {
        let (needs_prefixes, needs_suffixes, needs_roots) = match self.rule {
            CityRule::Waterfall { .. } => (true, true, true),
            CityRule::Compound | CityRule::Affixed { .. } => (true, true, false),
            CityRule::Syllables { .. } | CityRule::PseudoName => (false, false, false),
        };

        if needs_prefixes && self.prefixes.is_empty() {
            Some("prefixes")
        } else if needs_suffixes && self.suffixes.is_empty() {
            Some("suffixes")
        } else if needs_roots && self.roots.is_empty() {
            Some("roots")
        } else {
            None
        }
    }
}

/// First style in `styles` covering `country_code`, or [`DEFAULT_STYLE`].
pub fn style_in<'a>(styles: &'a [LocaleStyle], country_code: &str) -> &'a LocaleStyle {
    styles
        .iter()
        .find(|style| style.codes.contains(&country_code))
        .unwrap_or(&DEFAULT_STYLE)
}

pub fn build<R: Rng + ?Sized>(rng: &mut R, style: &LocaleStyle) -> String {
    match style.rule {
        CityRule::Waterfall {
            prefix_root,
            root_suffix,
        } => {
            if rng.random_bool(prefix_root) {
                format!("{}{}", pick(rng, style.prefixes), pick(rng, style.roots))
            } else if rng.random_bool(root_suffix) {
                format!("{}{}", pick(rng, style.roots), pick(rng, style.suffixes))
            } else {
                pseudo_name(rng, PSEUDO_NAME_LENGTH.0, PSEUDO_NAME_LENGTH.1)
            }
        }
        CityRule::Compound => {
            format!("{}{}", pick(rng, style.prefixes), pick(rng, style.suffixes))
        }
        CityRule::Affixed { joiner } => {
            if rng.random_bool(0.5) {
                let prefix = pick(rng, style.prefixes);
                let name = pseudo_name(rng, JOINED_NAME_LENGTH.0, JOINED_NAME_LENGTH.1);
                format!("{prefix}{joiner}{name}")
            } else {
                let name = pseudo_name(rng, SUFFIXED_NAME_LENGTH.0, SUFFIXED_NAME_LENGTH.1);
                format!("{name}{}", pick(rng, style.suffixes))
            }
        }
        CityRule::Syllables { min, max } => {
            let count = rng.random_range(min..=max);
            let mut name = String::with_capacity(count * 2);
            for _ in 0..count {
                name.push(pick_char(rng, CONSONANTS));
                name.push(pick_char(rng, VOWELS));
            }
            capitalize(&name)
        }
        CityRule::PseudoName => pseudo_name(rng, PSEUDO_NAME_LENGTH.0, PSEUDO_NAME_LENGTH.1),
    }
}
