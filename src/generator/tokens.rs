//! Atomic random tokens every field generator is built from.

use rand::Rng;

pub const VOWELS: &[u8] = b"aeiou";
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const UPPERCASE_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const UPPERCASE_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uniformly choose one entry of a pool.
///
/// Panics on an empty pool. Reference data is validated at startup so this
/// never happens while serving.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Uniformly choose one ASCII character of an alphabet.
pub fn pick_char<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    char::from(alphabet[rng.random_range(0..alphabet.len())])
}

fn draw<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length).map(|_| pick_char(rng, alphabet)).collect()
}

pub fn digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    draw(rng, DIGITS, length)
}

/// Uppercase ASCII letters.
pub fn letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    draw(rng, UPPERCASE_LETTERS, length)
}

pub fn alphanumeric<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    draw(rng, UPPERCASE_ALPHANUMERIC, length)
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A pronounceable made-up word of `min_length..=max_length` characters.
///
/// Vowels and consonants alternate; whether the word opens with a vowel is a
/// coin flip. The result is capitalized.
///
/// # Panics
///
/// When `min_length` is zero or greater than `max_length`.
pub fn pseudo_name<R: Rng + ?Sized>(rng: &mut R, min_length: usize, max_length: usize) -> String {
    assert!(
        min_length >= 1 && min_length <= max_length,
        "invalid pseudo-name length range {min_length}..={max_length}"
    );

    let length = rng.random_range(min_length..=max_length);
    let starts_with_vowel = rng.random_bool(0.5);

    let name: String = (0..length)
        .map(|position| {
            let is_vowel_slot = (position % 2 == 0) == starts_with_vowel;
            if is_vowel_slot {
                pick_char(rng, VOWELS)
            } else {
                pick_char(rng, CONSONANTS)
            }
        })
        .collect();

    capitalize(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn is_vowel(c: char) -> bool {
        VOWELS.contains(&(c.to_ascii_lowercase() as u8))
    }

    #[test]
    fn fixed_length_pseudo_name_is_capitalized_and_alternating() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let name = pseudo_name(&mut rng, 5, 5);
            let chars: Vec<char> = name.chars().collect();

            assert_eq!(chars.len(), 5);
            assert!(chars[0].is_ascii_uppercase(), "{name}");
            assert!(chars[1..].iter().all(|c| c.is_ascii_lowercase()), "{name}");
            for pair in chars.windows(2) {
                assert_ne!(is_vowel(pair[0]), is_vowel(pair[1]), "{name}");
            }
        }
    }

    #[test]
    fn pseudo_name_length_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let length = pseudo_name(&mut rng, 6, 15).chars().count();
            assert!((6..=15).contains(&length));
        }
    }

    #[test]
    fn pseudo_name_opens_with_both_vowels_and_consonants() {
        let mut rng = StdRng::seed_from_u64(3);
        let openings: Vec<bool> = (0..200)
            .map(|_| is_vowel(pseudo_name(&mut rng, 4, 4).chars().next().unwrap()))
            .collect();

        assert!(openings.iter().any(|v| *v));
        assert!(openings.iter().any(|v| !*v));
    }

    #[test]
    #[should_panic]
    fn empty_length_range_is_a_precondition_violation() {
        let mut rng = StdRng::seed_from_u64(0);
        pseudo_name(&mut rng, 6, 5);
    }

    #[test]
    #[should_panic]
    fn zero_min_length_is_a_precondition_violation() {
        let mut rng = StdRng::seed_from_u64(0);
        pseudo_name(&mut rng, 0, 5);
    }

    #[test]
    fn digit_and_letter_strings_have_requested_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(5);

        let d = digits(&mut rng, 9);
        assert_eq!(d.len(), 9);
        assert!(d.chars().all(|c| c.is_ascii_digit()));

        let l = letters(&mut rng, 4);
        assert_eq!(l.len(), 4);
        assert!(l.chars().all(|c| c.is_ascii_uppercase()));

        let a = alphanumeric(&mut rng, 32);
        assert!(
            a.chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn capitalize_handles_empty_and_mixed_case() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("tOKYO"), "Tokyo");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn pick_returns_a_member_of_the_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = ["Oak", "Elm", "Pine"];
        for _ in 0..50 {
            assert!(pool.contains(&pick(&mut rng, &pool)));
        }
    }
}
