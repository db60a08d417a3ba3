use crate::domain::Country;
use crate::generator::tokens::{DIGITS, pick_char};
use rand::Rng;

/// Fill every placeholder of a phone template with a random digit.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, template: &str) -> String {
    template
        .chars()
        .map(|c| {
            if c == Country::PHONE_DIGIT_PLACEHOLDER {
                pick_char(rng, DIGITS)
            } else {
                c
            }
        })
        .collect()
}
