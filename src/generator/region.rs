use crate::generator::tokens::{pick, pseudo_name};
use rand::Rng;

const INVENTED_REGION_LENGTH: (usize, usize) = (6, 15);

/// Pick a known state or province, or invent one when the country has no list.
pub fn select<R: Rng + ?Sized>(rng: &mut R, known: Option<&[&str]>) -> String {
    match known {
        Some(known) => pick(rng, known).to_string(),
        None => pseudo_name(rng, INVENTED_REGION_LENGTH.0, INVENTED_REGION_LENGTH.1),
    }
}
