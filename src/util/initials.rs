use std::collections::HashSet;

use rand::Rng;

/// Number of random two-letter probes attempted after the name-derived
/// candidates are exhausted.
const RANDOM_PROBE_LIMIT: usize = 100;

/// Generates unique two-letter operating initials for a controller.
///
/// Candidates are tried in three tiers:
/// 1. First letter of the first name + first letter of the last name.
/// 2. First letter of the first name + each remaining letter of the last name.
/// 3. `RANDOM_PROBE_LIMIT` random letter pairs drawn from the supplied RNG.
///
/// The first candidate not in `used` wins. Returns `None` once every tier is
/// exhausted; the function never loops indefinitely and never touches global
/// RNG state.
///
/// # Arguments
/// - `rng` - Random source for the probe tier; tests pass a seeded `StdRng`
/// - `first_name` - Controller's given name
/// - `last_name` - Controller's family name
/// - `used` - Initials already assigned within the facility
///
/// # Returns
/// - `Some(String)` - Two uppercase letters not present in `used`
/// - `None` - All candidates taken within the probe limit
pub fn generate_operating_initials<R: Rng>(
    rng: &mut R,
    first_name: &str,
    last_name: &str,
    used: &HashSet<String>,
) -> Option<String> {
    let first_letters = letters(first_name);
    let last_letters = letters(last_name);

    if let (Some(&f), Some(&l)) = (first_letters.first(), last_letters.first()) {
        let candidate = pair(f, l);
        if !used.contains(&candidate) {
            return Some(candidate);
        }
    }

    if let Some(&f) = first_letters.first() {
        for &l in last_letters.iter().skip(1) {
            let candidate = pair(f, l);
            if !used.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    for _ in 0..RANDOM_PROBE_LIMIT {
        let a = random_letter(rng);
        let b = random_letter(rng);
        let candidate = pair(a, b);
        if !used.contains(&candidate) {
            return Some(candidate);
        }
    }

    None
}

/// Uppercase ASCII letters of a name, in order; everything else is dropped.
fn letters(name: &str) -> Vec<char> {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn pair(a: char, b: char) -> String {
    format!("{}{}", a, b)
}

fn random_letter<R: Rng>(rng: &mut R) -> char {
    (b'A' + rng.random_range(0..26u8)) as char
}
