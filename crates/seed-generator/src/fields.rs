//! Scalar random values and catalog sampling.

use crate::catalog::{FIRST_NAMES, LAST_NAMES, STREET_NAMES, STREET_SUFFIXES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of digits after the `+7` country code.
const PHONE_DIGITS: usize = 10;

/// Source of randomized field values.
///
/// Every value a schema variant emits is drawn from here, so seeding this
/// struct makes a whole run reproducible.
pub struct RandomFields {
    rng: StdRng,
}

impl RandomFields {
    /// Create a field library seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a field library with a fixed seed (same seed = same values).
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }

    /// Random integer in `[0, bound)`.
    ///
    /// Panics if `bound` is zero.
    pub fn random_int(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }

    /// Uniformly pick one element of a non-empty set.
    ///
    /// Panics if `set` is empty; every catalog in this crate is static and
    /// non-empty.
    pub fn random_choice<'a, T>(&mut self, set: &'a [T]) -> &'a T {
        &set[self.rng.random_range(0..set.len())]
    }

    /// Uniformly pick an index into a collection of `len` elements.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn synthetic_first_name(&mut self) -> String {
        self.random_choice(FIRST_NAMES).to_string()
    }

    pub fn synthetic_last_name(&mut self) -> String {
        self.random_choice(LAST_NAMES).to_string()
    }

    /// Full name, "First Last".
    pub fn synthetic_name(&mut self) -> String {
        let first = self.synthetic_first_name();
        let last = self.synthetic_last_name();
        format!("{first} {last}")
    }

    /// Russian mobile-style number: `+7` followed by exactly ten digits.
    pub fn synthetic_phone(&mut self) -> String {
        format!("+7{}", self.random_digits(PHONE_DIGITS))
    }

    /// Street name with a type suffix, e.g. "Tverskaya ulitsa".
    pub fn synthetic_street_address(&mut self) -> String {
        let name = self.random_choice(STREET_NAMES);
        let suffix = self.random_choice(STREET_SUFFIXES);
        format!("{name} {suffix}")
    }

    /// House number between 1 and 999.
    pub fn synthetic_building_number(&mut self) -> String {
        self.rng.random_range(1..1000u32).to_string()
    }

    /// Generate a random number with exactly N digits.
    fn random_digits(&mut self, digits: usize) -> String {
        if digits == 0 {
            return String::new();
        }

        let mut result = String::with_capacity(digits);

        // No leading zero
        result.push(char::from(b'0' + self.rng.random_range(1..10u8)));
        for _ in 1..digits {
            result.push(char::from(b'0' + self.rng.random_range(0..10u8)));
        }

        result
    }
}
