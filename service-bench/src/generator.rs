//! Random service records.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::service::{Service, ShortStr, MAX_FIELD_LEN, MAX_STRING_LENGTH};

/// First and one-past-last code point of generated field characters.
const CHAR_RANGE: (u32, u32) = (65, 90);

/// Exclusive upper bound for generated costs and durations.
const MAX_AMOUNT: u32 = 10000;

/// Deterministic source of service records: the same seed always yields the
/// same sequence.
pub struct ServiceGenerator {
    rng: StdRng,
}

impl ServiceGenerator {
    pub fn new(seed: u64) -> ServiceGenerator {
        ServiceGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get a random integer in `[a, b)`.
    ///
    /// # Panics
    /// Panics if the range is empty.
    pub fn random_int(&mut self, a: u32, b: u32) -> u32 {
        assert!(a < b, "empty range {}..{}", a, b);
        self.rng.random_range(a..b)
    }

    /// Get a random index into a collection of `len` elements.
    ///
    /// # Panics
    /// Panics if `len` is zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    /// Get a random character between 'A' and 'Y'.
    pub fn random_char(&mut self) -> u8 {
        self.random_int(CHAR_RANGE.0, CHAR_RANGE.1) as u8
    }

    /// Get a random field of 1 to `MAX_FIELD_LEN` characters.
    pub fn random_str(&mut self) -> ShortStr {
        let len = self.random_int(1, MAX_STRING_LENGTH as u32) as usize;
        let mut buf = [0u8; MAX_FIELD_LEN];
        for b in buf[..len].iter_mut() {
            *b = self.random_char();
        }

        match ShortStr::from_bytes(&buf[..len]) {
            Ok(s) => s,
            Err(e) => unreachable!("generated field was rejected: {}", e),
        }
    }

    pub fn generate_service(&mut self) -> Service {
        Service {
            service_name: self.random_str(),
            service_type: self.random_str(),
            cost: self.random_int(1, MAX_AMOUNT),
            duration: self.random_int(1, MAX_AMOUNT),
            master_name: self.random_str(),
        }
    }

    pub fn generate_services(&mut self, n: usize) -> Vec<Service> {
        (0..n).map(|_| self.generate_service()).collect()
    }
}
