/// Default polynomial base
pub const DEFAULT_BASE: u64 = 31;

/// Polynomial hash over the decimal digits of a key.
///
/// Digits are taken least significant first and used as the coefficients of
/// a polynomial in `base`, evaluated modulo `modulus`. A key of 0 has no
/// digits and always lands in bucket 0.
pub struct PolynomialHasher {
    base: u64,
}

impl PolynomialHasher {
    pub fn new(base: u64) -> Self {
        PolynomialHasher { base }
    }

    /// Bucket index in `[0, modulus)`. `modulus` must be non-zero.
    pub fn hash(&self, key: u64, modulus: u64) -> u64 {
        debug_assert!(modulus > 0, "modulus must be non-zero");

        let mut key = key;
        let mut acc = 0u64;
        let mut power = 1 % modulus;

        while key > 0 {
            let digit = key % 10;
            // Operands stay below modulus (or 10), so u128 keeps the products exact
            acc = ((acc as u128 + digit as u128 * power as u128) % modulus as u128) as u64;
            power = ((power as u128 * self.base as u128) % modulus as u128) as u64;
            key /= 10;
        }

        acc
    }
}

impl Default for PolynomialHasher {
    fn default() -> Self {
        PolynomialHasher::new(DEFAULT_BASE)
    }
}

/// Shorthand for `PolynomialHasher::default().hash(key, modulus)`
pub fn polynomial_hash(key: u64, modulus: u64) -> u64 {
    PolynomialHasher::default().hash(key, modulus)
}
