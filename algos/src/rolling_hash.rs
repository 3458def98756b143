//! Polynomial rolling hash used by the Rabin-Karp matcher.
//!
//! A window `w[0..m]` hashes to `sum(w[k] * BASE^(m-1-k)) mod PRIME`. Sliding
//! the window by one symbol removes the leading term and appends a new one in
//! O(1):
//!
//! ```text
//! h' = (BASE * (h - out * BASE^(m-1)) + in) mod PRIME
//! ```
//!
//! The prime is deliberately small so hash values are easy to reproduce by
//! hand. Collisions are frequent as a result, which only costs extra
//! verification work in the matcher, never correctness.

use crate::Symbol;

/// Multiplier of the polynomial.
pub const BASE: i64 = 256;

/// Modulus of the polynomial. Coprime to [`BASE`].
pub const PRIME: i64 = 101;

/// Hash of the current window plus the `BASE^(m-1) mod PRIME` factor needed
/// to drop its leading symbol.
///
/// Symbol codes are at most `0x10FFFF`, so every intermediate product below
/// stays far inside `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    value: i64,
    multiplier: i64,
}

impl RollingHash {
    pub fn new<T: Symbol>(window: &[T]) -> Self {
        let (value, multiplier) = init_hash(window);
        Self { value, multiplier }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// Slide the window one symbol to the right.
    #[inline]
    pub fn roll<T: Symbol>(&mut self, outgoing: T, incoming: T) {
        self.value = roll_hash(self.value, outgoing, incoming, self.multiplier);
    }
}

/// Horner evaluation of `window` together with `BASE^(len-1) mod PRIME`.
///
/// An empty window hashes to 0 with multiplier 1.
pub fn init_hash<T: Symbol>(window: &[T]) -> (i64, i64) {
    let mut multiplier = 1;
    for _ in 1..window.len() {
        multiplier = (multiplier * BASE) % PRIME;
    }

    let mut hash = 0;
    for &symbol in window {
        hash = (hash * BASE + symbol.code() as i64) % PRIME;
    }

    (hash, multiplier)
}

/// Remove `outgoing` from the front of the window hashed by `old` and append
/// `incoming`. The result is always in `[0, PRIME)`.
#[inline]
pub fn roll_hash<T: Symbol>(old: i64, outgoing: T, incoming: T, multiplier: i64) -> i64 {
    let without_front = old - outgoing.code() as i64 * multiplier;
    (BASE * without_front + incoming.code() as i64).rem_euclid(PRIME)
}
