mod dispatch;
mod fold;
mod horspool;
mod kmp;
mod naive;
mod rabin_karp;

pub mod rolling_hash;

use std::hash::Hash;
use std::ops::ControlFlow;

/// A unit of text the matchers compare: bytes, UTF-16 code units or chars.
pub trait Symbol: Copy + Eq + Hash {
    /// Numeric code fed into the rolling hash.
    fn code(self) -> u32;
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}

impl Symbol for u16 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}

/// Common interface of the exact matchers.
///
/// Implementors only provide [`StringSearch::visit`]; it reports every match
/// start in increasing order and stops as soon as the callback breaks.
/// An empty pattern, or one longer than the text, never matches.
pub trait StringSearch {
    const NAME: &'static str;

    fn visit<T, F>(text: &[T], pattern: &[T], on_match: F)
    where
        T: Symbol,
        F: FnMut(usize) -> ControlFlow<()>;

    fn find_all_in<T: Symbol>(text: &[T], pattern: &[T]) -> Vec<usize> {
        let mut result = Vec::new();
        Self::visit(text, pattern, |pos| {
            result.push(pos);
            ControlFlow::Continue(())
        });
        result
    }

    fn find_in<T: Symbol>(text: &[T], pattern: &[T]) -> Option<usize> {
        let mut first = None;
        Self::visit(text, pattern, |pos| {
            first = Some(pos);
            ControlFlow::Break(())
        });
        first
    }

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        Self::find_in(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        Self::find_all_in(text, pattern)
    }

    /// Offsets are counted in chars, not bytes.
    fn find(text: &str, pattern: &str) -> Option<usize> {
        let (text, pattern) = (to_chars(text), to_chars(pattern));
        Self::find_in(&text, &pattern)
    }

    /// Offsets are counted in chars, not bytes.
    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        let (text, pattern) = (to_chars(text), to_chars(pattern));
        Self::find_all_in(&text, &pattern)
    }
}

pub(crate) fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Whether `pattern` can occur in a text of length `n` at all.
#[inline]
pub(crate) fn searchable(n: usize, m: usize) -> bool {
    m != 0 && m <= n
}

pub use dispatch::{Algorithm, search, search_bytes};
pub use fold::{fold_case, fold_char};
pub use horspool::{Horspool, ShiftTable, build_shift_table};
pub use kmp::{Kmp, PreparedKmp, build_lps};
pub use naive::Naive;
pub use rabin_karp::RabinKarp;
pub use rolling_hash::RollingHash;
