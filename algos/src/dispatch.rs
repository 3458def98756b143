use std::fmt;

use crate::{Horspool, Kmp, Naive, RabinKarp, StringSearch, Symbol, to_chars};

/// Runtime choice of matcher, for callers that receive the algorithm as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Naive,
    Kmp,
    Hashing,
    Horspool,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::Hashing,
        Algorithm::Horspool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => Naive::NAME,
            Algorithm::Kmp => Kmp::NAME,
            Algorithm::Hashing => RabinKarp::NAME,
            Algorithm::Horspool => Horspool::NAME,
        }
    }

    /// Resolve a tag such as `"kmp"` or `"hashing"`.
    ///
    /// Never fails: anything unrecognised runs the naive matcher.
    pub fn from_tag(tag: &str) -> Algorithm {
        let tag = tag.trim();
        match Self::parse_tag(tag) {
            Some(algo) => algo,
            None => {
                log::warn!("unknown algorithm tag {:?}, falling back to naive", tag);
                Algorithm::Naive
            }
        }
    }

    fn parse_tag(tag: &str) -> Option<Algorithm> {
        if tag.eq_ignore_ascii_case("rabin-karp") {
            return Some(Algorithm::Hashing);
        }
        Self::ALL
            .into_iter()
            .find(|algo| tag.eq_ignore_ascii_case(algo.name()))
    }

    pub fn find_all_in<T: Symbol>(self, text: &[T], pattern: &[T]) -> Vec<usize> {
        log::debug!(
            "{}: n={} m={}",
            self.name(),
            text.len(),
            pattern.len()
        );
        match self {
            Algorithm::Naive => Naive::find_all_in(text, pattern),
            Algorithm::Kmp => Kmp::find_all_in(text, pattern),
            Algorithm::Hashing => RabinKarp::find_all_in(text, pattern),
            Algorithm::Horspool => Horspool::find_all_in(text, pattern),
        }
    }

    pub fn find_in<T: Symbol>(self, text: &[T], pattern: &[T]) -> Option<usize> {
        match self {
            Algorithm::Naive => Naive::find_in(text, pattern),
            Algorithm::Kmp => Kmp::find_in(text, pattern),
            Algorithm::Hashing => RabinKarp::find_in(text, pattern),
            Algorithm::Horspool => Horspool::find_in(text, pattern),
        }
    }

    /// Offsets are counted in chars.
    pub fn find_all(self, text: &str, pattern: &str) -> Vec<usize> {
        self.find_all_in(&to_chars(text), &to_chars(pattern))
    }

    pub fn find_all_bytes(self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        self.find_all_in(text, pattern)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Search `text` for `pattern` with the matcher named by `tag`, returning char
/// offsets of every (possibly overlapping) occurrence.
pub fn search(text: &str, pattern: &str, tag: &str) -> Vec<usize> {
    Algorithm::from_tag(tag).find_all(text, pattern)
}

/// Byte-offset variant of [`search`].
pub fn search_bytes(text: &[u8], pattern: &[u8], tag: &str) -> Vec<usize> {
    Algorithm::from_tag(tag).find_all_bytes(text, pattern)
}
