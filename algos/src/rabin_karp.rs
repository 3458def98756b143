use std::ops::ControlFlow;

use crate::rolling_hash::{RollingHash, init_hash};
use crate::{StringSearch, Symbol, searchable};

pub struct RabinKarp;

impl StringSearch for RabinKarp {
    const NAME: &'static str = "hashing";

    fn visit<T, F>(text: &[T], pattern: &[T], on_match: F)
    where
        T: Symbol,
        F: FnMut(usize) -> ControlFlow<()>,
    {
        rabin_karp_visit(text, pattern, on_match)
    }
}

fn rabin_karp_visit<T, F>(text: &[T], pattern: &[T], mut on_match: F)
where
    T: Symbol,
    F: FnMut(usize) -> ControlFlow<()>,
{
    let n = text.len();
    let m = pattern.len();

    if !searchable(n, m) {
        return;
    }

    let (pattern_hash, _) = init_hash(pattern);
    let mut window = RollingHash::new(&text[..m]);
    let last = n - m;

    for i in 0..=last {
        // Equal hashes only make a candidate; collisions are verified away.
        if window.value() == pattern_hash
            && text[i..i + m] == *pattern
            && on_match(i).is_break()
        {
            return;
        }
        if i < last {
            window.roll(text[i], text[i + m]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolling_hash::PRIME;

    #[test]
    fn test_rabin_karp_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(RabinKarp::find_bytes(hay, pat), Some(10));
    }

    #[test]
    fn test_rabin_karp_not_found() {
        assert_eq!(RabinKarp::find_bytes(b"hello world", b"rust"), None);
    }

    #[test]
    fn test_rabin_karp_empty_pattern() {
        let pat: &[u8] = b"";
        assert!(RabinKarp::find_all_bytes(b"abc", pat).is_empty());
    }

    #[test]
    fn test_rabin_karp_overlapping() {
        assert_eq!(RabinKarp::find_all_bytes(b"aaaa", b"aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_rabin_karp_rejects_collisions() {
        // Single symbols collide whenever their codes agree mod PRIME.
        let a = 'a';
        let twin = char::from_u32('a' as u32 + PRIME as u32).unwrap();
        assert_eq!(init_hash(&[a]).0, init_hash(&[twin]).0);

        let text = vec![twin, a, twin, twin, a];
        assert_eq!(RabinKarp::find_all_in(&text, &[a]), vec![1, 4]);
    }

    #[test]
    fn test_rabin_karp_last_window() {
        assert_eq!(RabinKarp::find_all_bytes(b"xxxxab", b"ab"), vec![4]);
        assert_eq!(RabinKarp::find_all_bytes(b"hello", b"hello"), vec![0]);
    }

    #[test]
    fn test_rabin_karp_utf8() {
        let hay = "🌍hello🌍hello";
        let pat = "🌍hello";
        assert_eq!(RabinKarp::find_all(hay, pat), vec![0, 6]);
        assert_eq!(
            RabinKarp::find_all_bytes(hay.as_bytes(), pat.as_bytes()),
            vec![0, pat.len()]
        );
    }
}
