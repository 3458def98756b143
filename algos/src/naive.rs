use std::ops::ControlFlow;

use crate::{StringSearch, Symbol, searchable};

pub struct Naive;

impl StringSearch for Naive {
    const NAME: &'static str = "naive";

    fn visit<T, F>(text: &[T], pattern: &[T], on_match: F)
    where
        T: Symbol,
        F: FnMut(usize) -> ControlFlow<()>,
    {
        naive_visit(text, pattern, on_match)
    }
}

fn naive_visit<T, F>(text: &[T], pattern: &[T], mut on_match: F)
where
    T: Symbol,
    F: FnMut(usize) -> ControlFlow<()>,
{
    let n = text.len();
    let m = pattern.len();

    if !searchable(n, m) {
        return;
    }

    for i in 0..=n - m {
        let mut matched = true;
        for j in 0..m {
            if text[i + j] != pattern[j] {
                matched = false;
                break;
            }
        }
        if matched && on_match(i).is_break() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(Naive::find_bytes(hay, pat), Some(10));
    }

    #[test]
    fn test_naive_not_found() {
        assert_eq!(Naive::find_bytes(b"hello world", b"rust"), None);
        assert!(Naive::find_all_bytes(b"abcdef", b"xyz").is_empty());
    }

    #[test]
    fn test_naive_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(Naive::find_bytes(hay, pat), None);
        assert!(Naive::find_all_bytes(hay, pat).is_empty());
    }

    #[test]
    fn test_naive_find_all_overlapping() {
        assert_eq!(Naive::find_all_bytes(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(Naive::find_all_bytes(b"aaa", b"aa"), vec![0, 1]);
    }

    #[test]
    fn test_naive_pattern_longer_than_text() {
        assert!(Naive::find_all_bytes(b"ab", b"abc").is_empty());
    }

    #[test]
    fn test_naive_utf8() {
        let hay = "🌍hello🌍hello";
        let pat = "🌍hello";

        assert_eq!(pat.chars().count(), 6);

        assert_eq!(Naive::find_all(hay, pat), vec![0, 6]);
        assert_eq!(Naive::find_all_bytes(hay.as_bytes(), pat.as_bytes()), vec![0, pat.len()]);
    }
}
