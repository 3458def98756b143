use std::ops::ControlFlow;

use crate::{StringSearch, Symbol, searchable};

pub struct Kmp;

impl StringSearch for Kmp {
    const NAME: &'static str = "kmp";

    fn visit<T, F>(text: &[T], pattern: &[T], on_match: F)
    where
        T: Symbol,
        F: FnMut(usize) -> ControlFlow<()>,
    {
        if !searchable(text.len(), pattern.len()) {
            return;
        }
        let lps = build_lps(pattern);
        kmp_visit(text, pattern, &lps, on_match)
    }
}

impl Kmp {
    /// Build the LPS table once so the same pattern can be searched in many
    /// texts.
    pub fn prepare<T: Symbol>(pattern: &[T]) -> PreparedKmp<T> {
        PreparedKmp {
            lps: build_lps(pattern),
            pattern: pattern.to_vec(),
        }
    }
}

/// A pattern together with its failure function.
#[derive(Debug, Clone)]
pub struct PreparedKmp<T> {
    pattern: Vec<T>,
    lps: Vec<usize>,
}

impl<T: Symbol> PreparedKmp<T> {
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    pub fn lps(&self) -> &[usize] {
        &self.lps
    }

    pub fn find_all_in(&self, text: &[T]) -> Vec<usize> {
        let mut result = Vec::new();
        if searchable(text.len(), self.pattern.len()) {
            kmp_visit(text, &self.pattern, &self.lps, |pos| {
                result.push(pos);
                ControlFlow::Continue(())
            });
        }
        result
    }

    pub fn is_match(&self, text: &[T]) -> bool {
        let mut found = false;
        if searchable(text.len(), self.pattern.len()) {
            kmp_visit(text, &self.pattern, &self.lps, |_| {
                found = true;
                ControlFlow::Break(())
            });
        }
        found
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table
pub fn build_lps<T: Symbol>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Caller guarantees `searchable(text.len(), pattern.len())` and that `lps`
/// belongs to `pattern`.
fn kmp_visit<T, F>(text: &[T], pattern: &[T], lps: &[usize], mut on_match: F)
where
    T: Symbol,
    F: FnMut(usize) -> ControlFlow<()>,
{
    let n = text.len();
    let m = pattern.len();

    let mut i = 0usize; // index in text, never decreases
    let mut j = 0usize; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                if on_match(i - j).is_break() {
                    return;
                }
                j = lps[j - 1];
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
}
