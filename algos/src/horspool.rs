use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::{StringSearch, Symbol, searchable};

pub struct Horspool;

impl StringSearch for Horspool {
    const NAME: &'static str = "horspool";

    fn visit<T, F>(text: &[T], pattern: &[T], on_match: F)
    where
        T: Symbol,
        F: FnMut(usize) -> ControlFlow<()>,
    {
        horspool_visit(text, pattern, on_match)
    }
}

/// Bad-character shifts for Horspool.
///
/// Symbols that are not in the table shift by the full pattern length. Only
/// point lookups are ever made, so the map's iteration order never leaks into
/// search results.
#[derive(Debug, Clone)]
pub struct ShiftTable<T> {
    shifts: HashMap<T, usize>,
    pattern_len: usize,
}

impl<T: Symbol> ShiftTable<T> {
    #[inline]
    pub fn shift(&self, symbol: T) -> usize {
        self.shifts.get(&symbol).copied().unwrap_or(self.pattern_len)
    }

    /// Explicit entry for `symbol`, `None` when it falls back to the default.
    pub fn get(&self, symbol: T) -> Option<usize> {
        self.shifts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// Build the bad-character shift table for Horspool.
///
/// Every symbol but the last maps to its distance from the end of the pattern;
/// later occurrences overwrite earlier ones, so the rightmost one wins.
pub fn build_shift_table<T: Symbol>(pattern: &[T]) -> ShiftTable<T> {
    let m = pattern.len();
    let mut shifts = HashMap::with_capacity(m);
    for (i, &symbol) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
        shifts.insert(symbol, m - 1 - i);
    }
    ShiftTable {
        shifts,
        pattern_len: m,
    }
}

fn horspool_visit<T, F>(text: &[T], pattern: &[T], mut on_match: F)
where
    T: Symbol,
    F: FnMut(usize) -> ControlFlow<()>,
{
    let n = text.len();
    let m = pattern.len();

    if !searchable(n, m) {
        return;
    }

    let table = build_shift_table(pattern);
    log::trace!("horspool: {} explicit shifts for m={}", table.len(), m);

    let mut i = 0usize; // start of the current alignment

    while i <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[i + j - 1] {
            j -= 1;
        }

        if j == 0 {
            if on_match(i).is_break() {
                return;
            }
            i += 1;
        } else {
            i += table.shift(text[i + m - 1]);
        }
    }
}
