/// Lowercase `s` one char at a time without moving any offsets.
///
/// A char is only replaced when its lowercase form is a single char of the
/// same UTF-8 and UTF-16 width, so char, byte and UTF-16 offsets into the
/// result are valid offsets into `s`. Anything else (`İ`, which expands to
/// two chars, or `Ⱥ`, whose lowercase form is one byte wider) is kept as is.
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() && l.len_utf16() == c.len_utf16() => l,
        _ => c,
    }
}
