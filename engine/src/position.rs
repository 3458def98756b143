/// 1-based line and column of a char offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    const START: Position = Position { line: 1, column: 1 };

    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

/// Line and column of the char at `offset`. Offsets past the end map to the
/// position just after the last char.
pub fn locate(text: &str, offset: usize) -> Position {
    let mut pos = Position::START;
    for c in text.chars().take(offset) {
        pos.advance(c);
    }
    pos
}

/// Convert many offsets in a single pass over `text`.
///
/// `offsets` must be non-decreasing, which is what every matcher returns.
pub fn locate_all(text: &str, offsets: &[usize]) -> Vec<Position> {
    debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));

    let mut result = Vec::with_capacity(offsets.len());
    let mut chars = text.chars();
    let mut pos = Position::START;
    let mut consumed = 0usize;

    for &offset in offsets {
        while consumed < offset {
            match chars.next() {
                Some(c) => {
                    pos.advance(c);
                    consumed += 1;
                }
                None => break,
            }
        }
        result.push(pos);
    }

    result
}
