/// Padding appended to every input so one character of lookahead is always
/// readable.
pub const SENTINEL: char = ' ';

/// Walks the padded source one character at a time.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
}

impl Cursor {
    pub fn new(source: &str) -> Cursor {
        let mut chars: Vec<char> = source.chars().collect();
        chars.push(SENTINEL);

        Cursor { chars, pos: 0, line: 1 }
    }

    pub fn at(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or(SENTINEL)
    }

    pub fn peek(&self) -> char {
        self.chars.get(self.pos + 1).copied().unwrap_or(SENTINEL)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// True while a real input character (not the sentinel) is under the cursor.
    pub fn has_input(&self) -> bool {
        self.pos + 1 < self.chars.len()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn next_line(&mut self) {
        self.line += 1;
    }
}
