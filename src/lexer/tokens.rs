use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

/// Text used for newline tokens in the token table.
pub const NEWLINE_TEXT: &str = "¶";

pub const IDENTIFIER_CODE: u32 = 100;
pub const CONSTANT_CODE: u32 = 101;
pub const LABEL_CODE: u32 = 102;

pub const GOTO_SPELLING: &str = "goto";

/// Spellings of keywords that open a declaration line.
pub const TYPE_KEYWORDS: [&str; 1] = ["int"];

/// Characters that always form a token on their own.
pub const SINGLE_CHAR_OPERATORS: [char; 11] = ['+', '*', '/', '^', ',', '?', ':', '(', ')', '{', '}'];

lazy_static! {
    pub static ref SPELLING_LOOKUP: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert("=", 1);
        map.insert("==", 2);
        map.insert("!=", 3);
        map.insert(">=", 4);
        map.insert("<=", 5);
        map.insert(">>", 6);
        map.insert("<<", 7);
        map.insert("in", 8);
        map.insert("out", 9);
        map.insert("repeat", 10);
        map.insert("until", 11);
        map.insert("if", 12);
        map.insert("int", 13);
        map.insert("(", 14);
        map.insert(")", 15);
        map.insert("{", 16);
        map.insert("}", 17);
        map.insert("+", 18);
        map.insert("-", 19);
        map.insert("/", 20);
        map.insert("*", 21);
        map.insert(",", 22);
        map.insert("?", 23);
        map.insert(":", 24);
        map.insert("goto", 25);
        map.insert(">", 26);
        map.insert("<", 27);
        map.insert("not", 28);
        map.insert("or", 29);
        map.insert("and", 30);
        map.insert("\n", 31);
        map
    };
}

/// Looks up the lexeme code of a fixed spelling.
pub fn lexeme_code(spelling: &str) -> Option<u32> {
    SPELLING_LOOKUP.get(spelling).copied()
}

/// Same as [`lexeme_code`], but reports unknown spellings as `-1` for
/// consumers that index grammar terminals by signed code.
pub fn lexeme_code_or_sentinel(spelling: &str) -> i32 {
    match lexeme_code(spelling) {
        Some(code) => code as i32,
        None => -1,
    }
}

pub fn is_type_keyword(spelling: &str) -> bool {
    TYPE_KEYWORDS.contains(&spelling)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    /// Keyword, operator or newline, keyed by its spelling code.
    Spelling(u32),
    Identifier,
    Constant,
    Label,
    /// Single-character operator with no entry in the spelling table (`^`).
    Unmapped,
}

impl TokenKind {
    pub fn code(&self) -> Option<u32> {
        match self {
            TokenKind::Spelling(code) => Some(*code),
            TokenKind::Identifier => Some(IDENTIFIER_CODE),
            TokenKind::Constant => Some(CONSTANT_CODE),
            TokenKind::Label => Some(LABEL_CODE),
            TokenKind::Unmapped => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Spelling(code) => write!(f, "{}", code),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub id: usize,
    pub line: u32,
    pub text: String,
    pub kind: TokenKind,
    /// 1-based index into the identifier, constant or label table.
    pub index: Option<usize>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self.code() {
            Some(code) => code.to_string(),
            None => String::from("-"),
        };
        let index = match self.index {
            Some(index) => index.to_string(),
            None => String::from("-"),
        };

        write!(f, "{:>4} {:>4} {:<12} {:>4} {:>4}", self.id, self.line, self.text, code, index)
    }
}

impl Token {
    pub fn code(&self) -> Option<u32> {
        self.kind.code()
    }

    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_operand(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Constant])
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Spelling(_)) && is_type_keyword(&self.text)
    }

    pub fn is_goto(&self) -> bool {
        self.text == GOTO_SPELLING
    }
}
