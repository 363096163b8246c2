//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$id` - The 1-based position of the token in the stream
/// * `$line` - The source line
/// * `$text` - The literal text of the token
/// * `$kind` - The TokenKind
/// * `$index` - Optional index into the matching symbol table
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(1, 1, "int".to_string(), TokenKind::Spelling(13), None);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($id:expr, $line:expr, $text:expr, $kind:expr, $index:expr) => {
        $crate::lexer::tokens::Token {
            id: $id,
            line: $line,
            text: $text,
            kind: $kind,
            index: $index,
        }
    };
}
