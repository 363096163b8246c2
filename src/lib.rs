#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::errors::errors::{ErrorTip, LexicalError};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{analyze, Analysis, LexicalAnalyzer};
pub use lexer::tokens::{lexeme_code, lexeme_code_or_sentinel};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call multiple times. A subscriber is only installed when
/// `RUST_LOG` is set or `verbose` is true, e.g.
/// `RUST_LOG=lexical_analyzer=trace`.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("lexical_analyzer=debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

/// Returns the text of the 1-based `line` of `content`, without its newline.
pub fn get_line(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content.split('\n').nth(line as usize - 1)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let content = "Hello, world!\nint a\n\n  Testing { }\n";

        assert_eq!(super::get_line(content, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(content, 2), Some("int a"));
        assert_eq!(super::get_line(content, 3), Some(""));
        assert_eq!(super::get_line(content, 4), Some("  Testing { }"));
        assert_eq!(super::get_line(content, 0), None);
        assert_eq!(super::get_line(content, 9), None);
    }

    #[test]
    fn test_render_error_points_at_line() {
        let errors = crate::analyze("int a\nb\n").unwrap_err();
        let rendered = super::render_error(&errors[0], "test.lang", "int a\nb\n");

        assert!(rendered.starts_with("Error: VariableUsedWithoutDeclaration"));
        assert!(rendered.contains("-> test.lang"));
        assert!(rendered.contains("2 | b"));
    }

    #[test]
    fn test_render_program_wide_error() {
        let errors = crate::analyze("goto L\n").unwrap_err();
        let rendered = super::render_error(&errors[0], "test.lang", "goto L\n");

        assert!(rendered.starts_with("Error: LabelNeverDeclared"));
        assert!(rendered.contains("(whole program)"));
    }
}

pub fn render_error(error: &LexicalError, file: &str, content: &str) -> String {
    /*
        Error: VariableRedeclared (Variable `a` already declared)
        -> final.lang
          |
        2 | int a
          |
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_kind()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some(line) = error.get_line() else {
        out.push_str("   (whole program)\n");
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let line_text = get_line(content, line).unwrap_or_default();

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}
