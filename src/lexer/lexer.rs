use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    errors::errors::{ErrorImpl, LexicalError},
    MK_TOKEN,
};

use super::{
    cursor::Cursor,
    symbols::{Constant, Identifier, Label, SymbolTable, NOT_DECLARED},
    tokens::{Token, TokenKind, NEWLINE_TEXT, SINGLE_CHAR_OPERATORS, SPELLING_LOOKUP},
};

/// Tables produced by a scan that finished without errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub identifiers: Vec<Identifier>,
    pub constants: Vec<Constant>,
    pub labels: Vec<Label>,
}

impl Analysis {
    pub fn identifier(&self, name: &str) -> Option<&Identifier> {
        self.identifiers.iter().find(|ident| ident.name == name)
    }

    pub fn constant(&self, spelling: &str) -> Option<&Constant> {
        self.constants.iter().find(|constant| constant.spelling == spelling)
    }

    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.name == name)
    }
}

/// What the first token of the current line says about identifiers on it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LineContext {
    #[default]
    Unseen,
    Declaration(String),
    NonDeclaration,
}

#[derive(Debug, Clone)]
pub struct LexicalAnalyzer {
    spellings: &'static HashMap<&'static str, u32>,
    cursor: Cursor,
    buffer: String,
    tokens: Vec<Token>,
    identifiers: SymbolTable<Identifier>,
    constants: SymbolTable<Constant>,
    labels: SymbolTable<Label>,
    errors: Vec<LexicalError>,
    line_context: LineContext,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAnalyzer {
    pub fn new() -> LexicalAnalyzer {
        LexicalAnalyzer::with_spellings(&SPELLING_LOOKUP)
    }

    pub fn with_spellings(spellings: &'static HashMap<&'static str, u32>) -> LexicalAnalyzer {
        LexicalAnalyzer {
            spellings,
            cursor: Cursor::default(),
            buffer: String::new(),
            tokens: vec![],
            identifiers: SymbolTable::new(),
            constants: SymbolTable::new(),
            labels: SymbolTable::new(),
            errors: vec![],
            line_context: LineContext::Unseen,
        }
    }

    /// Errors collected by the last run, kept whether or not it succeeded.
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
        self.buffer.clear();
        self.tokens.clear();
        self.identifiers.clear();
        self.constants.clear();
        self.labels.clear();
        self.errors.clear();
        self.line_context = LineContext::Unseen;
    }

    /// Scans the whole of `source`. Any error voids every table: the caller
    /// then only receives the error list.
    pub fn run(&mut self, source: &str) -> Result<Analysis, Vec<LexicalError>> {
        self.reset();
        self.cursor = Cursor::new(source);
        debug!(len = source.len(), "starting lexical analysis");

        self.scan();
        self.check_labels();

        debug!(
            tokens = self.tokens.len(),
            identifiers = self.identifiers.len(),
            constants = self.constants.len(),
            labels = self.labels.len(),
            errors = self.errors.len(),
            "finished lexical analysis"
        );

        if !self.errors.is_empty() {
            self.tokens.clear();
            self.identifiers.clear();
            self.constants.clear();
            self.labels.clear();
            return Err(self.errors.clone());
        }

        Ok(Analysis {
            tokens: std::mem::take(&mut self.tokens),
            identifiers: std::mem::take(&mut self.identifiers).into_entries(),
            constants: std::mem::take(&mut self.constants).into_entries(),
            labels: std::mem::take(&mut self.labels).into_entries(),
        })
    }

    fn scan(&mut self) {
        while self.cursor.has_input() {
            match self.cursor.at() {
                ch if ch.is_ascii_alphabetic() => self.scan_word(),
                '-' => self.scan_minus(),
                ch if ch.is_ascii_digit() => self.scan_constant(),
                ch if SINGLE_CHAR_OPERATORS.contains(&ch) => {
                    self.consume();
                    self.push_spelling();
                }
                '=' => self.scan_pair(&['=']),
                '<' => self.scan_pair(&['=', '<']),
                '>' => self.scan_pair(&['=', '>']),
                '!' => self.scan_bang(),
                ' ' | '\t' => self.cursor.advance(),
                '\n' => self.scan_newline(),
                symbol => {
                    self.record(ErrorImpl::UnknownSymbol { symbol });
                    self.cursor.advance();
                }
            }

            self.buffer.clear();
        }
    }

    fn consume(&mut self) {
        self.buffer.push(self.cursor.at());
        self.cursor.advance();
    }

    fn consume_while(&mut self, accept: fn(char) -> bool) {
        while accept(self.cursor.at()) {
            self.consume();
        }
    }

    fn scan_word(&mut self) {
        self.consume_while(|ch| ch.is_ascii_alphanumeric());

        if self.cursor.at() == ':' {
            let name = self.buffer.clone();
            self.consume();
            self.push_label(name);
        } else if self.spellings.contains_key(self.buffer.as_str()) {
            self.push_spelling();
        } else if self.tokens.last().is_some_and(Token::is_goto) {
            let name = self.buffer.clone();
            self.push_label(name);
        } else {
            self.push_identifier();
        }
    }

    fn scan_minus(&mut self) {
        let after_operand = self.tokens.last().is_some_and(Token::is_operand);
        self.consume();

        if !after_operand && self.cursor.at().is_ascii_digit() {
            self.scan_constant();
        } else {
            self.push_spelling();
        }
    }

    fn scan_constant(&mut self) {
        self.consume_while(|ch| ch.is_ascii_digit());

        let (constant, _) = self.constants.intern(&self.buffer, |index| Constant {
            spelling: self.buffer.clone(),
            index,
        });
        let index = constant.index;

        self.emit(TokenKind::Constant, Some(index));
    }

    /// Operator that may absorb one of `follow` as its second character.
    fn scan_pair(&mut self, follow: &[char]) {
        self.consume();
        if follow.contains(&self.cursor.at()) {
            self.consume();
        }

        self.push_spelling();
    }

    fn scan_bang(&mut self) {
        self.consume();

        if self.cursor.at() == '=' {
            self.consume();
            self.push_spelling();
        } else {
            self.record(ErrorImpl::ExpectedSymbol {
                found: String::from("!"),
                expected: String::from("="),
            });
        }
    }

    fn scan_newline(&mut self) {
        let code = self.spellings.get("\n").copied().unwrap_or_default();
        self.buffer = String::from(NEWLINE_TEXT);
        self.emit(TokenKind::Spelling(code), None);

        self.cursor.next_line();
        self.cursor.advance();
        self.line_context = LineContext::Unseen;
    }

    fn push_spelling(&mut self) {
        let kind = match self.spellings.get(self.buffer.as_str()) {
            Some(code) => TokenKind::Spelling(*code),
            None => TokenKind::Unmapped,
        };

        self.emit(kind, None);
    }

    fn push_identifier(&mut self) {
        let name = self.buffer.clone();
        let declared_type = match &self.line_context {
            LineContext::Declaration(declared_type) => Some(declared_type.clone()),
            _ => None,
        };

        let existing = self.identifiers.get(&name).map(|ident| ident.index);

        let index = match (existing, declared_type) {
            (Some(index), Some(_)) => {
                self.record(ErrorImpl::VariableRedeclared { variable: name });
                index
            }
            (Some(index), None) => index,
            (None, Some(declared_type)) => {
                self.identifiers
                    .intern(&name, |index| Identifier {
                        name: name.clone(),
                        index,
                        declared_type,
                    })
                    .0
                    .index
            }
            (None, None) => {
                self.record(ErrorImpl::VariableUsedWithoutDeclaration { variable: name.clone() });
                self.identifiers
                    .intern(&name, |index| Identifier {
                        name: name.clone(),
                        index,
                        declared_type: String::from(NOT_DECLARED),
                    })
                    .0
                    .index
            }
        };

        self.emit(TokenKind::Identifier, Some(index));
    }

    /// Records one occurrence of a label. Right after `goto` it is a
    /// reference, anywhere else it declares the jump target.
    fn push_label(&mut self, name: String) {
        let line = self.cursor.line();
        let is_reference = self.tokens.last().is_some_and(Token::is_goto);

        let (label, _) = self.labels.intern(&name, |index| Label {
            name: name.clone(),
            index,
            line_from: None,
            line_to: None,
        });
        let index = label.index;

        let conflict = if is_reference {
            match label.line_from {
                None => {
                    label.line_from = Some(line);
                    None
                }
                Some(_) => Some(ErrorImpl::LabelReferencedMoreThanOnce { label: name }),
            }
        } else {
            match label.line_to {
                None => {
                    label.line_to = Some(line);
                    None
                }
                Some(_) => Some(ErrorImpl::LabelRedeclared { label: name }),
            }
        };

        if let Some(error) = conflict {
            self.record(error);
        }

        self.emit(TokenKind::Label, Some(index));
    }

    fn emit(&mut self, kind: TokenKind, index: Option<usize>) {
        let token = MK_TOKEN!(
            self.tokens.len() + 1,
            self.cursor.line(),
            self.buffer.clone(),
            kind,
            index
        );
        trace!(id = token.id, line = token.line, text = %token.text, kind = %token.kind, "token");

        // A leading label declaration does not decide the line's context.
        if self.line_context == LineContext::Unseen && kind != TokenKind::Label {
            self.line_context = if token.is_type_keyword() {
                LineContext::Declaration(token.text.clone())
            } else {
                LineContext::NonDeclaration
            };
        }

        self.tokens.push(token);
    }

    fn record(&mut self, error: ErrorImpl) {
        let error = LexicalError::new(error, self.cursor.line());
        debug!(line = self.cursor.line(), "{}", error);
        self.errors.push(error);
    }

    fn check_labels(&mut self) {
        let missing: Vec<LexicalError> = self
            .labels
            .iter()
            .filter(|label| label.line_to.is_none())
            .map(|label| {
                LexicalError::program_wide(ErrorImpl::LabelNeverDeclared {
                    label: label.name.clone(),
                })
            })
            .collect();

        for error in missing {
            debug!("{}", error);
            self.errors.push(error);
        }
    }
}

/// Runs a fresh analyzer over `source`.
pub fn analyze(source: &str) -> Result<Analysis, Vec<LexicalError>> {
    LexicalAnalyzer::new().run(source)
}
