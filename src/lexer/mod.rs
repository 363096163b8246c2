//! Lexical analysis module.
//!
//! This module contains the analyzer that converts source text into a
//! classified token stream. It handles:
//!
//! - Scanning with one character of lookahead over a padded buffer
//! - Recognition of keywords and operators through the shared spelling table
//! - Interning of identifiers, constants and labels
//! - Declaration and label-flow checks discoverable in a single pass

pub mod cursor;
pub mod lexer;
pub mod symbols;
pub mod tokens;
