//! Error types for lexical analysis.
//!
//! This module defines the structured errors collected during a scan.
//! It includes:
//!
//! - `LexicalError`, an error kind paired with its source line
//! - The `ErrorImpl` taxonomy of lexical and label-flow findings
//! - Helpful tips rendered alongside each error

pub mod errors;
