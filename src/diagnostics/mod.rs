//! Diagnostic types and collection for the lexer and parser.
//!
//! This module defines the diagnostics produced during lexing and parsing.
//! It includes:
//!
//! - Diagnostic structures with source span information
//! - Specific diagnostic variants for the lexing and parsing phases
//! - Diagnostic formatting and display functionality
//! - Helpful messages and suggestions

pub mod diagnostics;

#[cfg(test)]
mod tests;
