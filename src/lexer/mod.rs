//! Lexical analysis module for the Luma parser.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token span tracking (byte offsets plus line/column)
//! - Comments retained as trivia tokens
//! - Lex diagnostics collected without aborting

pub mod lexer;
pub mod tokens;
