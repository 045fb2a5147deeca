//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an arena-backed syntax tree. It uses a Pratt parser for expressions
//! with per-operator-class precedence and handles:
//!
//! - Statement parsing (declarations, control flow, modules, attributes)
//! - Expression parsing (binary ops, calls, members, casts, literals)
//! - Type parsing for type-position annotations
//! - Diagnostic collection and statement-level error recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression and type parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
