//! Diagnostic model for a character-level parser-combinator library.
//!
//! Parse failures are represented by [`ParseError`], a closed set of
//! structured failure kinds, and attributed to a named grammar production
//! by [`ErrorContext`]. Inputs are [`Source`] values which may be derived
//! views of a wider input; diagnostics are always resolved back to the
//! outermost input.

pub mod parser;

pub use parser::*;
