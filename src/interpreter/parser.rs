/// Parser entry point and the token cursor.
///
/// Holds [`core::parse`], which prepares the arena and drives a whole
/// statement, and [`core::TokenStream`], the lookahead cursor every grammar
/// rule reads from.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and exponent precedence levels.
pub mod binary;

/// Primary expression parsing.
///
/// Numbers, variables, parenthesized groups and `sqrt(...)`.
pub mod primary;

/// Statement parsing.
///
/// Distinguishes assignments from plain expressions.
pub mod statement;

pub use self::core::{TokenStream, parse};
