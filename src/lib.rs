//! # arbcalc
//!
//! arbcalc is an interactive evaluator for arithmetic expressions written in
//! Rust. Every value is a binary floating-point number with a 256-bit
//! significand, and variables persist from one line to the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Number},
};

/// Defines the expression tree.
///
/// This module declares the arena that holds the nodes of one statement and
/// the node type itself. Nodes refer to their children by arena index and to
/// their operator or operand by token index.
///
/// # Responsibilities
/// - Allocates nodes within a limit fixed before parsing.
/// - Resets the arena between statements without releasing its storage.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can abort a line. Arithmetic edge
/// cases are not errors: they evaluate to NaN.
///
/// # Responsibilities
/// - Defines one error enum per phase plus the top-level [`error::Error`].
/// - Carries the column, token kind or limit involved in each failure.
pub mod error;
/// Orchestrates the tokenize, parse and evaluate pipeline.
///
/// This module ties together the lexer, the parser, the evaluator, the symbol
/// table and the number type, and exposes
/// [`interpreter::evaluator::core::Context`] as the entry point for
/// evaluating lines.
pub mod interpreter;
/// The interactive front end.
///
/// Drives the pipeline one line at a time, keeps the previous result under
/// `last` and dispatches the `-` commands such as `-help` and `-clear-vars`.
pub mod repl;
/// General utilities.
///
/// Currently the FNV-1a string hash shared by the symbol table and the
/// command table.
pub mod util;

/// Name of the environment variable holding the log filter.
pub const LOG_ENV: &str = "ARBCALC_LOG";

static TRACING_INIT: Once = Once::new();

/// Installs the global log subscriber.
///
/// Logs go to stderr, filtered by the [`LOG_ENV`] directive, `warn` when
/// unset. Safe to call multiple times; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init();
    });
}

/// Evaluates a single statement in a fresh context.
///
/// Convenience entry point for one-off evaluation; use
/// [`Context::eval_line`] to keep variables between lines.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or parsed, or if
/// evaluation hits a structural failure.
///
/// # Examples
/// ```
/// use arbcalc::evaluate;
///
/// let value = evaluate("(1 + 2) * 4").unwrap();
/// assert_eq!(value.to_string(), "12.00000000");
///
/// // Division by zero is not an error.
/// assert!(evaluate("1 / 0").unwrap().is_nan());
///
/// // Unbalanced parentheses are.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Number, Error> {
    let mut context = Context::new()?;
    context.eval_line(source)
}
