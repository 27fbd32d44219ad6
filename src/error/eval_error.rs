use thiserror::Error;

use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents the structural failures of evaluation.
///
/// None of these can be caused by a well-formed tree coming out of the
/// parser; seeing one means the parser and the evaluator disagree.
pub enum EvalError {
    /// A node whose token kind has no evaluation rule.
    #[error("Cannot evaluate a node of kind {kind}.")]
    UnsupportedNode {
        /// The token kind of the node.
        kind: TokenKind,
    },
    /// An operator node lacks one of its children.
    #[error("Node of kind {kind} is missing an operand.")]
    MissingOperand {
        /// The token kind of the node.
        kind: TokenKind,
    },
    /// A node or token index points outside the current statement.
    #[error("Index {index} does not belong to the current statement.")]
    DanglingIndex {
        /// The offending index.
        index: usize,
    },
    /// The scratch pool could not grow.
    #[error("Scratch pool could not grow to {requested} values.")]
    PoolExhausted {
        /// Pool size that was requested.
        requested: usize,
    },
    /// The numeric constants cache could not be built.
    #[error("Failed to initialize numeric constants: {reason}.")]
    Constants {
        /// Description of the underlying failure.
        reason: String,
    },
}
