/// The evaluator module computes the value of a parsed statement.
///
/// The evaluator walks the tree built by the parser, performs the arithmetic
/// at a fixed 256-bit precision and reads and writes variables. It also owns
/// [`evaluator::core::Context`], the state that survives from line to line.
///
/// # Responsibilities
/// - Evaluates every node kind the grammar can produce.
/// - Turns arithmetic edge cases (division by zero, undefined names) into NaN.
/// - Reports structural failures as [`crate::error::EvalError`].
pub mod evaluator;
/// The lexer module splits an input line into tokens.
///
/// Tokens borrow their text from the line. A unary minus is fused into the
/// numeric literal that follows it, so later phases never see a prefix
/// operator.
///
/// # Responsibilities
/// - Recognizes numbers, names, operators and brackets.
/// - Enforces the lexeme length limit.
/// - Reports unknown characters with their column.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one function per precedence level. Nodes
/// are allocated in an [`crate::ast::Ast`] arena sized before parsing starts.
///
/// # Responsibilities
/// - Recognizes assignments and expressions.
/// - Applies precedence and associativity, `^` being right-associative.
/// - Rejects incomplete and trailing input.
pub mod parser;
/// The symbol table module stores variables.
///
/// A chained hash table keyed by FNV-1a that doubles when its load factor
/// would pass 0.6.
pub mod symbol_table;
/// The value module defines the number type used for evaluation.
///
/// Numbers are binary floating-point values with a 256-bit significand,
/// including NaN and infinities, plus their friendly decimal rendering.
pub mod value;
