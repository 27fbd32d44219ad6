use std::mem;

use astro_float::Consts;
use tracing::{trace, warn};

use crate::{
    ast::{Ast, NodeId},
    error::{Error, EvalError},
    interpreter::{
        evaluator::pool::ScratchPool,
        lexer::{Token, TokenKind, tokenize},
        parser::parse,
        symbol_table::SymbolTable,
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing a structural failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the runtime evaluation context.
///
/// This struct owns every structure that outlives a single line: the symbol
/// table, the scratch pool, the numeric constants cache, the AST arena and the
/// token buffer. The last two are reset for every statement and only keep
/// their allocations.
///
/// ## Usage
///
/// `Context` is created once and fed one line at a time through
/// [`Context::eval_line`]. Variables assigned by one line are visible to the
/// following ones. A failing line leaves the table as it was after the last
/// successful assignment.
pub struct Context {
    symbols: SymbolTable,
    pool:    ScratchPool,
    consts:  Consts,
    ast:     Ast,
    tokens:  Vec<Token<'static>>,
}

impl Context {
    /// Creates a context with an empty symbol table.
    ///
    /// # Errors
    /// [`EvalError::Constants`] if the numeric constants cache cannot be
    /// built. Every component constructed before the failure is dropped.
    pub fn new() -> EvalResult<Self> {
        let consts = Consts::new().map_err(|e| EvalError::Constants { reason: format!("{e:?}") })?;
        Ok(Self { symbols: SymbolTable::new(),
                  pool: ScratchPool::new(),
                  consts,
                  ast: Ast::new(),
                  tokens: Vec::new() })
    }

    /// Tokenizes, parses and evaluates one line.
    ///
    /// The token buffer and the AST arena are reused from the previous line.
    /// Nothing derived from `line` is kept once this returns.
    ///
    /// # Parameters
    /// - `line`: One statement, without its trailing newline.
    ///
    /// # Returns
    /// The value of the statement. Soft failures such as division by zero or an
    /// undefined variable give NaN, not an error.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::{evaluator::core::Context, value::core::Number};
    ///
    /// let mut context = Context::new().unwrap();
    /// context.eval_line("x = 6").unwrap();
    ///
    /// let product = context.eval_line("x * 7").unwrap();
    /// assert_eq!(product, Number::from_i64(42));
    ///
    /// assert!(context.eval_line("y + 1").unwrap().is_nan());
    /// assert!(context.eval_line("(1 + 2").is_err());
    /// ```
    pub fn eval_line(&mut self, line: &str) -> Result<Number, Error> {
        let mut tokens = recycle(mem::take(&mut self.tokens));
        let mut ast = mem::take(&mut self.ast);

        let result = self.run(line, &mut tokens, &mut ast);

        self.tokens = recycle(tokens);
        self.ast = ast;
        result
    }

    fn run<'src>(&mut self,
                 line: &'src str,
                 tokens: &mut Vec<Token<'src>>,
                 ast: &mut Ast)
                 -> Result<Number, Error> {
        tokenize(line, tokens)?;
        let root = parse(tokens, ast)?;
        Ok(self.evaluate(tokens, ast, root)?)
    }

    /// Evaluates a parsed statement.
    ///
    /// Walks the tree rooted at `root` in post-order. Every node stores its
    /// result in the scratch pool, which is reset first, and the value of the
    /// root is copied out before returning.
    ///
    /// # Parameters
    /// - `tokens`: The tokens the tree was parsed from.
    /// - `ast`: The tree.
    /// - `root`: Root returned by the parser.
    ///
    /// # Errors
    /// Structural failures only: an operator without a rule
    /// ([`EvalError::UnsupportedNode`]), a missing child, an index outside
    /// the statement, or a pool that cannot grow.
    pub fn evaluate(&mut self, tokens: &[Token<'_>], ast: &Ast, root: NodeId) -> EvalResult<Number> {
        self.pool.reset();
        let slot = self.eval_node(tokens, ast, root)?;
        trace!(slots = self.pool.in_use(), "statement evaluated");
        Ok(self.pool.get(slot)?.clone())
    }

    fn eval_node(&mut self, tokens: &[Token<'_>], ast: &Ast, id: NodeId) -> EvalResult<usize> {
        let node = *ast.get(id).ok_or(EvalError::DanglingIndex { index: id.index() })?;
        let token = *tokens.get(node.token)
                           .ok_or(EvalError::DanglingIndex { index: node.token })?;

        let value = match token.kind {
            TokenKind::Number => {
                let lexeme = token.lexeme();
                let value = Number::parse_decimal(&lexeme, &mut self.consts);
                if value.is_nan() {
                    warn!(lexeme = %lexeme, "malformed numeric literal");
                }
                value
            },
            TokenKind::Variable => self.eval_variable(token.text),
            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Modulo
            | TokenKind::Power => {
                let left = self.eval_child(tokens, ast, node.left, token.kind)?;
                let right = self.eval_child(tokens, ast, node.right, token.kind)?;
                Self::eval_binary(token.kind,
                                  self.pool.get(left)?,
                                  self.pool.get(right)?,
                                  &mut self.consts)?
            },
            TokenKind::SquareRoot => {
                let argument = self.eval_child(tokens, ast, node.left, token.kind)?;
                Self::eval_sqrt(self.pool.get(argument)?)
            },
            TokenKind::Assign => self.eval_assign(tokens, ast, node.left, node.right)?,
            kind => return Err(EvalError::UnsupportedNode { kind }),
        };

        trace!(node = %id, kind = %token.kind, "node evaluated");
        self.pool.alloc(value)
    }

    fn eval_child(&mut self,
                  tokens: &[Token<'_>],
                  ast: &Ast,
                  child: Option<NodeId>,
                  kind: TokenKind)
                  -> EvalResult<usize> {
        let child = child.ok_or(EvalError::MissingOperand { kind })?;
        self.eval_node(tokens, ast, child)
    }

    fn eval_variable(&self, name: &str) -> Number {
        self.symbols.get(name).cloned().unwrap_or_else(|| {
                                           warn!(name, "undefined variable");
                                           Number::nan()
                                       })
    }

    /// Evaluates the right side of an assignment and stores it under the
    /// name of the left leaf.
    fn eval_assign(&mut self,
                   tokens: &[Token<'_>],
                   ast: &Ast,
                   target: Option<NodeId>,
                   value: Option<NodeId>)
                   -> EvalResult<Number> {
        let target = target.ok_or(EvalError::MissingOperand { kind: TokenKind::Assign })?;
        let target = ast.get(target)
                        .ok_or(EvalError::DanglingIndex { index: target.index() })?;
        let name = tokens.get(target.token)
                         .ok_or(EvalError::DanglingIndex { index: target.token })?;
        if name.kind != TokenKind::Variable {
            return Err(EvalError::UnsupportedNode { kind: name.kind });
        }

        let slot = self.eval_child(tokens, ast, value, TokenKind::Assign)?;
        let stored = self.symbols.insert_or_update(name.text, self.pool.get(slot)?);
        Ok(stored)
    }

    /// The variables defined so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Mutable access to the variables, used to store results and to clear
    /// them.
    pub const fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// The scratch pool as left by the last evaluation.
    #[must_use]
    pub const fn pool(&self) -> &ScratchPool {
        &self.pool
    }
}

/// Empties a token buffer and rebinds it to a new source lifetime.
///
/// The buffer holds no tokens afterwards, so no borrow of the old line
/// survives. The in-place collect keeps the allocation.
#[allow(clippy::needless_pass_by_value)]
fn recycle<'a, 'b>(mut tokens: Vec<Token<'a>>) -> Vec<Token<'b>> {
    tokens.clear();
    tokens.into_iter().filter_map(|_| None).collect()
}
