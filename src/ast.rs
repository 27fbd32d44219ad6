use std::fmt;

use crate::error::{ParseError, parse_error::ParseResult};

/// Position of a node inside an [`Ast`] arena.
///
/// A `NodeId` is only meaningful for the statement that produced it; the
/// arena is reset at the start of every parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the expression tree.
///
/// The operator or operand is identified by the token that produced it, so
/// `token` is an index into the statement's token sequence. Leaves have no
/// children, `sqrt` uses `left` only, and binary operators (assignment
/// included) use both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Index of the producing token.
    pub token: usize,
    /// Left child, or the argument of `sqrt`.
    pub left:  Option<NodeId>,
    /// Right child.
    pub right: Option<NodeId>,
}

impl Node {
    /// A node without children.
    #[must_use]
    pub const fn leaf(token: usize) -> Self {
        Self { token,
               left: None,
               right: None }
    }
}

/// Arena holding every node of one statement.
///
/// The arena has a `limit` fixed before parsing starts: [`Ast::prepare`] raises
/// it to at least one more than the number of tokens, which is enough for any
/// statement the grammar accepts, and allocation never raises it. All nodes
/// die together when the next statement is prepared.
///
/// # Example
/// ```
/// use arbcalc::ast::{Ast, Node};
///
/// let mut ast = Ast::new();
/// ast.prepare(3);
///
/// let left = ast.alloc(Node::leaf(0)).unwrap();
/// let right = ast.alloc(Node::leaf(2)).unwrap();
/// let sum = ast.binary(1, left, right).unwrap();
///
/// assert_eq!(ast.len(), 3);
/// assert_eq!(ast.get(sum).unwrap().left, Some(left));
/// ```
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    limit: usize,
}

impl Ast {
    /// Creates an empty arena with a zero limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(),
               limit: 0, }
    }

    /// Discards every node and makes room for a statement of `token_count`
    /// tokens.
    ///
    /// The limit only ever grows.
    pub fn prepare(&mut self, token_count: usize) {
        self.nodes.clear();
        let needed = token_count + 1;
        if self.limit < needed {
            tracing::debug!(from = self.limit, to = needed, "AST arena resized");
            self.limit = needed;
            self.nodes.reserve(needed);
        }
    }

    /// Stores `node` and returns its id.
    ///
    /// # Errors
    /// [`ParseError::NodeBufferOverflow`] when the arena already holds `limit`
    /// nodes.
    pub fn alloc(&mut self, node: Node) -> ParseResult<NodeId> {
        if self.nodes.len() >= self.limit {
            tracing::error!(limit = self.limit, "AST node buffer overflow");
            return Err(ParseError::NodeBufferOverflow { limit: self.limit });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Allocates a leaf for the token at `token`.
    ///
    /// # Errors
    /// See [`Ast::alloc`].
    pub fn leaf(&mut self, token: usize) -> ParseResult<NodeId> {
        self.alloc(Node::leaf(token))
    }

    /// Allocates an operator node with two children.
    ///
    /// # Errors
    /// See [`Ast::alloc`].
    pub fn binary(&mut self, token: usize, left: NodeId, right: NodeId) -> ParseResult<NodeId> {
        self.alloc(Node { token,
                          left: Some(left),
                          right: Some(right) })
    }

    /// Allocates an operator node with a single (left) child.
    ///
    /// # Errors
    /// See [`Ast::alloc`].
    pub fn unary(&mut self, token: usize, operand: NodeId) -> ParseResult<NodeId> {
        self.alloc(Node { token,
                          left: Some(operand),
                          right: None })
    }

    /// Looks up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Nodes of the current statement in allocation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes of the current statement.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the current statement has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The allocation limit in force.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}
