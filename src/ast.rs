/// An abstract syntax tree (AST) node for a single parsed statement.
///
/// The node set is closed. Every node exclusively owns its operands, so a tree
/// is dropped as a whole once the statement it came from has been evaluated.
/// Variable references never appear here: the parser resolves them to
/// [`Node::NumberLiteral`] at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric constant, either written literally or captured from the
    /// environment when a variable was referenced.
    NumberLiteral(f64),
    /// Placeholder produced by a `let` declaration. Evaluates to `0`.
    NoOp,
    /// A prefix operation on a single operand.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A comparison yielding `1.0` for true and `0.0` for false.
    RelationalOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    RelationalOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `print <expr>`: writes the value of `expr` and yields it.
    Print(Box<Self>),
}

impl Node {
    /// Builds a [`Node::BinaryOp`] from its parts.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Builds a [`Node::RelationalOp`] from its parts.
    #[must_use]
    pub fn relational(left: Self, op: RelationalOperator, right: Self) -> Self {
        Self::RelationalOp { left: Box::new(left),
                             op,
                             right: Box::new(right) }
    }

    /// Builds a [`Node::UnaryOp`] from its parts.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }
}

/// Arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Comparison operators.
///
/// `And` and `Or` exist because the grammar accepts them at the expression
/// level, but the lexer never produces their tokens and evaluation rejects
/// them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationalOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Logical and
    And,
    /// Logical or
    Or,
}

/// Unary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
