use crate::compiler::token::{Token, TokenKind};

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` is a closed set of node kinds: literals, parenthesised and
/// absolute-value groupings, library function calls, and unary and binary
/// operations. The parser builds it once and the code generator consumes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, parameter or library constant, kept as its token.
    Literal(Token),
    /// A parenthesised expression `( inner )`.
    Grouping(Box<Self>),
    /// An absolute value `| inner |`.
    AbsGrouping(Box<Self>),
    /// Library function call (e.g. `sin(x)` or `log_10(x)`).
    FnCall {
        /// The function token, holding the name without variant marker.
        ident:   Token,
        /// The subscript variant (`10` in `log_10(x)`), if any.
        variant: Option<Box<Self>>,
        /// Arguments to the function.
        args:    Vec<Self>,
    },
    /// A unary operation (negation or factorial).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a unary node around an operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op,
                      expr: Box::new(expr) }
    }
}

/// One link of a guard clause: a comparison whose left side is either an
/// expression or a previous link.
///
/// Chained comparisons nest to the left, so `0 <= x <= 10` is
/// `LogicalExpr { left: LogicalExpr { 0 <= x }, op: <=, right: 10 }` and
/// keeps every link.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    /// Left side of the comparison.
    pub left:  ClauseOperand,
    /// The comparison operator.
    pub op:    ComparisonOperator,
    /// Right side of the comparison.
    pub right: Expr,
}

/// Left side of a [`LogicalExpr`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseOperand {
    /// The first operand of a chain.
    Expr(Expr),
    /// The preceding link of a chain.
    Logical(Box<LogicalExpr>),
}

impl LogicalExpr {
    /// Flattens the chain into its operands and the operators between them.
    ///
    /// `a < b <= c` yields `([a, b, c], [<, <=])`.
    ///
    /// # Example
    /// ```
    /// use mathfn::{Library, compiler::{lexer::scan, parser::parse}};
    ///
    /// let tokens = scan("f(x)={0<=x<10}x", &Library::standard()).unwrap();
    /// let decl = parse(&tokens).unwrap();
    /// let (operands, ops) = decl.clauses[0].links();
    ///
    /// assert_eq!(operands.len(), 3);
    /// assert_eq!(ops.len(), 2);
    /// ```
    #[must_use]
    pub fn links(&self) -> (Vec<&Expr>, Vec<ComparisonOperator>) {
        let (mut operands, mut ops) = match &self.left {
            ClauseOperand::Expr(expr) => (vec![expr], Vec::new()),
            ClauseOperand::Logical(link) => link.links(),
        };
        operands.push(&self.right);
        ops.push(self.op);
        (operands, ops)
    }
}

/// A parsed function declaration: the parse root.
///
/// An empty `clauses` list means the function is unconditional.
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    /// The declared function name.
    pub ident:   Token,
    /// The parameter names, in declaration order.
    pub params:  Vec<Token>,
    /// The body expression evaluated when every clause holds.
    pub body:    Expr,
    /// Guard clauses, all of which must hold for the body to be evaluated.
    pub clauses: Vec<LogicalExpr>,
}

impl FnDecl {
    /// The parameter names, in declaration order.
    #[must_use]
    pub fn param_names(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|token| token.lexeme().to_string())
            .collect()
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*` or implicit)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Maps a token kind to its binary operator.
    ///
    /// # Example
    /// ```
    /// use mathfn::{ast::BinaryOperator, compiler::token::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Plus),
    ///            Some(BinaryOperator::Add));
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Comma), None);
    /// ```
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Caret => Some(Self::Pow),
            TokenKind::Percent => Some(Self::Mod),
            _ => None,
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Factorial (`x!`).
    Factorial,
}

/// Represents a comparison inside a guard clause.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `=`
    Equal,
}

impl ComparisonOperator {
    /// Maps a token kind to its comparison operator.
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Greater => Some(Self::Greater),
            TokenKind::GreaterEqual => Some(Self::GreaterEqual),
            TokenKind::Less => Some(Self::Less),
            TokenKind::LessEqual => Some(Self::LessEqual),
            TokenKind::Equal => Some(Self::Equal),
            _ => None,
        }
    }

    /// Applies the comparison to two values.
    pub fn holds<T: PartialOrd>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Greater => left > right,
            Self::GreaterEqual => left >= right,
            Self::Less => left < right,
            Self::LessEqual => left <= right,
            Self::Equal => left == right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Factorial => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Equal => "==",
        };
        write!(f, "{operator}")
    }
}
