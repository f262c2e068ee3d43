use std::fmt;

use crate::{
    ast::{ComparisonOperator, FnDecl},
    library::{
        Number,
        core::{BinaryFn, NativeFn, UnaryFn},
    },
};

/// A resolved expression, ready to be evaluated.
///
/// Every symbol has already been looked up in the library: parameters are
/// positions, constants are values, and every call or operator holds the
/// callable it dispatches to.
#[derive(Clone)]
pub(crate) enum Node<T> {
    /// The argument at this position.
    Parameter(usize),
    /// A number literal or a library constant.
    Value(T),
    /// A library function call, variant appended to the arguments.
    Call {
        func: NativeFn<T>,
        args: Vec<Self>,
    },
    Unary {
        func:    UnaryFn<T>,
        operand: Box<Self>,
    },
    Binary {
        func:  BinaryFn<T>,
        left:  Box<Self>,
        right: Box<Self>,
    },
}

impl<T: Number> Node<T> {
    /// Evaluates the node against positional arguments.
    ///
    /// # Panics
    /// Panics if a parameter position is out of bounds of `args`.
    pub(crate) fn evaluate(&self, args: &[T]) -> T {
        match self {
            Self::Parameter(index) => args[*index],
            Self::Value(value) => *value,
            Self::Call { func, args: params } => {
                let values = params.iter()
                                   .map(|node| node.evaluate(args))
                                   .collect::<Vec<_>>();
                func(&values)
            },
            Self::Unary { func, operand } => func(operand.evaluate(args)),
            Self::Binary { func, left, right } => func(left.evaluate(args), right.evaluate(args)),
        }
    }
}

/// One resolved guard clause: `operands[0] op[0] operands[1] op[1] ...`.
///
/// Each operand is evaluated at most once and evaluation stops at the first
/// link that does not hold.
#[derive(Clone)]
pub(crate) struct Condition<T> {
    pub(crate) operands:    Vec<Node<T>>,
    pub(crate) comparisons: Vec<ComparisonOperator>,
}

impl<T: Number> Condition<T> {
    pub(crate) fn holds(&self, args: &[T]) -> bool {
        let mut operands = self.operands.iter();
        let Some(first) = operands.next() else {
            return true;
        };
        let mut left = first.evaluate(args);
        for (op, node) in self.comparisons.iter().zip(operands) {
            let right = node.evaluate(args);
            if !op.holds(&left, &right) {
                return false;
            }
            left = right;
        }
        true
    }
}

/// A declaration compiled against a library.
///
/// Call it with one value per declared parameter, in declaration order. The
/// result is `None` when a guard clause rejects the arguments.
///
/// The function also exposes read-only metadata: its name, its parameter
/// names, the source text generated for it and the declaration it was
/// compiled from. It holds its own copy of every callable it uses, so it
/// can be called repeatedly, and from several threads, without the library
/// it was compiled against.
///
/// # Example
/// ```
/// use mathfn::compile_declaration;
///
/// let f = compile_declaration("f(x)=x^2{x>=0}").unwrap();
///
/// assert_eq!(f.name(), "f");
/// assert_eq!(f.params(), ["x"]);
/// assert_eq!(f.call(&[2.0]), Some(4.0));
/// assert_eq!(f.call(&[-2.0]), None);
/// ```
#[derive(Clone)]
pub struct CompiledFunction<T = f64> {
    name:        String,
    params:      Vec<String>,
    source:      String,
    declaration: FnDecl,
    body:        Node<T>,
    conditions:  Vec<Condition<T>>,
}

impl<T: Number> CompiledFunction<T> {
    pub(crate) fn new(declaration: FnDecl,
                      source: String,
                      body: Node<T>,
                      conditions: Vec<Condition<T>>)
                      -> Self {
        Self { name: declaration.ident.lexeme().to_string(),
               params: declaration.param_names(),
               source,
               declaration,
               body,
               conditions }
    }

    /// Evaluates the function.
    ///
    /// Returns `None` if any guard clause does not hold; the body is not
    /// evaluated in that case. Numeric domain errors of library functions
    /// (e.g. `sqrt(-1)`) are returned as the library computes them.
    ///
    /// # Panics
    /// Panics if fewer arguments than declared parameters are supplied.
    /// Extra arguments are ignored.
    #[must_use]
    pub fn call(&self, args: &[T]) -> Option<T> {
        debug_assert!(args.len() >= self.arity(),
                      "`{}` takes {} argument(s) but {} were supplied",
                      self.name,
                      self.arity(),
                      args.len());
        self.conditions
            .iter()
            .all(|condition| condition.holds(args))
            .then(|| self.body.evaluate(args))
    }

    /// The declared function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter names, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The source text generated for the declaration.
    ///
    /// Library symbols appear as `functions.<name>`, `constants.<name>` and
    /// `operations.<name>`; native arithmetic appears as infix operators.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The declaration this function was compiled from.
    #[must_use]
    pub const fn declaration(&self) -> &FnDecl {
        &self.declaration
    }
}

impl<T> fmt::Debug for CompiledFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFunction")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("source", &self.source)
         .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CompiledFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
