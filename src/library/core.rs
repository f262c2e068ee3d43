use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

use crate::library::number::Number;

/// Marker that ends the name of a function taking a subscript variant.
///
/// A library function registered as `log_` is called as `log_10(x)`; the
/// subscript is appended as its last argument.
pub const VARIANT_MARKER: char = '_';

/// A library function body. Receives the evaluated arguments, with the
/// variant (if any) appended last.
pub type NativeFn<T> = Arc<dyn Fn(&[T]) -> T + Send + Sync>;
/// A library binary operation.
pub type BinaryFn<T> = Arc<dyn Fn(T, T) -> T + Send + Sync>;
/// A library unary operation.
pub type UnaryFn<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Binary algebraic operations a library may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinaryOperation {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`
    Div,
    /// `pow`
    Pow,
    /// `mod`
    Mod,
}

/// Unary algebraic operations a library may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnaryOperation {
    /// `abs`
    Abs,
    /// `neg`
    Neg,
    /// `fac`
    Fac,
}

impl BinaryOperation {
    /// The opcode name, as used in generated source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Pow => "pow",
            Self::Mod => "mod",
        }
    }
}

impl UnaryOperation {
    /// The opcode name, as used in generated source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Neg => "neg",
            Self::Fac => "fac",
        }
    }
}

/// A named library function: its fixed arity and its body.
///
/// An arity of `0` accepts any number of arguments.
#[derive(Clone)]
pub struct LibraryFunction<T> {
    /// The number of arguments expected, `0` meaning any.
    pub arity: usize,
    /// The function body.
    pub func:  NativeFn<T>,
}

impl<T> fmt::Debug for LibraryFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryFunction")
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// The capability set a declaration is compiled against: named functions,
/// named constants, and optional overrides of the algebraic operations.
///
/// The scanner consults it to know which letter runs are reserved words and
/// the code generator resolves every symbol through it. A library is plain
/// data; cloning it is cheap and the clone can be handed to another thread.
///
/// # Example
/// ```
/// use mathfn::{Library, compile_declaration_with};
///
/// let library = Library::new().with_function("double", 1, |args: &[f64]| args[0] * 2.0)
///                             .with_constant("tau", std::f64::consts::TAU);
///
/// let f = compile_declaration_with("f(x)=double(x)+tau", &library).unwrap();
/// assert_eq!(f.call(&[1.0]), Some(2.0 + std::f64::consts::TAU));
/// ```
#[derive(Clone)]
pub struct Library<T = f64> {
    functions:         BTreeMap<String, LibraryFunction<T>>,
    constants:         BTreeMap<String, T>,
    binary_operations: HashMap<BinaryOperation, BinaryFn<T>>,
    unary_operations:  HashMap<UnaryOperation, UnaryFn<T>>,
}

impl<T: Number> Default for Library<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> Library<T> {
    /// Creates an empty library: no functions, no constants, and native
    /// arithmetic for every operation.
    #[must_use]
    pub fn new() -> Self {
        Self { functions:         BTreeMap::new(),
               constants:         BTreeMap::new(),
               binary_operations: HashMap::new(),
               unary_operations:  HashMap::new(), }
    }

    /// Adds (or replaces) a named function.
    ///
    /// End the name with [`VARIANT_MARKER`] to make calls to it take a
    /// subscript variant.
    #[must_use]
    pub fn with_function(mut self,
                         name: impl Into<String>,
                         arity: usize,
                         func: impl Fn(&[T]) -> T + Send + Sync + 'static)
                         -> Self {
        self.functions.insert(name.into(),
                              LibraryFunction { arity,
                                                func: Arc::new(func) });
        self
    }

    /// Adds (or replaces) a named constant.
    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: T) -> Self {
        self.constants.insert(name.into(), value);
        self
    }

    /// Overrides a binary operation.
    #[must_use]
    pub fn with_binary_operation(mut self,
                                 op: BinaryOperation,
                                 func: impl Fn(T, T) -> T + Send + Sync + 'static)
                                 -> Self {
        self.binary_operations.insert(op, Arc::new(func));
        self
    }

    /// Overrides a unary operation.
    #[must_use]
    pub fn with_unary_operation(mut self,
                                op: UnaryOperation,
                                func: impl Fn(T) -> T + Send + Sync + 'static)
                                -> Self {
        self.unary_operations.insert(op, Arc::new(func));
        self
    }

    /// Looks up a function by its full registered name (marker included).
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&LibraryFunction<T>> {
        self.functions.get(name)
    }

    /// Looks up a constant.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<T> {
        self.constants.get(name).copied()
    }

    /// Looks up a binary operation override.
    #[must_use]
    pub fn binary_operation(&self, op: BinaryOperation) -> Option<&BinaryFn<T>> {
        self.binary_operations.get(&op)
    }

    /// Looks up a unary operation override.
    #[must_use]
    pub fn unary_operation(&self, op: UnaryOperation) -> Option<&UnaryFn<T>> {
        self.unary_operations.get(&op)
    }

    /// Iterates over the registered functions, marker included, in name
    /// order.
    pub fn functions(&self) -> impl Iterator<Item = (&str, &LibraryFunction<T>)> {
        self.functions
            .iter()
            .map(|(name, func)| (name.as_str(), func))
    }

    /// Iterates over the registered function names, marker included, in
    /// name order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Iterates over the registered constant names in name order.
    pub fn constant_names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Returns `true` if `word` is a function name once the variant marker is
    /// stripped, i.e. the scanner must treat it as a reserved word.
    ///
    /// # Example
    /// ```
    /// use mathfn::Library;
    ///
    /// let library = Library::standard();
    /// assert!(library.is_function_name("log"));
    /// assert!(library.is_function_name("sin"));
    /// assert!(!library.is_function_name("xy"));
    /// ```
    #[must_use]
    pub fn is_function_name(&self, word: &str) -> bool {
        self.functions
            .keys()
            .any(|name| canonical_name(name) == word)
    }

    /// Returns `true` if `word` names a constant.
    #[must_use]
    pub fn is_constant_name(&self, word: &str) -> bool {
        self.constants.contains_key(word)
    }
}

impl<T> fmt::Debug for Library<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut binary = self.binary_operations.keys().collect::<Vec<_>>();
        binary.sort();
        let mut unary = self.unary_operations.keys().collect::<Vec<_>>();
        unary.sort();
        f.debug_struct("Library")
         .field("functions", &self.functions.keys().collect::<Vec<_>>())
         .field("constants", &self.constants.keys().collect::<Vec<_>>())
         .field("binary_operations", &binary)
         .field("unary_operations", &unary)
         .finish()
    }
}

/// Strips the variant marker from a registered function name.
///
/// # Example
/// ```
/// use mathfn::library::core::canonical_name;
///
/// assert_eq!(canonical_name("log_"), "log");
/// assert_eq!(canonical_name("sin"), "sin");
/// ```
#[must_use]
pub fn canonical_name(name: &str) -> &str {
    name.strip_suffix(VARIANT_MARKER).unwrap_or(name)
}

/// Returns `true` if a registered function name declares a variant.
#[must_use]
pub fn accepts_variant(name: &str) -> bool {
    name.len() > 1 && name.ends_with(VARIANT_MARKER)
}
