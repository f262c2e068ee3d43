use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::CompileError,
    library::{
        Library, LibraryFunction, Number,
        core::{accepts_variant, canonical_name},
    },
};

/// Result type used by the code generator.
pub type CompileResult<T> = Result<T, CompileError>;

/// A library function as the code generator sees it.
#[derive(Debug, Clone, Copy)]
pub struct FunctionEntry<'l, T> {
    /// The registered name, variant marker included.
    pub name:     &'l str,
    /// Whether calls must supply a variant subscript.
    pub variant:  bool,
    /// The registered function.
    pub function: &'l LibraryFunction<T>,
}

/// The plain and variant registrations sharing one canonical name.
#[derive(Debug, Clone, Copy)]
struct Overloads<'l, T> {
    plain:   Option<FunctionEntry<'l, T>>,
    variant: Option<FunctionEntry<'l, T>>,
}

/// Everything a declaration may refer to, indexed once per compilation.
///
/// Built from the declared parameter list and the bound library: parameter
/// positions, and per canonical function name the plain and the variant
/// registration.
#[derive(Debug)]
pub struct SymbolTable<'l, T> {
    library:   &'l Library<T>,
    params:    HashMap<String, usize>,
    functions: HashMap<&'l str, Overloads<'l, T>>,
}

impl<'l, T: Number> SymbolTable<'l, T> {
    /// Indexes the parameters and the library functions.
    ///
    /// A repeated parameter name refers to its first position.
    pub fn new(params: &[String], library: &'l Library<T>) -> Self {
        let mut positions = HashMap::new();
        for (index, name) in params.iter().enumerate() {
            positions.entry(name.clone()).or_insert(index);
        }

        let mut functions: HashMap<&'l str, Overloads<'l, T>> = HashMap::new();
        for (name, function) in library.functions() {
            let entry = FunctionEntry { name,
                                        variant: accepts_variant(name),
                                        function };
            let overloads = functions.entry(canonical_name(name))
                                     .or_insert(Overloads { plain:   None,
                                                            variant: None, });
            if entry.variant {
                overloads.variant = Some(entry);
            } else {
                overloads.plain = Some(entry);
            }
        }

        Self { library,
               params: positions,
               functions }
    }

    /// The library the table was built from.
    pub const fn library(&self) -> &'l Library<T> {
        self.library
    }

    /// The position of a declared parameter.
    ///
    /// # Errors
    /// `UndefinedIdentifier` if `name` is not a parameter.
    pub fn parameter(&self, name: &str) -> CompileResult<usize> {
        self.params
            .get(name)
            .copied()
            .ok_or_else(|| CompileError::UndefinedIdentifier { name: name.to_string() })
    }

    /// The value of a library constant.
    ///
    /// # Errors
    /// `UndefinedConstant` if the library does not define `name`.
    pub fn constant(&self, name: &str) -> CompileResult<T> {
        self.library
            .constant(name)
            .ok_or_else(|| CompileError::UndefinedConstant { name: name.to_string() })
    }

    /// Resolves a call to a library function and checks its shape.
    ///
    /// A call with a subscript prefers the variant registration, a call
    /// without one prefers the plain registration.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no registration has the canonical name.
    /// - `UnexpectedVariant` / `MissingVariant` if the subscript does not
    ///   match the registration.
    /// - `ArgumentCountMismatch` if the function has a fixed arity other than
    ///   `found`.
    pub fn function(&self,
                    name: &str,
                    with_variant: bool,
                    found: usize)
                    -> CompileResult<FunctionEntry<'l, T>> {
        let overloads = self.functions
                            .get(name)
                            .ok_or_else(|| CompileError::UndefinedFunction { name: name.to_string() })?;

        let entry = if with_variant {
            overloads.variant.or(overloads.plain)
        } else {
            overloads.plain.or(overloads.variant)
        };
        let Some(entry) = entry else {
            return Err(CompileError::UndefinedFunction { name: name.to_string() });
        };

        trace!(name, registered = entry.name, "resolved function");

        match (with_variant, entry.variant) {
            (true, false) => Err(CompileError::UnexpectedVariant { name: name.to_string() }),
            (false, true) => Err(CompileError::MissingVariant { name: name.to_string() }),
            _ if entry.function.arity != 0 && entry.function.arity != found => {
                Err(CompileError::ArgumentCountMismatch { name: name.to_string(),
                                                          expected: entry.function.arity,
                                                          found })
            },
            _ => Ok(entry),
        }
    }

    /// The plain registration of `name`, if any; used for the `abs` and
    /// `fac` fallbacks.
    pub fn plain_function(&self, name: &str) -> Option<FunctionEntry<'l, T>> {
        self.functions
            .get(name)
            .and_then(|overloads| overloads.plain)
    }
}
