//! Template function map.
//!
//! Binds the helpers to the names templates call them by. The five keys are
//! a stable contract with the templates that use them.

use crate::config::HelperConfig;
use crate::error::CodegenError;
use crate::naming::prefixed_var_name;
use crate::parse::ParseCall;
use popgen_types::{base_type, is_builtin_type, is_not_supported_type};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Key for the built-in type check.
pub const IS_BUILTIN: &str = "is_builtin";
/// Key for the base-type normalizer.
pub const BASETYPE: &str = "basetype";
/// Key for the parse-expression generator.
pub const PARSEFUNC: &str = "parsefunc";
/// Key for the unsupported type check.
pub const IS_NOTSUPPORTED_TYPE: &str = "is_notsupported_type";
/// Key for the variable name generator.
pub const VARNAME: &str = "varname";

/// Value returned by a template function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Boolean result, used in template conditionals.
    Bool(bool),
    /// Text spliced into generated source.
    Str(String),
}

impl Value {
    /// Returns the boolean, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Str(_) => None,
        }
    }

    /// Returns the text, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => f.write_str(s),
        }
    }
}

type HelperFn = Arc<dyn Fn(&[&str]) -> Value + Send + Sync>;

#[derive(Clone)]
struct Helper {
    arity: usize,
    func: HelperFn,
}

/// Mapping from template function names to helpers.
#[derive(Clone)]
pub struct FuncMap {
    funcs: BTreeMap<&'static str, Helper>,
}

impl FuncMap {
    /// Creates a function map with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::bind(Arc::new(HelperConfig::default()))
    }

    /// Creates a function map bound to the given configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfig` if the configuration is invalid.
    pub fn with_config(config: HelperConfig) -> Result<Self, CodegenError> {
        config.validate()?;
        Ok(Self::bind(Arc::new(config)))
    }

    fn bind(config: Arc<HelperConfig>) -> Self {
        let mut map = Self {
            funcs: BTreeMap::new(),
        };

        map.register(IS_BUILTIN, 1, |args| is_builtin_type(args[0]).into());
        map.register(BASETYPE, 1, |args| base_type(args[0]).into());
        map.register(IS_NOTSUPPORTED_TYPE, 1, |args| {
            is_not_supported_type(args[0]).into()
        });

        let parse_config = Arc::clone(&config);
        map.register(PARSEFUNC, 2, move |args| {
            ParseCall::with_config(args[0], args[1], &parse_config)
                .map(|call| call.to_string())
                .unwrap_or_default()
                .into()
        });

        map.register(VARNAME, 1, move |args| {
            prefixed_var_name(config.prefix(), args[0]).into()
        });

        map
    }

    fn register<F>(&mut self, name: &'static str, arity: usize, func: F)
    where
        F: Fn(&[&str]) -> Value + Send + Sync + 'static,
    {
        self.funcs.insert(
            name,
            Helper {
                arity,
                func: Arc::new(func),
            },
        );
    }

    /// Calls the helper registered under `name`.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownFunction` if no helper has that name, or
    /// `CodegenError::ArityMismatch` if the argument count is wrong.
    pub fn call(&self, name: &str, args: &[&str]) -> Result<Value, CodegenError> {
        let Some(helper) = self.funcs.get(name) else {
            tracing::debug!("Unknown template function '{}'", name);
            return Err(CodegenError::unknown_function(name));
        };

        if args.len() != helper.arity {
            tracing::debug!(
                "Template function '{}' called with {} argument(s), expected {}",
                name,
                args.len(),
                helper.arity
            );
            return Err(CodegenError::arity(name, helper.arity, args.len()));
        }

        let value = (helper.func)(args);
        tracing::trace!("Template function '{}' returned '{}'", name, value);
        Ok(value)
    }

    /// Returns true if a helper is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Returns the number of arguments the named helper takes.
    #[must_use]
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.funcs.get(name).map(|h| h.arity)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.funcs.keys().copied()
    }

    /// Returns the number of registered helpers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Returns true if no helpers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl Default for FuncMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.funcs.iter().map(|(name, h)| (name, h.arity)))
            .finish()
    }
}

/// Returns the function map to register with a template engine.
#[must_use]
pub fn get_func_map() -> FuncMap {
    FuncMap::new()
}
