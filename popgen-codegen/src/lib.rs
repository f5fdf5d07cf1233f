//! # popgen Codegen
//!
//! Template helpers for generating Go code that parses strings into typed
//! fields.
//!
//! This crate provides:
//! - Parse-expression generation for built-in scalar types
//! - Synthetic variable naming
//! - The function map registered with a template engine
//!
//! ```
//! use popgen_codegen::{get_func_map, parse_func, var_name};
//!
//! assert_eq!(parse_func("int8", "count"), "strconv.ParseInt(_recCountStr, 10, 8)");
//! assert_eq!(var_name("ID"), "_recId");
//!
//! let funcs = get_func_map();
//! let value = funcs.call("basetype", &["uint16"]).unwrap();
//! assert_eq!(value.to_string(), "uint");
//! ```

pub mod config;
pub mod error;
pub mod funcs;
pub mod naming;
pub mod parse;

pub use config::HelperConfig;
pub use error::CodegenError;
pub use funcs::{FuncMap, Value, get_func_map};
pub use naming::{prefixed_var_name, to_title, var_name};
pub use parse::{ParseCall, ParserKind, parse_func};
pub use popgen_types::{base_type, is_builtin_type, is_not_supported_type};
