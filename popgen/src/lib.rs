//! # popgen
//!
//! Template helpers for generating Go code that parses string values into
//! typed fields.
//!
//! ## Quick Start
//!
//! ```
//! use popgen::prelude::*;
//!
//! let funcs = get_func_map();
//! for (field, ty) in [("id", "int"), ("price", "float64"), ("name", "string")] {
//!     let expr = funcs.call("parsefunc", &[ty, field]).unwrap();
//!     if ty == "string" {
//!         assert_eq!(expr.as_str(), Some(""));
//!     } else {
//!         assert!(expr.to_string().starts_with("strconv.Parse"));
//!     }
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Built-in type classification and base types
//! - [`codegen`] - Parse expressions, naming and the template function map

pub mod prelude;

/// Built-in type classification.
pub mod types {
    pub use popgen_types::*;
}

/// Template helpers for code generation.
pub mod codegen {
    pub use popgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use popgen_codegen::{CodegenError, FuncMap, HelperConfig, Value, get_func_map};
pub use popgen_types::{BaseType, BuiltinType};
