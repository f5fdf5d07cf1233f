//! Prelude module for convenient imports.
//!
//! ```
//! use popgen::prelude::*;
//! ```

// Type classification
pub use popgen_types::{
    BaseType, BuiltinType, UnknownTypeName, base_type, is_builtin_type, is_not_supported_type,
};

// Template helpers
pub use popgen_codegen::{
    CodegenError, FuncMap, HelperConfig, ParseCall, ParserKind, Value, get_func_map, parse_func,
    to_title, var_name,
};
