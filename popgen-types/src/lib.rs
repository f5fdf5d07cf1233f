//! # popgen Types
//!
//! Built-in scalar type classification.
//!
//! This crate provides:
//! - The fixed set of built-in scalar type names
//! - Classification of names as built-in or unsupported
//! - Normalization of sized numeric names to their base-type family

pub mod error;
pub mod types;

pub use error::UnknownTypeName;
pub use types::{
    BASE_FLOAT, BASE_INT, BASE_UINT, BaseType, BuiltinType, base_type, is_builtin_type,
    is_not_supported_type,
};
