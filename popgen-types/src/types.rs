//! Built-in scalar type definitions.
//!
//! This module contains the fixed set of scalar type names the generator
//! recognises natively, together with the coarser base-type families used to
//! share parsing logic across bit widths.

use crate::error::UnknownTypeName;
use std::fmt;
use std::str::FromStr;

/// Canonical label for the signed integer family.
pub const BASE_INT: &str = "int";
/// Canonical label for the unsigned integer family.
pub const BASE_UINT: &str = "uint";
/// Canonical label for the floating point family.
pub const BASE_FLOAT: &str = "float";

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinType {
    /// Boolean.
    Bool,
    /// Single byte (alias of an unsigned 8-bit integer, kept distinct).
    Byte,
    /// 64-bit complex number.
    Complex64,
    /// 128-bit complex number.
    Complex128,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Unsized signed integer.
    Int,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unicode code point.
    Rune,
    /// String.
    String,
    /// Unsized unsigned integer.
    Uint,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Pointer-sized unsigned integer.
    Uintptr,
}

impl BuiltinType {
    /// Every built-in type, in name order.
    pub const ALL: [Self; 19] = [
        Self::Bool,
        Self::Byte,
        Self::Complex128,
        Self::Complex64,
        Self::Float32,
        Self::Float64,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Rune,
        Self::String,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
    ];

    /// Returns the type name as it appears in schema descriptions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Rune => "rune",
            Self::String => "string",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
        }
    }

    /// Looks up a built-in type by exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Self::Bool),
            "byte" => Some(Self::Byte),
            "complex64" => Some(Self::Complex64),
            "complex128" => Some(Self::Complex128),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "int" => Some(Self::Int),
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "rune" => Some(Self::Rune),
            "string" => Some(Self::String),
            "uint" => Some(Self::Uint),
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "uintptr" => Some(Self::Uintptr),
            _ => None,
        }
    }

    /// Returns the bit width carried by the type name, if any.
    ///
    /// Unsized aliases (`int`, `uint`, `uintptr`) and non-numeric types
    /// return `None`.
    #[must_use]
    pub const fn bits(&self) -> Option<u8> {
        match self {
            Self::Int8 | Self::Uint8 => Some(8),
            Self::Int16 | Self::Uint16 => Some(16),
            Self::Int32 | Self::Uint32 | Self::Float32 => Some(32),
            Self::Int64 | Self::Uint64 | Self::Float64 => Some(64),
            _ => None,
        }
    }

    /// Returns the base-type family of this type.
    #[must_use]
    pub const fn base_type(&self) -> BaseType<'static> {
        match self {
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => BaseType::Int,
            Self::Uint
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64
            | Self::Uintptr => BaseType::Uint,
            Self::Float32 | Self::Float64 => BaseType::Float,
            _ => BaseType::Other(self.name()),
        }
    }

    /// Returns true if this is a signed integer type.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self.base_type(), BaseType::Int)
    }

    /// Returns true if this is an unsigned integer type.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(self.base_type(), BaseType::Uint)
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self.base_type(), BaseType::Float)
    }

    /// Returns true if this is a complex number type.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTypeName::new(s))
    }
}

/// Base-type family of a type name.
///
/// Sized variants of a numeric family collapse to one canonical label; every
/// other name is echoed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType<'a> {
    /// Signed integer family.
    Int,
    /// Unsigned integer family.
    Uint,
    /// Floating point family.
    Float,
    /// Any other type, carrying the original name.
    Other(&'a str),
}

impl<'a> BaseType<'a> {
    /// Classifies a type name.
    #[must_use]
    pub fn of(type_name: &'a str) -> Self {
        match BuiltinType::from_name(type_name).map(|t| t.base_type()) {
            Some(BaseType::Other(_)) | None => Self::Other(type_name),
            Some(base) => base,
        }
    }

    /// Returns the canonical label, or the original name for [`BaseType::Other`].
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Int => BASE_INT,
            Self::Uint => BASE_UINT,
            Self::Float => BASE_FLOAT,
            Self::Other(name) => *name,
        }
    }
}

impl fmt::Display for BaseType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the name is one of the built-in scalar types.
#[must_use]
pub fn is_builtin_type(type_name: &str) -> bool {
    BuiltinType::from_name(type_name).is_some()
}

/// Returns true for built-in types that cannot be parsed from a string.
///
/// Only the complex number types qualify.
#[must_use]
pub fn is_not_supported_type(type_name: &str) -> bool {
    BuiltinType::from_name(type_name).is_some_and(|t| t.is_complex())
}

/// Normalizes a type name to its base-type label.
#[must_use]
pub fn base_type(type_name: &str) -> &str {
    BaseType::of(type_name).as_str()
}
