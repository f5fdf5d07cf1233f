//! Parse-expression generation.
//!
//! A [`ParseCall`] describes the `strconv` call generated code should make to
//! turn a string-valued variable into a typed value. It is rendered to source
//! text through `Display`.

use crate::config::HelperConfig;
use crate::naming::prefixed_var_name;
use popgen_types::{BaseType, BuiltinType};
use std::fmt;

/// Radix passed to the integer parsers.
pub const INT_BASE: u32 = 10;

/// Parser invoked by a generated parse expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserKind {
    /// Signed integer parser.
    Int,
    /// Unsigned integer parser.
    Uint,
    /// Floating point parser.
    Float,
    /// Boolean parser.
    Bool,
}

impl ParserKind {
    /// Returns the qualified function name emitted into generated code.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        match self {
            Self::Int => "strconv.ParseInt",
            Self::Uint => "strconv.ParseUint",
            Self::Float => "strconv.ParseFloat",
            Self::Bool => "strconv.ParseBool",
        }
    }
}

/// A parse expression for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCall {
    /// Parser to invoke.
    pub kind: ParserKind,
    /// Bit width argument, absent for booleans.
    pub bits: Option<u8>,
    /// Name of the string-valued variable to read from.
    pub source: String,
}

impl ParseCall {
    /// Builds the parse call for a type using the default configuration.
    ///
    /// Returns `None` when no parser exists for the type.
    #[must_use]
    pub fn for_type(type_name: &str, arg_name: &str) -> Option<Self> {
        Self::with_config(type_name, arg_name, &HelperConfig::default())
    }

    /// Builds the parse call for a type.
    ///
    /// Returns `None` for strings, runes, bytes, complex numbers and any
    /// user-defined type.
    #[must_use]
    pub fn with_config(type_name: &str, arg_name: &str, config: &HelperConfig) -> Option<Self> {
        let builtin = BuiltinType::from_name(type_name)?;
        let (kind, bits) = match builtin.base_type() {
            BaseType::Int => (
                ParserKind::Int,
                Some(builtin.bits().unwrap_or(config.int_bits())),
            ),
            BaseType::Uint => {
                let unsized_bits = if builtin == BuiltinType::Uintptr {
                    config.ptr_bits()
                } else {
                    config.int_bits()
                };
                (ParserKind::Uint, Some(builtin.bits().unwrap_or(unsized_bits)))
            }
            BaseType::Float => (ParserKind::Float, builtin.bits()),
            BaseType::Other(_) if builtin == BuiltinType::Bool => (ParserKind::Bool, None),
            BaseType::Other(_) => return None,
        };

        let source = format!(
            "{}{}",
            prefixed_var_name(config.prefix(), arg_name),
            config.suffix()
        );

        Some(Self { kind, bits, source })
    }
}

impl fmt::Display for ParseCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let func = self.kind.function();
        match (self.kind, self.bits) {
            (ParserKind::Int | ParserKind::Uint, Some(bits)) => {
                write!(f, "{}({}, {}, {})", func, self.source, INT_BASE, bits)
            }
            (ParserKind::Float, Some(bits)) => write!(f, "{}({}, {})", func, self.source, bits),
            _ => write!(f, "{}({})", func, self.source),
        }
    }
}

/// Returns the parse expression for a field, or an empty string when the
/// type cannot be parsed from a string.
#[must_use]
pub fn parse_func(type_name: &str, arg_name: &str) -> String {
    ParseCall::for_type(type_name, arg_name)
        .map(|call| call.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_func_unsized_int() {
        assert_eq!(
            parse_func("int", "id"),
            "strconv.ParseInt(_recIdStr, 10, 32)"
        );
    }

    #[test]
    fn test_parse_func_sized_int() {
        assert_eq!(
            parse_func("int8", "count"),
            "strconv.ParseInt(_recCountStr, 10, 8)"
        );
        assert_eq!(
            parse_func("int64", "Total"),
            "strconv.ParseInt(_recTotalStr, 10, 64)"
        );
    }

    #[test]
    fn test_parse_func_unsigned() {
        assert_eq!(
            parse_func("uint", "size"),
            "strconv.ParseUint(_recSizeStr, 10, 32)"
        );
        assert_eq!(
            parse_func("uint16", "port"),
            "strconv.ParseUint(_recPortStr, 10, 16)"
        );
        assert_eq!(
            parse_func("uintptr", "addr"),
            "strconv.ParseUint(_recAddrStr, 10, 64)"
        );
    }

    #[test]
    fn test_parse_func_float() {
        assert_eq!(
            parse_func("float32", "price"),
            "strconv.ParseFloat(_recPriceStr, 32)"
        );
        assert_eq!(
            parse_func("float64", "ratio"),
            "strconv.ParseFloat(_recRatioStr, 64)"
        );
    }

    #[test]
    fn test_parse_func_bool() {
        assert_eq!(
            parse_func("bool", "enabled"),
            "strconv.ParseBool(_recEnabledStr)"
        );
    }

    #[test]
    fn test_parse_func_unsupported() {
        for name in ["string", "rune", "byte", "complex64", "complex128", "Order", ""] {
            assert_eq!(parse_func(name, "name"), "", "{name}");
        }
    }

    #[test]
    fn test_parse_call_structure() {
        let call = ParseCall::for_type("int16", "Level").unwrap();
        assert_eq!(call.kind, ParserKind::Int);
        assert_eq!(call.bits, Some(16));
        assert_eq!(call.source, "_recLevelStr");

        let call = ParseCall::for_type("bool", "ok").unwrap();
        assert_eq!(call.kind, ParserKind::Bool);
        assert_eq!(call.bits, None);

        assert!(ParseCall::for_type("string", "name").is_none());
    }

    #[test]
    fn test_parse_call_with_config() {
        let config = HelperConfig::new()
            .var_prefix("_in")
            .source_suffix("Raw")
            .default_int_bits(64);

        let call = ParseCall::with_config("int", "id", &config).unwrap();
        assert_eq!(call.to_string(), "strconv.ParseInt(_inIdRaw, 10, 64)");

        let call = ParseCall::with_config("uint8", "id", &config).unwrap();
        assert_eq!(call.to_string(), "strconv.ParseUint(_inIdRaw, 10, 8)");
    }

    #[test]
    fn test_parse_call_empty_arg() {
        assert_eq!(parse_func("int32", ""), "strconv.ParseInt(_recStr, 10, 32)");
    }

    #[test]
    fn test_parser_kind_function() {
        assert_eq!(ParserKind::Int.function(), "strconv.ParseInt");
        assert_eq!(ParserKind::Uint.function(), "strconv.ParseUint");
        assert_eq!(ParserKind::Float.function(), "strconv.ParseFloat");
        assert_eq!(ParserKind::Bool.function(), "strconv.ParseBool");
    }
}
