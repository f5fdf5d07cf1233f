//! Helper configuration.

use crate::error::CodegenError;

/// Prefix applied to every synthetic variable name.
pub const DEFAULT_VAR_PREFIX: &str = "_rec";
/// Suffix naming the string-valued source variable of a parse call.
pub const DEFAULT_SOURCE_SUFFIX: &str = "Str";
/// Width used for the unsized `int` and `uint` aliases.
pub const DEFAULT_INT_BITS: u8 = 32;
/// Width used for `uintptr`.
pub const DEFAULT_POINTER_BITS: u8 = 64;

const VALID_BITS: [u8; 4] = [8, 16, 32, 64];

/// Naming and width settings shared by the template helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    var_prefix: String,
    source_suffix: String,
    default_int_bits: u8,
    pointer_bits: u8,
}

impl HelperConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            var_prefix: DEFAULT_VAR_PREFIX.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            default_int_bits: DEFAULT_INT_BITS,
            pointer_bits: DEFAULT_POINTER_BITS,
        }
    }

    /// Sets the variable name prefix.
    #[must_use]
    pub fn var_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.var_prefix = prefix.into();
        self
    }

    /// Sets the source variable suffix.
    #[must_use]
    pub fn source_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    /// Sets the width used for unsized integer aliases.
    #[must_use]
    pub fn default_int_bits(mut self, bits: u8) -> Self {
        self.default_int_bits = bits;
        self
    }

    /// Sets the width used for pointer-sized integers.
    #[must_use]
    pub fn pointer_bits(mut self, bits: u8) -> Self {
        self.pointer_bits = bits;
        self
    }

    /// Returns the variable name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.var_prefix
    }

    /// Returns the source variable suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.source_suffix
    }

    /// Returns the width used for unsized integer aliases.
    #[must_use]
    pub const fn int_bits(&self) -> u8 {
        self.default_int_bits
    }

    /// Returns the width used for pointer-sized integers.
    #[must_use]
    pub const fn ptr_bits(&self) -> u8 {
        self.pointer_bits
    }

    /// Checks that the configuration produces well-formed parse calls.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidConfig` if the source suffix is empty or
    /// a width is not one of 8, 16, 32 or 64.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if self.source_suffix.is_empty() {
            return Err(CodegenError::invalid_config(
                "source suffix must not be empty",
            ));
        }
        if !VALID_BITS.contains(&self.default_int_bits) {
            return Err(CodegenError::invalid_config(format!(
                "default integer width {} is not one of 8, 16, 32, 64",
                self.default_int_bits
            )));
        }
        if !VALID_BITS.contains(&self.pointer_bits) {
            return Err(CodegenError::invalid_config(format!(
                "pointer width {} is not one of 8, 16, 32, 64",
                self.pointer_bits
            )));
        }
        Ok(())
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self::new()
    }
}
