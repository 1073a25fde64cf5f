// Licensed under the Apache-2.0 license

//! Generation options.
//!
//! This module provides [`GeneratorConfig`], which controls behavior that the
//! legacy tool left implicit: whether register/field context survives input
//! file boundaries, and the include-guard macro wrapped around the output.

/// Options controlling a header-generation run.
///
/// # Example
///
/// ```
/// use macregs_generator::config::GeneratorConfig;
///
/// // Defaults: context resets at file boundaries, guard is _MACREGS_H_
/// let config = GeneratorConfig::with_defaults();
/// assert!(config.reset_context_per_file);
///
/// // Legacy behavior: carry context across files, custom guard
/// let config = GeneratorConfig::with_defaults()
///     .reset_context(false)
///     .guard("_PHYREGS_H_");
/// assert_eq!(config.guard_macro, "_PHYREGS_H_");
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Clear the register/field context at each input-file boundary.
    ///
    /// The legacy tool carried context across files, so a register opened in
    /// one file silently served field records in the next. Resetting is the
    /// intended behavior and the default.
    pub reset_context_per_file: bool,

    /// Include-guard macro emitted around the generated header.
    pub guard_macro: String,
}

impl GeneratorConfig {
    /// The include-guard macro used when none is configured.
    pub const DEFAULT_GUARD: &'static str = "_MACREGS_H_";

    /// Create a config with per-file context reset and the default guard.
    pub fn with_defaults() -> Self {
        Self {
            reset_context_per_file: true,
            guard_macro: Self::DEFAULT_GUARD.to_string(),
        }
    }

    /// Set whether context resets at input-file boundaries.
    pub fn reset_context(mut self, reset: bool) -> Self {
        self.reset_context_per_file = reset;
        self
    }

    /// Use a different include-guard macro.
    pub fn guard(mut self, guard: &str) -> Self {
        self.guard_macro = guard.to_string();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}
