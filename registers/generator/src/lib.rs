// Licensed under the Apache-2.0 license

//! Register-description to C header generator.
//!
//! This crate converts line-oriented register description files (`KEY=value`
//! records naming hardware registers, their addresses, and their bit fields)
//! into a C preprocessor header containing `#define` macros for register
//! addresses and field mask/shift pairs, wrapped in an include guard.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use macregs_generator::{generate_header, generate_header_with_config, GeneratorConfig};
//!
//! // Generate a header from a description file
//! let header = generate_header(&[Path::new("mac.regs")]).unwrap();
//!
//! // Or carry register context across input files, as the legacy tool did
//! let config = GeneratorConfig::with_defaults().reset_context(false);
//! let header = generate_header_with_config(&[Path::new("mac.regs")], &config).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`record`]: Line classification into tagged records, bit-range parsing
//! - [`config`]: Generation options ([`GeneratorConfig`])
//! - [`output`]: C macro and comment formatting
//! - [`codegen`]: The line-by-line generation pass and public API

pub mod config;
pub mod output;
pub mod record;

mod codegen;

// Re-export main public API
pub use codegen::{
    generate_header, generate_header_from_str, generate_header_to_file,
    generate_header_with_config,
};
pub use config::GeneratorConfig;
pub use record::{BitRange, Record};
