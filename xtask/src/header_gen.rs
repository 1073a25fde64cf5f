// Licensed under the Apache-2.0 license

//! Command to generate the C register header from description files.

use anyhow::Result;
use macregs_generator::{generate_header_to_file, GeneratorConfig};
use std::path::{Path, PathBuf};

/// Generate `output` from the ordered list of description files.
pub fn generate(inputs: &[PathBuf], output: &Path, guard: &str, keep_context: bool) -> Result<()> {
    for input in inputs {
        println!("Reading register descriptions from: {}", input.display());
    }

    let config = GeneratorConfig::with_defaults()
        .guard(guard)
        .reset_context(!keep_context);

    generate_header_to_file(output, inputs, &config)?;
    println!("Output written to: {}", output.display());
    Ok(())
}
