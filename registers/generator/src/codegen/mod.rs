// Licensed under the Apache-2.0 license

//! The line-by-line generation pass.
//!
//! The pass walks each input file in order, classifies every line into a
//! [`Record`], and appends formatted C text to one shared output stream.
//! Register and field name records only update the running context. A
//! `FLD_BITS` record builds the field's mask/shift pair but holds it back,
//! so that the field's trailing `FLD_DESC` comments land above the macros
//! the way the legacy headers read; the first line that is neither
//! `FLD_BITS` nor `FLD_DESC` releases it. End of file releases it
//! unconditionally, so a file whose last data line is a `FLD_BITS` record
//! still gets its macros (the legacy tool dropped them).

use anyhow::{bail, Context, Result};
use std::io::ErrorKind;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::output;
use crate::record::Record;

/// Running context threaded through the pass.
///
/// The legacy tool kept these in loosely scoped mutable variables, reusing
/// the field-name variable as its file-loop variable; here each piece of
/// state has its own slot and is reset according to
/// [`GeneratorConfig::reset_context_per_file`].
#[derive(Clone, Debug, Default)]
struct ParserState {
    /// Uppercased name of the register block being described.
    register: Option<String>,
    /// Derived macro name of the field being described.
    field: Option<String>,
    /// Mask/shift text awaiting the field's trailing description comments.
    pending: Option<String>,
}

impl ParserState {
    fn reset(&mut self) {
        *self = ParserState::default();
    }

    /// Append and clear the pending mask/shift text, if any.
    fn flush_pending(&mut self, out: &mut String) {
        if let Some(text) = self.pending.take() {
            out.push_str(&text);
        }
    }

    /// Handle one classified line, appending any output it produces.
    fn apply(&mut self, record: &Record, out: &mut String) -> Result<()> {
        match record {
            Record::FileDesc(text) => out.push_str(&output::block_comment(text)),
            Record::RegName(name) => {
                self.register = Some(name.to_uppercase());
            }
            Record::RegAddr(value) => {
                let Some(register) = &self.register else {
                    bail!("register address record with no preceding register name");
                };
                let addr = output::address_text(value);
                out.push_str(&output::register_define(register, &addr));
            }
            Record::FldName(name) => {
                let Some(register) = &self.register else {
                    bail!("field name record with no preceding register name");
                };
                // Field macros drop the register's fixed four-character
                // prefix: REG_INTR_ENABLE carries INTR_ENABLE_* fields.
                let Some(stem) = register.get(4..) else {
                    bail!("register name {register:?} is too short to carry a field prefix");
                };
                self.field = Some(format!("{stem}_{}", name.to_uppercase()));
            }
            Record::FldBits(bits) => {
                let Some(field) = &self.field else {
                    bail!("field bits record with no preceding field name");
                };
                self.pending = Some(output::field_macros(field, bits));
            }
            Record::FldDesc(text) => out.push_str(&output::line_comment(text)),
            Record::End => {}
        }
        Ok(())
    }

    /// Process one file's worth of description text.
    fn process_text(&mut self, text: &str, out: &mut String) -> Result<()> {
        for line in text.lines() {
            let record = Record::classify(line)?;
            if let Some(record) = &record {
                self.apply(record, out)?;
            }
            // Every line other than FLD_BITS/FLD_DESC releases the held
            // mask/shift pair; unmarked lines count too.
            if !record.as_ref().is_some_and(Record::defers_flush) {
                self.flush_pending(out);
            }
        }
        self.flush_pending(out);
        Ok(())
    }
}

/// Generate a header from the given description files with default options.
pub fn generate_header<P: AsRef<Path>>(inputs: &[P]) -> Result<String> {
    generate_header_with_config(inputs, &GeneratorConfig::with_defaults())
}

/// Generate a header from the given description files.
///
/// The files are processed strictly in order into one output stream. A
/// missing input file is reported and skipped and the run continues with the
/// remaining files; any malformed record aborts the run with an error, and
/// no output is produced.
pub fn generate_header_with_config<P: AsRef<Path>>(
    inputs: &[P],
    config: &GeneratorConfig,
) -> Result<String> {
    let mut out = output::guard_open(&config.guard_macro);
    let mut state = ParserState::default();

    for input in inputs {
        let input = input.as_ref();
        if config.reset_context_per_file {
            state.reset();
        }
        let text = match std::fs::read_to_string(input) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("input file not found, skipping: {}", input.display());
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", input.display()))
            }
        };
        state
            .process_text(&text, &mut out)
            .with_context(|| format!("in {}", input.display()))?;
    }

    out.push_str(&output::guard_close(&config.guard_macro));
    Ok(out)
}

/// Generate a header from one in-memory description.
///
/// Behaves like [`generate_header_with_config`] over a single already-read
/// file; useful for tests and tooling.
pub fn generate_header_from_str(input: &str, config: &GeneratorConfig) -> Result<String> {
    let mut out = output::guard_open(&config.guard_macro);
    let mut state = ParserState::default();
    state.process_text(input, &mut out)?;
    out.push_str(&output::guard_close(&config.guard_macro));
    Ok(out)
}

/// Generate a header and write it to `output_path`.
pub fn generate_header_to_file<P: AsRef<Path>>(
    output_path: &Path,
    inputs: &[P],
    config: &GeneratorConfig,
) -> Result<()> {
    let header = generate_header_with_config(inputs, config)?;
    std::fs::write(output_path, &header)
        .with_context(|| format!("failed to write {}", output_path.display()))
}
