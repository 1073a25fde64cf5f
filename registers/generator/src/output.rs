// Licensed under the Apache-2.0 license

//! C macro and comment formatting.
//!
//! Column layout matches the legacy generator's headers byte for byte: every
//! `#define` line is 86 columns wide. Register names sit in a 68-column field
//! after `#define `; field macro names are indented four further spaces and
//! sit in a 64-column field; values are right-justified in 10 columns.
//!
//! ```text
//! #define REG_INTR_ENABLE                                                          0x000
//! /* Interrupt enable for TX done of each queue */
//! #define     INTR_ENABLE_TX_DONE_MASK                                             0x3ff
//! #define     INTR_ENABLE_TX_DONE_SHIFT                                                0
//! ```

use crate::record::BitRange;
use std::fmt::Write;

/// Width of the name column in a register address `#define`.
const REG_NAME_WIDTH: usize = 68;
/// Width of the name column in a field mask/shift `#define`.
const FLD_NAME_WIDTH: usize = 64;
/// Width of the value column in both kinds of `#define`.
const VALUE_WIDTH: usize = 10;

/// Include-guard opener, emitted once at the start of a run.
pub fn guard_open(guard: &str) -> String {
    format!("#ifndef {guard}\n#define {guard}\n")
}

/// Include-guard closer. The legacy headers end without a trailing newline.
pub fn guard_close(guard: &str) -> String {
    format!("#endif /*{guard}*/")
}

/// Block comment wrapping a file description.
pub fn block_comment(text: &str) -> String {
    format!("/*\n * {text}\n */\n")
}

/// Single-line comment carrying a field description.
pub fn line_comment(text: &str) -> String {
    format!("/* {text} */\n")
}

/// Address text for a register: `0x` plus the last four characters of the
/// record value, or the whole value when it is shorter than four characters.
pub fn address_text(value: &str) -> String {
    let start = value
        .char_indices()
        .rev()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("0x{}", &value[start..])
}

/// Register address `#define` line, preceded by a blank separator line.
pub fn register_define(name: &str, addr: &str) -> String {
    format!("\n#define {name:<REG_NAME_WIDTH$}{addr:>VALUE_WIDTH$}\n")
}

/// The two-line mask/shift `#define` pair for a field.
pub fn field_macros(field: &str, bits: &BitRange) -> String {
    let mut out = String::new();
    let mask = format!("{:#x}", bits.mask());
    writeln!(
        out,
        "#define     {:<FLD_NAME_WIDTH$}{mask:>VALUE_WIDTH$}",
        format!("{field}_MASK"),
    )
    .unwrap();
    writeln!(
        out,
        "#define     {:<FLD_NAME_WIDTH$}{:>VALUE_WIDTH$}",
        format!("{field}_SHIFT"),
        bits.shift(),
    )
    .unwrap();
    out
}
