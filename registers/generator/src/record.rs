// Licensed under the Apache-2.0 license

//! Line classification for register description files.
//!
//! Description files carry one logical record per line, identified by a fixed
//! leading marker token (`REG_NAME`, `FLD_BITS`, ...). The record's value is
//! everything after the first `=` on the line, trimmed. Lines starting with
//! no marker carry no record at all and produce no output.

use anyhow::{Context, Result};

/// A contiguous range of bits within a register, written `[high:low]`.
///
/// Bit positions are zero-based from the low end of the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRange {
    /// Highest bit position in the field, inclusive.
    pub high: u32,
    /// Lowest bit position in the field, inclusive.
    pub low: u32,
}

impl BitRange {
    /// Parse a bit range of the form `[high:low]` or `high:low`.
    ///
    /// The brackets are optional and both bounds are decimal integers.
    pub fn parse(value: &str) -> Result<Self> {
        let inner = value.trim().trim_start_matches('[').trim_end_matches(']');
        let (high, low) = inner
            .split_once(':')
            .with_context(|| format!("bit range {value:?} is missing a ':' separator"))?;
        let high = high
            .trim()
            .parse()
            .with_context(|| format!("bad high bound in bit range {value:?}"))?;
        let low = low
            .trim()
            .parse()
            .with_context(|| format!("bad low bound in bit range {value:?}"))?;
        Ok(BitRange { high, low })
    }

    /// The mask selecting bits `low..=high`.
    ///
    /// An inverted range selects no bits and yields an empty mask, matching
    /// the legacy generator's loop over an empty range.
    pub fn mask(&self) -> u64 {
        if self.high < self.low {
            return 0;
        }
        let width = self.high - self.low + 1;
        let bits = if width >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        bits << self.low
    }

    /// The right-shift amount aligning the field to bit 0.
    pub fn shift(&self) -> u32 {
        self.low
    }
}

/// A classified description-file line.
///
/// The variants mirror the six record markers plus the `/// end` block
/// terminator. Classification tests the markers in a fixed order, so a line
/// matches at most one variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// `FILE_DESC=`: a description of the whole register file.
    FileDesc(String),
    /// `REG_NAME=`: opens a register block.
    RegName(String),
    /// `REG_ADDR=`: the current register's address.
    RegAddr(String),
    /// `FLD_NAME=`: opens a bit field within the current register.
    FldName(String),
    /// `FLD_BITS=`: the current field's bit range.
    FldBits(BitRange),
    /// `FLD_DESC=`: a description of the current field.
    FldDesc(String),
    /// `/// end`: closes a field or register block.
    End,
}

impl Record {
    /// Classify a single line by its leading marker.
    ///
    /// Lines starting with no marker classify to `None`. A `FLD_BITS` record
    /// whose value is not a well-formed bit range is an error.
    pub fn classify(line: &str) -> Result<Option<Record>> {
        // The value is everything after the first '='; a marker line without
        // one carries an empty value.
        let value = || {
            line.split_once('=')
                .map(|(_, v)| v)
                .unwrap_or("")
                .trim()
                .to_string()
        };
        let record = if line.starts_with("FILE_DESC") {
            Record::FileDesc(value())
        } else if line.starts_with("REG_NAME") {
            Record::RegName(value())
        } else if line.starts_with("REG_ADDR") {
            Record::RegAddr(value())
        } else if line.starts_with("FLD_NAME") {
            Record::FldName(value())
        } else if line.starts_with("FLD_BITS") {
            Record::FldBits(BitRange::parse(&value())?)
        } else if line.starts_with("FLD_DESC") {
            Record::FldDesc(value())
        } else if line.starts_with("/// end") {
            Record::End
        } else {
            return Ok(None);
        };
        Ok(Some(record))
    }

    /// True for the record kinds that keep a pending mask/shift pair held
    /// back instead of releasing it to the output.
    pub fn defers_flush(&self) -> bool {
        matches!(self, Record::FldBits(_) | Record::FldDesc(_))
    }
}
