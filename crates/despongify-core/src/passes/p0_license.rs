//! Pass 0: License Header Capture
//!
//! Splits a leading license block comment off the working text. The header
//! shape is a run of whitespace followed by `/* ... */` matched in dotall
//! mode with a greedy body, so the capture spans to the last ` */` terminator
//! line that still lets the whole pattern match from position 0.
//!
//! The pass always strips a matching header; whether it is discarded or
//! prepended back after the other passes is the orchestrator's call
//! (`remove-license`).

use regex::Regex;

use crate::error::TransformError;

/// Leading-whitespace + block-comment prefix, greedy across newlines.
const HEADER_PATTERN: &str = r"(?s)\A\s*/\*.* \*/\n";

pub(crate) struct LicensePass {
    header: Regex,
}

impl LicensePass {
    pub(crate) fn new() -> Result<Self, TransformError> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
        })
    }

    /// Split `text` into `(header, rest)`. Files that do not open with a
    /// block comment come back unchanged with no header.
    pub(crate) fn split<'a>(&self, text: &'a str) -> (Option<&'a str>, &'a str) {
        match self.header.find(text) {
            Some(m) => (Some(m.as_str()), &text[m.end()..]),
            None => (None, text),
        }
    }
}

// ===========================================================================
