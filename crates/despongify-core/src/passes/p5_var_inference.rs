//! Pass 5: Local Variable Type Inference
//!
//! Rewrites indented `Type name =` declarations to `var name =`, keeping the
//! indentation and the variable name. Only lines whose type starts with an
//! uppercase letter qualify, so primitives and keywords are left alone; the
//! leading-indent requirement keeps fields at column zero out of it too.

use regex::Regex;

use crate::error::TransformError;

const DECLARATION_PATTERN: &str =
    r"(?m)^(?P<indent>[\t ]+)(?:final )?[A-Z][\w.<>?*]+[\t ]+(?P<name>\w+)[\t ]+=";

pub(crate) struct VarInferencePass {
    declaration: Regex,
}

impl VarInferencePass {
    pub(crate) fn new() -> Result<Self, TransformError> {
        Ok(Self {
            declaration: Regex::new(DECLARATION_PATTERN)?,
        })
    }

    pub(crate) fn apply(&self, text: String) -> String {
        if self.declaration.is_match(&text) {
            self.declaration
                .replace_all(&text, "${indent}var ${name} =")
                .into_owned()
        } else {
            text
        }
    }
}

// ===========================================================================
