//! Pass 2: Javadoc Removal
//!
//! Deletes every `/** ... */` documentation comment, matching non-greedily
//! from each `/**` to the nearest `*/` across newlines. Nesting is not a
//! thing in Java comments, so purely textual matching is enough.

use regex::Regex;

use crate::error::TransformError;

const JAVADOC_PATTERN: &str = r"(?s)/\*\*.*?\*/";

pub(crate) struct JavadocPass {
    javadoc: Regex,
}

impl JavadocPass {
    pub(crate) fn new() -> Result<Self, TransformError> {
        Ok(Self {
            javadoc: Regex::new(JAVADOC_PATTERN)?,
        })
    }

    pub(crate) fn apply(&self, text: String) -> String {
        if self.javadoc.is_match(&text) {
            self.javadoc.replace_all(&text, "").into_owned()
        } else {
            text
        }
    }
}

// ===========================================================================
