//! Pass 1: Package Identifier Replacement
//!
//! Replaces every literal occurrence of [`SOURCE_PACKAGE`] with the
//! configured identifier. The configured value is validated once, up front:
//! empty, blank, or anything outside `[\w.]` disables the pass entirely.

use regex::Regex;
use tracing::debug;

use crate::config::SOURCE_PACKAGE;
use crate::error::TransformError;

pub(crate) struct PackagePass {
    replacement: Option<String>,
}

impl PackagePass {
    /// Validate the configured identifier; an invalid one yields a no-op pass.
    pub(crate) fn new(configured: &str) -> Result<Self, TransformError> {
        let dotted_identifier = Regex::new(r"^[\w.]+$")?;
        let replacement = if !configured.trim().is_empty() && dotted_identifier.is_match(configured)
        {
            Some(configured.to_string())
        } else {
            if !configured.is_empty() {
                debug!(configured, "package-replace is not a dotted identifier, skipping");
            }
            None
        };
        Ok(Self { replacement })
    }

    pub(crate) fn apply(&self, text: String) -> String {
        match &self.replacement {
            Some(replacement) if text.contains(SOURCE_PACKAGE) => {
                text.replace(SOURCE_PACKAGE, replacement)
            }
            _ => text,
        }
    }
}

// ===========================================================================
