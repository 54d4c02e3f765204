//! Configuration for the rewrite pipeline.

use serde::{Deserialize, Serialize};

/// The fully-qualified package identifier every rewrite targets.
pub const SOURCE_PACKAGE: &str = "org.spongepowered.api";

/// Options for a batch rewrite run.
///
/// Every field maps to one pipeline stage; a disabled switch turns its stage
/// into a no-op. The struct is immutable once handed to a
/// [`Transformer`](crate::Transformer) — there is no process-wide mutable
/// configuration.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `remove-license`,
/// `package-replace`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransformOptions {
    /// Discard the leading license block comment instead of restoring it
    /// after the other stages have run. Default: true.
    pub remove_license: bool,
    /// Apply the text-DSL rewrite rules (one-time rules first, then general
    /// rules). Default: false.
    pub string_replace: bool,
    /// Rewrite indented `Type name =` declarations to `var name =`.
    /// Default: false.
    pub local_var_type_inference: bool,
    /// Delete every `/** ... */` documentation comment. Default: false.
    pub javadoc_remove: bool,
    /// Delete every ordinary `/* ... */` block comment (doc comments
    /// excluded). Default: false.
    pub comment_remove: bool,
    /// Replacement for [`SOURCE_PACKAGE`]. Must be a non-blank dotted
    /// identifier (`[\w.]+`); anything else disables the package stage.
    pub package_replace: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            remove_license: true,
            string_replace: false,
            local_var_type_inference: false,
            javadoc_remove: false,
            comment_remove: false,
            package_replace: "com.github.mikucat0309".to_string(),
        }
    }
}
