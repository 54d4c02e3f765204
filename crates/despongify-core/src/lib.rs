//! despongify-core — regex-driven rewriting of Java sources away from
//! SpongeAPI.
//!
//! The whole crate is one pipeline: a [`Transformer`] takes a file's raw text
//! and produces rewritten text, applying up to six passes strictly in order:
//!
//! 0. license header capture (`passes/p0_license`)
//! 1. package identifier replacement (`passes/p1_package`)
//! 2. javadoc removal (`passes/p2_javadoc`)
//! 3. block comment removal (`passes/p3_comments`)
//! 4. text-DSL expression substitution (`passes/p4_substitute`)
//! 5. local variable type inference (`passes/p5_var_inference`)
//!
//! followed by license restoration when `remove-license` is off. Every
//! optional pass is gated by a [`TransformOptions`] switch; disabled passes
//! are exact no-ops. Transformation is purely textual — nothing here parses
//! Java, and nothing guarantees the output compiles.
//!
//! There is no I/O and no cross-file state: [`Transformer::transform`] is a
//! deterministic, infallible function of its input text. All regexes are
//! compiled once, in [`Transformer::new`].

pub mod config;
pub mod error;
mod passes;
pub mod rules;

use tracing::debug;

use passes::p0_license::LicensePass;
use passes::p1_package::PackagePass;
use passes::p2_javadoc::JavadocPass;
use passes::p3_comments::CommentPass;
use passes::p4_substitute::substitute;
use passes::p5_var_inference::VarInferencePass;

pub use config::{TransformOptions, SOURCE_PACKAGE};
pub use error::TransformError;
pub use rules::{RewriteRule, RuleSet};

/// A compiled rewrite pipeline for one immutable set of options.
pub struct Transformer {
    options: TransformOptions,
    license: LicensePass,
    package: PackagePass,
    javadoc: JavadocPass,
    comments: CommentPass,
    rules: RuleSet,
    var_inference: VarInferencePass,
}

impl Transformer {
    /// Build a transformer with the built-in SpongeAPI text-DSL rule set.
    pub fn new(options: TransformOptions) -> Result<Self, TransformError> {
        let rules = RuleSet::sponge_text_dsl()?;
        Self::with_rules(options, rules)
    }

    /// Build a transformer with a caller-supplied rule set for pass 4.
    pub fn with_rules(options: TransformOptions, rules: RuleSet) -> Result<Self, TransformError> {
        Ok(Self {
            package: PackagePass::new(&options.package_replace)?,
            license: LicensePass::new()?,
            javadoc: JavadocPass::new()?,
            comments: CommentPass::new()?,
            var_inference: VarInferencePass::new()?,
            rules,
            options,
        })
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Run the full pipeline over one file's text.
    ///
    /// The leading license header (if any) is always split off first so the
    /// other passes never see it; `remove-license` only decides whether it is
    /// discarded or prepended back at the end, byte for byte.
    pub fn transform(&self, text: &str) -> String {
        let (header, body) = self.license.split(text);
        if header.is_some() {
            debug!("captured leading license header");
        }

        let mut working = self.package.apply(body.to_owned());

        if self.options.javadoc_remove {
            debug!("removing javadoc comments");
            working = self.javadoc.apply(working);
        }
        if self.options.comment_remove {
            debug!("removing block comments");
            working = self.comments.apply(working);
        }
        if self.options.string_replace {
            debug!(
                one_time = self.rules.one_time.len(),
                general = self.rules.general.len(),
                "applying rewrite rules"
            );
            working = substitute(working, &self.rules);
        }
        if self.options.local_var_type_inference {
            debug!("rewriting local declarations to var");
            working = self.var_inference.apply(working);
        }

        if !self.options.remove_license {
            if let Some(header) = header {
                working.insert_str(0, header);
            }
        }
        working
    }
}

/// One-shot convenience: build a [`Transformer`] and run it once.
pub fn transform(text: &str, options: &TransformOptions) -> Result<String, TransformError> {
    Ok(Transformer::new(options.clone())?.transform(text))
}
