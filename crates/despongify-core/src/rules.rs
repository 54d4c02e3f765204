//! Rewrite rules as data.
//!
//! A [`RewriteRule`] is a compiled pattern plus a replacement template
//! (`${name}` references named capture groups). Rules live in two ordered
//! lists: one-time rules rewrite only their first match per file, general
//! rules rewrite every match. Application is sequential — each rule operates
//! on the output of the rules before it.

use regex::Regex;

use crate::error::TransformError;

/// A single (pattern, replacement template) pair.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    /// Compile a rule from a pattern and a replacement template.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, TransformError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Rewrite only the first match, leaving later matches untouched.
    pub fn apply_first(&self, text: &str) -> String {
        self.pattern
            .replacen(text, 1, self.replacement.as_str())
            .into_owned()
    }

    /// Rewrite every match.
    pub fn apply_all(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// An ordered rule collection: one-time rules followed by general rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    /// Rules applied to at most one occurrence per file.
    pub one_time: Vec<RewriteRule>,
    /// Rules applied to every occurrence.
    pub general: Vec<RewriteRule>,
}

// The `regex` crate has no lookaround, so "any subpackage except `command`"
// is spelled out as a prefix-negation alternation over the next characters.
const NOT_COMMAND: &str = r"(?:[^c\n]|c[^o\n]|co[^m\n]|com[^m\n]|comm[^a\n]|comma[^n\n]|comman[^d\n])";

impl RuleSet {
    /// Build a rule set from two pre-ordered lists.
    pub fn new(one_time: Vec<RewriteRule>, general: Vec<RewriteRule>) -> Self {
        Self { one_time, general }
    }

    /// The built-in rules that turn SpongeAPI `Text` expressions into plain
    /// Java string handling.
    pub fn sponge_text_dsl() -> Result<Self, TransformError> {
        let one_time = vec![
            // Drop the first SpongeAPI import, except the command subpackage.
            RewriteRule::new(
                &format!(r"import org\.spongepowered\.api\.{NOT_COMMAND}[^\n]*\n"),
                "",
            )?,
            RewriteRule::new(
                r"import static org\.spongepowered\.api\.util\.SpongeApiTranslationHelper\.t;\n",
                "",
            )?,
            RewriteRule::new(r"TestPlainTextSerializer\.inject\(\);\n", "")?,
        ];
        let general = vec![
            RewriteRule::new(r"Text\.builder\(\)", "new StringBuilder()")?,
            RewriteRule::new(r"Text\.EMPTY", "\"\"")?,
            RewriteRule::new(r"Text\.NEW_LINE", "\n")?,
            RewriteRule::new(r"Text\.of", "of")?,
            RewriteRule::new(r"\.toPlain\(\)", "")?,
            RewriteRule::new(r"\.getText\(\)", ".getMessage()")?,
            RewriteRule::new(r"(?P<prefix>[\s(])t\(", "${prefix}String.format(")?,
            RewriteRule::new(
                r"(?P<prefix>[\s<(])Text(?P<suffix>[\s>)])",
                "${prefix}String${suffix}",
            )?,
        ];
        Ok(Self::new(one_time, general))
    }

    /// Apply every rule in list order: one-time rules (first match each),
    /// then general rules (all matches).
    pub fn apply(&self, text: &str) -> String {
        let mut working = text.to_owned();
        for rule in &self.one_time {
            working = rule.apply_first(&working);
        }
        for rule in &self.general {
            working = rule.apply_all(&working);
        }
        working
    }
}

// ===========================================================================
