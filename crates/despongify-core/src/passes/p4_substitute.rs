//! Pass 4: Expression Substitution
//!
//! Runs a [`RuleSet`] over the working text: one-time rules rewrite only
//! their first match, general rules rewrite every match, both in list order.
//! Later rules see earlier rules' output.

use crate::rules::RuleSet;

pub(crate) fn substitute(text: String, rules: &RuleSet) -> String {
    rules.apply(&text)
}

// ===========================================================================
