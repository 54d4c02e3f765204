//! Pass 3: Block Comment Removal
//!
//! Deletes every ordinary `/* ... */` block comment, non-greedy, across
//! newlines. The `[^*]` class after the opener keeps `/**` doc comments out
//! of this pass — those belong to pass 2.

use regex::Regex;

use crate::error::TransformError;

const COMMENT_PATTERN: &str = r"(?s)/\*[^*].*?\*/";

pub(crate) struct CommentPass {
    comment: Regex,
}

impl CommentPass {
    pub(crate) fn new() -> Result<Self, TransformError> {
        Ok(Self {
            comment: Regex::new(COMMENT_PATTERN)?,
        })
    }

    pub(crate) fn apply(&self, text: String) -> String {
        if self.comment.is_match(&text) {
            self.comment.replace_all(&text, "").into_owned()
        } else {
            text
        }
    }
}

// ===========================================================================
