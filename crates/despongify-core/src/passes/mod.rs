//! Rewrite pass modules.
//!
//! Each pass is a self-contained textual transformation over one file's
//! working text. Passes are executed in order (0-5) and each assumes the
//! output of previous passes; the orchestrator in `lib.rs` gates every
//! optional pass on its [`TransformOptions`](crate::TransformOptions) switch.

pub mod p0_license;
pub mod p1_package;
pub mod p2_javadoc;
pub mod p3_comments;
pub mod p4_substitute;
pub mod p5_var_inference;
