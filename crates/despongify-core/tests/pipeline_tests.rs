//! Integration tests for the full rewrite pipeline — exercises every pass
//! combination through the public API only, never calling passes directly.

use despongify_core::{transform, RewriteRule, RuleSet, TransformOptions, Transformer};
use pretty_assertions::assert_eq;

fn options() -> TransformOptions {
    TransformOptions::default()
}

// ── License handling ────────────────────────────────────────────────────────

#[test]
fn test_license_removed_and_package_rewritten() {
    let opts = TransformOptions {
        remove_license: true,
        package_replace: "com.example".to_string(),
        ..options()
    };
    let out = transform("/* license */\npackage org.spongepowered.api.foo;\n", &opts).unwrap();
    assert_eq!(out, "package com.example.foo;\n");
}

#[test]
fn test_license_restored_verbatim_when_removal_is_off() {
    let opts = TransformOptions {
        remove_license: false,
        package_replace: "com.example".to_string(),
        ..options()
    };
    let out = transform("/* license */\npackage org.spongepowered.api.foo;\n", &opts).unwrap();
    assert_eq!(out, "/* license */\npackage com.example.foo;\n");
}

#[test]
fn test_no_leading_comment_means_nothing_to_remove() {
    let opts = TransformOptions {
        package_replace: String::new(),
        ..options()
    };
    let src = "package a.b;\n\n/* interior comment */\nclass A {}\n";
    assert_eq!(transform(src, &opts).unwrap(), src);
}

#[test]
fn test_license_removal_is_idempotent() {
    let opts = TransformOptions {
        package_replace: String::new(),
        ..options()
    };
    let once = transform("/*\n * license\n */\nclass A {}\n", &opts).unwrap();
    let twice = transform(&once, &opts).unwrap();
    assert_eq!(once, twice);
}

// ── Package replacement ─────────────────────────────────────────────────────

#[test]
fn test_empty_package_replace_leaves_identifier_alone() {
    let opts = TransformOptions {
        package_replace: String::new(),
        ..options()
    };
    let src = "import org.spongepowered.api.Game;\n";
    assert_eq!(transform(src, &opts).unwrap(), src);
}

#[test]
fn test_default_options_only_rewrite_the_package() {
    // Every optional switch is off by default; the only change a default run
    // makes (besides license stripping) is the fixed package substitution.
    let src = "/* hdr */\nimport org.spongepowered.api.Game;\n//doc\nText t = Text.of(1);\n";
    let out = transform(src, &options()).unwrap();
    assert_eq!(
        out,
        "import com.github.mikucat0309.Game;\n//doc\nText t = Text.of(1);\n"
    );
}

// ── Optional passes ─────────────────────────────────────────────────────────

#[test]
fn test_javadoc_and_comment_removal_together() {
    let opts = TransformOptions {
        javadoc_remove: true,
        comment_remove: true,
        package_replace: String::new(),
        ..options()
    };
    let src = "package a;\n/** doc */\nvoid a(); /* note */\n";
    assert_eq!(transform(src, &opts).unwrap(), "package a;\n\nvoid a(); \n");
}

#[test]
fn test_string_replace_full_file() {
    let opts = TransformOptions {
        string_replace: true,
        package_replace: String::new(),
        ..options()
    };
    let src = "import org.spongepowered.api.text.Text;\n\
               import org.spongepowered.api.command.CommandSource;\n\
               class Chat {\n\
               \x20   void send(CommandSource src) {\n\
               \x20       src.sendMessage(Text.of(\"hello\").toPlain());\n\
               \x20   }\n\
               }\n";
    let out = transform(src, &opts).unwrap();
    assert_eq!(
        out,
        "import org.spongepowered.api.command.CommandSource;\n\
         class Chat {\n\
         \x20   void send(CommandSource src) {\n\
         \x20       src.sendMessage(of(\"hello\"));\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn test_var_inference_full_file() {
    let opts = TransformOptions {
        local_var_type_inference: true,
        package_replace: String::new(),
        ..options()
    };
    let src = "class A {\n    final Game game = start();\n    int n = 0;\n}\n";
    let out = transform(src, &opts).unwrap();
    assert_eq!(out, "class A {\n    var game = start();\n    int n = 0;\n}\n");
}

// ── Custom rule sets via the stable constructor ─────────────────────────────

#[test]
fn test_transformer_is_reusable_across_files() {
    let transformer = Transformer::new(TransformOptions {
        package_replace: "net.example".to_string(),
        ..options()
    })
    .unwrap();
    assert_eq!(
        transformer.transform("package org.spongepowered.api.x;\n"),
        "package net.example.x;\n"
    );
    assert_eq!(
        transformer.transform("package org.spongepowered.api.y;\n"),
        "package net.example.y;\n"
    );
}

#[test]
fn test_one_time_rules_consume_a_single_occurrence() {
    let rules = RuleSet::new(
        vec![RewriteRule::new(r"once", "ONE").unwrap()],
        vec![RewriteRule::new(r"all", "ALL").unwrap()],
    );
    let transformer = Transformer::with_rules(
        TransformOptions {
            string_replace: true,
            package_replace: String::new(),
            ..options()
        },
        rules,
    )
    .unwrap();
    assert_eq!(
        transformer.transform("once all once all\n"),
        "ONE ALL once ALL\n"
    );
}
