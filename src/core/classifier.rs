// File: src/core/classifier.rs
//! Content-based tagging. Rules are independent and non-exclusive: every rule
//! that matches contributes its tags, and a style may carry many.

use crate::core::types::Tag;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

struct Rule {
    pattern: Regex,
    tags: &'static [Tag],
}

fn rule(pattern: &str, tags: &'static [Tag]) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("classifier rule pattern is valid"),
        tags,
    }
}

/// Tested against `preview_a + " " + preview_b`.
static PREVIEW_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"[╾╤━]|デ|︻|╚|╔", &["gun", "weapons"]),
        rule(r"[♥❤💖♡]", &["love", "sexy"]),
        rule(r"[☆★✷✵✺✦⭐🌟✨💫]", &["stars", "decorated"]),
        rule(r"[(（][^)]*[)）]|◍|◕|˶|＾|★‿★", &["kaomoji"]),
        rule("\u{361}°|\u{35C}|ʖ|ل", &["lenny", "kaomoji"]),
        rule(r"[【『「〔《⟦⟨〖⟪⟮]", &["boxed"]),
        rule(r"[—–━─▁▂▃▄▅▆▇⋆⎯·]", &["lines"]),
        rule(r"[➤➳➶⇢⇨↠➵]", &["arrows"]),
        rule(r"[🪐⚡🌙🌈🌊🎀🎯🪽🧊🌸🔥]", &["emoji"]),
        rule(r"꧁|༒|✧‧˚|◥", &["ornate", "decorated"]),
        rule(r"♛|♜|♝|✪|✙", &["crown", "royal"]),
    ]
});

/// Tested against the base style name.
static NAME_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)Small Caps", &["small"]),
        rule(r"(?i)Monospace", &["monospace"]),
        rule(r"(?i)Medieval", &["medieval"]),
        rule(r"(?i)Double-Struck", &["double-struck"]),
        rule(r"(?i)Circled", &["circled"]),
        rule(r"(?i)Full Width|Wide", &["wide"]),
        rule(r"Italic", &["cursive"]),
        rule(r"Bold", &["bold"]),
    ]
});

/// Script detection, tested against the previews after the name rules.
static SCRIPT_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)[яцд]", &["russian"]),
        rule(r"[卂丂丨]", &["asian"]),
        rule(r"(?i)[ѕԁκτρ]", &["mixed-script"]),
    ]
});

static PLAIN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("PLAIN_TEXT regex pattern is valid"));

/// Tags for a style whose combined probe rendering is `combined`.
pub fn classify(combined: &str, base_name: &str) -> BTreeSet<Tag> {
    let mut tags = BTreeSet::new();

    let mut add = |rules: &[Rule], text: &str| {
        for r in rules {
            if r.pattern.is_match(text) {
                tags.extend(r.tags.iter().copied());
            }
        }
    };
    add(PREVIEW_RULES.as_slice(), combined);
    add(NAME_RULES.as_slice(), base_name);
    add(SCRIPT_RULES.as_slice(), combined);

    if !PLAIN_TEXT.is_match(combined) {
        tags.insert("decorated");
    }
    if tags.contains("emoji") || tags.contains("kaomoji") {
        tags.insert("cute");
    }
    if tags.contains("weapons") || tags.contains("arrows") {
        tags.insert("attitude");
    }

    tags
}
