// File: src/core/grapheme.rs
use crate::core::types::Grapheme;

/// Combining-mark blocks that attach to the preceding code point.
const COMBINING_RANGES: [(char, char); 5] = [
    ('\u{0300}', '\u{036F}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

pub fn is_combining_mark(c: char) -> bool {
    COMBINING_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Splits `s` into user-perceived units so sequences like `a̲` (base + mark)
/// stay together. No normalization is applied; marks are kept verbatim.
pub fn segment(s: &str) -> Vec<Grapheme> {
    let mut out: Vec<Grapheme> = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let mut cluster = c.to_string();
        while let Some(&next) = chars.peek() {
            if !is_combining_mark(next) {
                break;
            }
            cluster.push(next);
            chars.next();
        }
        out.push(cluster);
    }

    out
}
