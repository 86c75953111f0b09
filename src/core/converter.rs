// File: src/core/converter.rs
use crate::core::grapheme::segment;
use crate::core::types::{CharacterMap, Grapheme};
use std::collections::HashMap;

const LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Shortest decorator sample: a, SEP, b, SEP, ..., y, SEP, z.
const MIN_DECORATOR_LEN: usize = 51;

/// Derives a case-aware Latin map from a sample spelling `a..z` in some glyph set.
///
/// 1. Exactly 26 graphemes: positional zip; capitals come from the upper-cased sample.
/// 2. Decorator pattern like `a★b★…z★`: every letter maps to itself plus the separator.
/// 3. Anything else: best-effort zip of the first 26 graphemes.
pub fn build_map(sample: &str) -> CharacterMap {
    let lower = segment(sample);

    if lower.len() == 26 {
        return zip_map(&lower, &segment(&sample.to_uppercase()));
    }

    if let Some(sep) = detect_separator(&lower) {
        let mut entries = HashMap::with_capacity(52);
        for &c in LETTERS.iter() {
            let upper = c.to_ascii_uppercase();
            entries.insert(c, format!("{}{}", c, sep));
            entries.insert(upper, format!("{}{}", upper, sep));
        }
        return CharacterMap::from_entries(entries);
    }

    zip_map(&lower, &segment(&sample.to_uppercase()))
}

/// Builds the lowercase half from `lower_sample` and the capitals from
/// `upper_sample`. For glyph sets with no case mapping (math alphanumerics).
pub fn build_cased_map(lower_sample: &str, upper_sample: &str) -> CharacterMap {
    let lower = build_map(lower_sample);
    let capitals = build_map(upper_sample);

    let mut entries = HashMap::with_capacity(52);
    for &c in LETTERS.iter() {
        let upper = c.to_ascii_uppercase();
        let small = lower.get(c).map_or_else(|| c.to_string(), str::to_string);
        let capital = capitals.get(c).map_or_else(|| upper.to_string(), str::to_string);
        entries.insert(c, small);
        entries.insert(upper, capital);
    }
    CharacterMap::from_entries(entries)
}

/// Look-alike table: each listed letter maps to its confusable, capitals to
/// the upper-cased confusable. Unlisted letters map to themselves.
pub fn look_alike_map(pairs: &[(char, char)]) -> CharacterMap {
    let mut entries = HashMap::with_capacity(52);
    for &c in LETTERS.iter() {
        let replacement = pairs
            .iter()
            .find(|(latin, _)| *latin == c)
            .map(|&(_, alike)| alike)
            .unwrap_or(c);
        entries.insert(c, replacement.to_string());
        entries.insert(c.to_ascii_uppercase(), replacement.to_uppercase().collect());
    }
    CharacterMap::from_entries(entries)
}

/// Detects `[a, SEP, b, SEP, …, z, (SEP)]` with one constant separator grapheme.
pub fn detect_separator(graphemes: &[Grapheme]) -> Option<Grapheme> {
    if graphemes.len() < MIN_DECORATOR_LEN || graphemes[0] != "a" {
        return None;
    }

    let mut sep: Option<&Grapheme> = None;
    for (i, &letter) in LETTERS.iter().enumerate() {
        let idx = i * 2;
        if graphemes[idx] != letter.to_string() {
            return None;
        }
        if i < 25 {
            let next = &graphemes[idx + 1];
            match sep {
                None => sep = Some(next),
                Some(s) if s != next => return None,
                Some(_) => {}
            }
        }
    }
    sep.cloned()
}

/// Substitutes every mapped code point; everything else passes through.
pub fn apply_map(text: &str, map: &CharacterMap) -> String {
    let mut result = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        match map.get(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

fn zip_map(lower: &[Grapheme], upper: &[Grapheme]) -> CharacterMap {
    let mut entries = HashMap::with_capacity(52);
    for (i, &c) in LETTERS.iter().enumerate() {
        let cap = c.to_ascii_uppercase();
        entries.insert(c, lower.get(i).cloned().unwrap_or_else(|| c.to_string()));
        entries.insert(cap, upper.get(i).cloned().unwrap_or_else(|| cap.to_string()));
    }
    CharacterMap::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabets;

    fn all_letters() -> impl Iterator<Item = char> {
        LETTERS.iter().flat_map(|&c| [c, c.to_ascii_uppercase()])
    }

    fn decorated(sep_for: impl Fn(usize) -> &'static str, trailing: bool) -> String {
        let mut s = String::new();
        for (i, &c) in LETTERS.iter().enumerate() {
            s.push(c);
            if i < 25 || trailing {
                s.push_str(sep_for(i));
            }
        }
        s
    }

    #[test]
    fn exact_sample_zips_positionally() {
        let map = build_map(alphabets::CIRCLED);
        assert_eq!(map.get('a'), Some("ⓐ"));
        assert_eq!(map.get('z'), Some("ⓩ"));
        // Circled letters have a case mapping, so capitals come for free.
        assert_eq!(map.get('A'), Some("Ⓐ"));
    }

    #[test]
    fn combining_samples_count_as_26() {
        let map = build_map(alphabets::UNDERLINE);
        assert_eq!(map.get('q'), Some("q\u{332}"));
        assert_eq!(map.get('Q'), Some("Q\u{332}"));
    }

    #[test]
    fn every_map_covers_52_letters() {
        let samples = [
            alphabets::BOLD,
            alphabets::HEARTS,
            alphabets::SUBSCRIPT,
            "short",
            "",
            "a-b-c",
        ];
        for sample in samples {
            let map = build_map(sample);
            assert_eq!(map.len(), 52, "sample {sample:?}");
            for c in all_letters() {
                assert!(map.get(c).is_some(), "missing {c} for {sample:?}");
            }
        }
    }

    #[test]
    fn decorator_pattern_appends_separator() {
        for trailing in [true, false] {
            let map = build_map(&decorated(|_| "★", trailing));
            for &c in LETTERS.iter() {
                assert_eq!(map.get(c), Some(format!("{c}★").as_str()));
                let cap = c.to_ascii_uppercase();
                assert_eq!(map.get(cap), Some(format!("{cap}★").as_str()));
            }
        }
    }

    #[test]
    fn inconsistent_separator_falls_through_to_best_effort() {
        let sample = decorated(|i| if i == 1 { "☆" } else { "★" }, true);
        assert_eq!(detect_separator(&segment(&sample)), None);

        let map = build_map(&sample);
        // Case C zips the first 26 graphemes: a ★ b ☆ c ...
        assert_eq!(map.get('a'), Some("a"));
        assert_eq!(map.get('b'), Some("★"));
        assert_eq!(map.get('d'), Some("☆"));
    }

    #[test]
    fn decorator_requires_leading_a() {
        let sample = decorated(|_| "★", true).replacen('a', "x", 1);
        assert_eq!(detect_separator(&segment(&sample)), None);
    }

    #[test]
    fn short_sample_falls_back_to_identity() {
        let map = build_map("ⓐⓑ");
        assert_eq!(map.get('a'), Some("ⓐ"));
        assert_eq!(map.get('c'), Some("c"));
        assert_eq!(map.get('Z'), Some("Z"));
    }

    #[test]
    fn cased_map_uses_explicit_capitals() {
        let map = build_cased_map(alphabets::BOLD, alphabets::BOLD_CAPITALS);
        assert_eq!(apply_map("Shivam", &map), "𝐒𝐡𝐢𝐯𝐚𝐦");
    }

    #[test]
    fn look_alikes_keep_unlisted_letters() {
        let map = look_alike_map(alphabets::LOOK_ALIKES);
        assert_eq!(map.get('a'), Some("а"));
        assert_eq!(map.get('A'), Some("А"));
        assert_eq!(map.get('l'), Some("l"));
        assert_eq!(map.get('z'), Some("z"));
    }

    #[test]
    fn apply_map_passes_non_letters_through() {
        let map = build_map(alphabets::FULL_WIDTH);
        assert_eq!(apply_map("a1 b!", &map), "ａ1 ｂ!");
        assert_eq!(apply_map("", &map), "");
    }
}
