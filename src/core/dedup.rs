// File: src/core/dedup.rs
use crate::core::classifier::classify;
use crate::core::generator::CandidateStyle;
use crate::core::types::CanonicalStyle;
use std::collections::HashSet;
use std::sync::Arc;

/// The two fixed strings every candidate is rendered on to decide identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probes {
    pub a: String,
    pub b: String,
}

impl Probes {
    pub fn new(a: &str, b: &str) -> Self {
        Self { a: a.to_string(), b: b.to_string() }
    }
}

impl Default for Probes {
    fn default() -> Self {
        Self::new("Shivam", "instagram")
    }
}

/// Keeps the first candidate for each distinct `(preview_a, preview_b)` pair,
/// in input order, and tags the survivors.
pub fn dedupe<'r>(
    candidates: impl IntoIterator<Item = CandidateStyle<'r>>,
    probes: &Probes,
) -> Vec<CanonicalStyle> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::new();

    for candidate in candidates {
        let preview_a = candidate.render(&probes.a);
        let preview_b = candidate.render(&probes.b);
        if seen.contains(&(preview_a.clone(), preview_b.clone())) {
            continue;
        }
        seen.insert((preview_a.clone(), preview_b.clone()));

        let base_name = candidate.base_name();
        let tags = classify(&format!("{} {}", preview_a, preview_b), base_name);
        out.push(CanonicalStyle {
            name: candidate.name(),
            base_name: base_name.to_string(),
            base: Arc::clone(candidate.base),
            wrapper: candidate.wrapper.template.clone(),
            preview_a,
            preview_b,
            tags,
        });
    }
    out
}
