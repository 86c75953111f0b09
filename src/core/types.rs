// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::core::converter::apply_map;
use crate::core::grapheme::segment;

/// One user-perceived character: a base code point plus trailing combining marks.
pub type Grapheme = String;

/// Identifier derived from a style's display name. Keys the liked set and the
/// rendered-output map handed to the UI.
pub type StyleId = String;

/// Semantic category attached to a canonical style.
pub type Tag = &'static str;

/// Case-aware substitution table for the 52 Latin letters.
/// Every letter has an entry; letters the sample could not supply map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, Grapheme>,
}

impl CharacterMap {
    pub(crate) fn from_entries(entries: HashMap<char, Grapheme>) -> Self {
        Self { entries }
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How a base style rewrites text. Kept as data so styles can be compared,
/// listed and rebuilt from recipes without invoking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// Per-letter substitution through an alphabet map.
    Substitute(CharacterMap),
    /// Lower-case the input first, for alphabets that only read one way.
    LowercaseSubstitute(CharacterMap),
    /// Single ASCII space between graphemes.
    Spaced,
    /// Curated table of visually similar non-Latin letters.
    LookAlike(CharacterMap),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStyle {
    pub name: String,
    pub transform: Transform,
}

impl BaseStyle {
    pub fn new(name: &str, transform: Transform) -> Self {
        Self { name: name.to_string(), transform }
    }

    /// Pure: deterministic, no wrapping, `""` stays `""`.
    pub fn apply(&self, text: &str) -> String {
        match &self.transform {
            Transform::Substitute(map) | Transform::LookAlike(map) => apply_map(text, map),
            Transform::LowercaseSubstitute(map) => apply_map(&text.to_lowercase(), map),
            Transform::Spaced => segment(text).join(" "),
        }
    }
}

/// Decorative left/right pair placed around already transformed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WrapperTemplate {
    pub left: String,
    pub right: String,
}

impl WrapperTemplate {
    pub fn new(left: &str, right: &str) -> Self {
        Self { left: left.to_string(), right: right.to_string() }
    }

    /// Pass-through template.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Nests `inner` inside `outer`:
    /// `outer.left + inner.left + text + inner.right + outer.right`.
    pub fn compose(outer: &WrapperTemplate, inner: &WrapperTemplate) -> Self {
        Self {
            left: format!("{}{}", outer.left, inner.left),
            right: format!("{}{}", inner.right, outer.right),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.left.len() + text.len() + self.right.len());
        out.push_str(&self.left);
        out.push_str(text);
        out.push_str(&self.right);
        out
    }
}

/// Where a generation-time wrapper came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperOrigin {
    Identity,
    Frame { category: String, variant: usize },
    Paired { outer: (String, usize), inner: (String, usize) },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub template: WrapperTemplate,
    pub origin: WrapperOrigin,
}

/// A deduplicated, tagged, catalog-eligible style.
#[derive(Debug, Clone)]
pub struct CanonicalStyle {
    pub name: String,
    pub base_name: String,
    pub base: Arc<BaseStyle>,
    pub wrapper: WrapperTemplate,
    pub preview_a: String,
    pub preview_b: String,
    pub tags: BTreeSet<Tag>,
}

impl CanonicalStyle {
    pub fn render(&self, text: &str) -> String {
        self.wrapper.apply(&self.base.apply(text))
    }

    pub fn id(&self) -> StyleId {
        style_id(&self.name)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Serializable pointer into the registries, enough to rebuild a custom style.
/// Field names match the persisted `customStylesV1` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomStyleRecipe {
    pub name: String,
    #[serde(rename = "baseIdx", alias = "baseIndex")]
    pub base_index: usize,
    #[serde(rename = "wrapKey", alias = "wrapperCategoryKey")]
    pub wrapper_category_key: String,
    #[serde(rename = "wrapIdx", alias = "wrapperVariantIndex")]
    pub wrapper_variant_index: usize,
}

/// Index kept for a stored recipe whose index was missing or not a valid
/// position. It never names a registry entry, so resolution falls back.
pub const DRIFTED_INDEX: usize = usize::MAX;

/// `out_` + the name with every run of non-alphanumerics collapsed to `_`.
/// Names differing only in punctuation collide; persisted liked sets depend on
/// this exact scheme.
pub fn style_id(name: &str) -> StyleId {
    let mut id = String::with_capacity(name.len() + 4);
    id.push_str("out_");
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
            in_run = false;
        } else if !in_run {
            id.push('_');
            in_run = true;
        }
    }
    id
}
