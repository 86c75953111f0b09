// File: src/builder.rs
//! Custom style builder: pick a base style and one wrapper template, preview
//! the result, and save it as a recipe.

use crate::core::registry::{Registries, NO_WRAPPER_KEY};
use crate::core::types::{style_id, CustomStyleRecipe, StyleId};
use crate::core::wrappers::WrapperCategory;

/// Wrapper choices offered by the builder: a pass-through source followed by
/// every registered category.
pub fn wrapper_sources(registries: &Registries) -> Vec<WrapperCategory> {
    let mut sources = Vec::with_capacity(registries.categories().len() + 1);
    sources.push(WrapperCategory::new(NO_WRAPPER_KEY, "None", &[("", "")]));
    sources.extend(registries.categories().iter().cloned());
    sources
}

/// Pill text for each variant of `source`: the template around `Aa`.
pub fn variant_labels(source: &WrapperCategory) -> Vec<String> {
    source
        .templates
        .iter()
        .map(|t| {
            let left = if t.left.is_empty() { "⟨none⟩" } else { t.left.as_str() };
            format!("{}Aa{}", left, t.right)
        })
        .collect()
}

/// `"Custom {base} + {wrapKey} #{wrapIdx + 1}"`.
pub fn custom_name(base_name: &str, wrapper_key: &str, variant_index: usize) -> String {
    format!("Custom {} + {} #{}", base_name, wrapper_key, variant_index + 1)
}

/// Current builder picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSelection {
    pub base_index: usize,
    pub wrapper_key: String,
    pub variant_index: usize,
}

impl Default for BuilderSelection {
    fn default() -> Self {
        Self { base_index: 0, wrapper_key: NO_WRAPPER_KEY.to_string(), variant_index: 0 }
    }
}

impl BuilderSelection {
    pub fn new(base_index: usize, wrapper_key: &str, variant_index: usize) -> Self {
        Self { base_index, wrapper_key: wrapper_key.to_string(), variant_index }
    }

    /// Clamped to the registered base styles.
    pub fn select_base(&mut self, index: usize, registries: &Registries) {
        let last = registries.base_styles().len().saturating_sub(1);
        self.base_index = index.min(last);
    }

    pub fn next_base(&mut self, registries: &Registries) {
        self.select_base(self.base_index + 1, registries);
    }

    pub fn previous_base(&mut self, registries: &Registries) {
        self.select_base(self.base_index.saturating_sub(1), registries);
    }

    /// Switching category starts again at its first variant.
    pub fn select_wrapper(&mut self, key: &str) {
        self.wrapper_key = key.to_string();
        self.variant_index = 0;
    }

    pub fn select_variant(&mut self, index: usize) {
        self.variant_index = index;
    }

    /// Name of the style this selection saves as. A stale base index names the
    /// first base style, matching what `preview` renders.
    pub fn name(&self, registries: &Registries) -> String {
        let base_name = registries
            .base(self.base_index)
            .or_else(|| registries.base_styles().first())
            .map_or("", |b| b.name.as_str());
        custom_name(base_name, &self.wrapper_key, self.variant_index)
    }

    pub fn id(&self, registries: &Registries) -> StyleId {
        style_id(&self.name(registries))
    }

    pub fn recipe(&self, registries: &Registries) -> CustomStyleRecipe {
        CustomStyleRecipe {
            name: self.name(registries),
            base_index: self.base_index,
            wrapper_category_key: self.wrapper_key.clone(),
            wrapper_variant_index: self.variant_index,
        }
    }

    /// The composed style on `input`, or on `placeholder` when input is empty.
    pub fn preview(&self, registries: &Registries, input: &str, placeholder: &str) -> String {
        let text = if input.is_empty() { placeholder } else { input };
        match registries.resolve(&self.recipe(registries)) {
            Some((base, wrapper)) => wrapper.apply(&base.apply(text)),
            None => text.to_string(),
        }
    }
}

/// Every base style rendered on the input, in registry order, as
/// `(name, rendered)` for the picker strip.
pub fn base_strip(registries: &Registries, input: &str, placeholder: &str) -> Vec<(String, String)> {
    let text = if input.is_empty() { placeholder } else { input };
    registries
        .base_styles()
        .iter()
        .map(|base| (base.name.clone(), base.apply(text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wrappers::WrapperPlan;

    fn registries() -> Registries {
        Registries::with_plan(&WrapperPlan { repeats: vec![], pairs: vec![] })
    }

    #[test]
    fn sources_start_with_none() {
        let reg = registries();
        let sources = wrapper_sources(&reg);
        let labels: Vec<&str> = sources.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["None", "Kaomoji", "Lenny", "Emoji", "Boxes", "Lines", "Ornate", "Arrows", "Themes"]
        );
        assert_eq!(sources[0].templates.len(), 1);
        assert_eq!(variant_labels(&sources[0]), vec!["⟨none⟩Aa"]);
        assert_eq!(variant_labels(&sources[4])[0], "【 Aa 】");
    }

    #[test]
    fn names_follow_the_custom_scheme() {
        let reg = registries();
        let sel = BuilderSelection::new(0, "BOX", 2);
        assert_eq!(sel.name(&reg), "Custom Bold + BOX #3");
        assert_eq!(sel.id(&reg), "out_Custom_Bold_BOX_3");
        let recipe = sel.recipe(&reg);
        assert_eq!(recipe.base_index, 0);
        assert_eq!(recipe.wrapper_category_key, "BOX");
        assert_eq!(recipe.wrapper_variant_index, 2);
    }

    #[test]
    fn changing_wrapper_resets_variant() {
        let mut sel = BuilderSelection::new(0, "BOX", 5);
        sel.select_wrapper("EMOJI");
        assert_eq!(sel, BuilderSelection::new(0, "EMOJI", 0));
    }

    #[test]
    fn base_navigation_clamps() {
        let reg = registries();
        let mut sel = BuilderSelection::default();
        sel.previous_base(&reg);
        assert_eq!(sel.base_index, 0);
        sel.select_base(10_000, &reg);
        assert_eq!(sel.base_index, reg.base_styles().len() - 1);
        sel.next_base(&reg);
        assert_eq!(sel.base_index, reg.base_styles().len() - 1);
    }

    #[test]
    fn preview_uses_placeholder_for_empty_input() {
        let reg = registries();
        let sel = BuilderSelection::new(11, "BOX", 0);
        assert_eq!(sel.preview(&reg, "hi", "x"), "【 h i 】");
        assert_eq!(sel.preview(&reg, "", "ok"), "【 o k 】");
        assert_eq!(BuilderSelection::default().preview(&reg, "", ""), "");
    }

    #[test]
    fn out_of_range_variant_previews_unwrapped() {
        let reg = registries();
        let sel = BuilderSelection::new(11, "BOX", 999);
        assert_eq!(sel.preview(&reg, "hi", "x"), "h i");
    }

    #[test]
    fn strip_covers_every_base_style() {
        let reg = registries();
        let strip = base_strip(&reg, "", "ab");
        assert_eq!(strip.len(), reg.base_styles().len());
        assert_eq!(strip[0], ("Bold".to_string(), "𝐚𝐛".to_string()));
        assert_eq!(strip[11], ("Spaced".to_string(), "a b".to_string()));
    }
}
