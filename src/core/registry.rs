// File: src/core/registry.rs
use crate::core::alphabets as a;
use crate::core::converter::{build_cased_map, build_map, look_alike_map};
use crate::core::types::{BaseStyle, CustomStyleRecipe, Transform, Wrapper, WrapperTemplate};
use crate::core::wrappers::{build_wrapper_list, standard_categories, WrapperCategory, WrapperPlan};
use std::sync::Arc;

/// Key of the builder's pass-through wrapper source.
pub const NO_WRAPPER_KEY: &str = "NONE";

/// Immutable base styles + wrapper categories, built once per process.
///
/// Base style order is append-only: persisted recipes point into it by index.
#[derive(Debug, Clone)]
pub struct Registries {
    base_styles: Vec<Arc<BaseStyle>>,
    categories: Vec<WrapperCategory>,
    wrappers: Vec<Wrapper>,
}

impl Registries {
    pub fn new(base_styles: Vec<BaseStyle>, categories: Vec<WrapperCategory>, plan: &WrapperPlan) -> Self {
        let wrappers = build_wrapper_list(&categories, plan);
        Self {
            base_styles: base_styles.into_iter().map(Arc::new).collect(),
            categories,
            wrappers,
        }
    }

    pub fn standard() -> Self {
        Self::with_plan(&WrapperPlan::standard())
    }

    /// Standard styles and categories with a different generation plan.
    pub fn with_plan(plan: &WrapperPlan) -> Self {
        Self::new(standard_base_styles(), standard_categories(), plan)
    }

    pub fn base_styles(&self) -> &[Arc<BaseStyle>] {
        &self.base_styles
    }

    pub fn base(&self, index: usize) -> Option<&Arc<BaseStyle>> {
        self.base_styles.get(index)
    }

    pub fn base_by_name(&self, name: &str) -> Option<&Arc<BaseStyle>> {
        self.base_styles.iter().find(|b| b.name == name)
    }

    pub fn categories(&self) -> &[WrapperCategory] {
        &self.categories
    }

    pub fn category(&self, key: &str) -> Option<&WrapperCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// The flat generation list (frames, pairs, identity).
    pub fn wrappers(&self) -> &[Wrapper] {
        &self.wrappers
    }

    /// Template for a builder selection. `NONE`, unknown keys and out-of-range
    /// variants all resolve to the empty wrapper.
    pub fn wrapper_template(&self, key: &str, variant: usize) -> WrapperTemplate {
        if key == NO_WRAPPER_KEY {
            return WrapperTemplate::identity();
        }
        self.category(key)
            .and_then(|c| c.templates.get(variant))
            .cloned()
            .unwrap_or_default()
    }

    /// Rebuilds a recipe's parts, falling back to the first base style and the
    /// empty wrapper when the registries have drifted.
    pub fn resolve(&self, recipe: &CustomStyleRecipe) -> Option<(Arc<BaseStyle>, WrapperTemplate)> {
        let base = match self.base(recipe.base_index) {
            Some(base) => base,
            None => {
                log::warn!(
                    "Recipe '{}' points at missing base style {}; using the first one",
                    recipe.name,
                    recipe.base_index
                );
                self.base_styles.first()?
            }
        };
        let wrapper = self.wrapper_template(&recipe.wrapper_category_key, recipe.wrapper_variant_index);
        Some((Arc::clone(base), wrapper))
    }
}

/// The published base style list. Append new styles at the end only.
pub fn standard_base_styles() -> Vec<BaseStyle> {
    let sub = |name: &str, sample: &str| BaseStyle::new(name, Transform::Substitute(build_map(sample)));
    let cased = |name: &str, lower: &str, upper: &str| {
        BaseStyle::new(name, Transform::Substitute(build_cased_map(lower, upper)))
    };

    vec![
        cased("Bold", a::BOLD, a::BOLD_CAPITALS),
        cased("Italic", a::ITALIC, a::ITALIC_CAPITALS),
        cased("Bold Italic", a::BOLD_ITALIC, a::BOLD_ITALIC_CAPITALS),
        cased("Monospace", a::MONOSPACE, a::MONOSPACE_CAPITALS),
        cased("Double-Struck", a::DOUBLE_STRUCK, a::DOUBLE_STRUCK_CAPITALS),
        cased("Medieval", a::FRAKTUR, a::FRAKTUR_CAPITALS),
        BaseStyle::new("Small Caps", Transform::LowercaseSubstitute(build_map(a::LATIN_CAPITALS))),
        sub("Full Width", a::FULL_WIDTH),
        sub("Circled", a::CIRCLED),
        sub("Wide", a::FULL_WIDTH),
        BaseStyle::new("Mixed Script", Transform::LookAlike(look_alike_map(a::LOOK_ALIKES))),
        BaseStyle::new("Spaced", Transform::Spaced),
        sub("Asian", a::ASIAN),
        sub("Russian", a::RUSSIAN),
        sub("Squared", a::SQUARED),
        sub("Black Circled", a::BLACK_CIRCLED),
        sub("Inverted", a::INVERTED),
        sub("Subscript", a::SUBSCRIPT),
        sub("Superscript", a::SUPERSCRIPT),
        sub("Underline", a::UNDERLINE),
        sub("Strike", a::STRIKE),
        sub("Tiny", a::TINY),
        sub("Parenthesized", a::PARENTHESIZED),
        sub("Dotted", a::DOTTED),
        sub("Double Circled", a::BLACK_CIRCLED),
        cased("Fraktur Bold", a::FRAKTUR_BOLD, a::FRAKTUR_BOLD_CAPITALS),
        cased("Script", a::SCRIPT, a::SCRIPT_CAPITALS),
        cased("Script Bold", a::SCRIPT_BOLD, a::SCRIPT_BOLD_CAPITALS),
        sub("Squared Alt", a::SQUARED_ALT),
        sub("Bubble", a::CIRCLED),
        sub("Reversed", a::REVERSED),
        sub("Tiny Caps", a::TINY_CAPS),
        sub("Slash", a::SLASH),
        sub("Waves", a::WAVES),
        sub("Hearts", a::HEARTS),
        sub("Stars", a::STARS),
    ]
}
