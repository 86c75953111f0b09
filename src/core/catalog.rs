// File: src/core/catalog.rs
use crate::core::dedup::{dedupe, Probes};
use crate::core::generator::generate;
use crate::core::registry::Registries;
use crate::core::types::{CanonicalStyle, CustomStyleRecipe, StyleId};
use crate::favorites::LikedSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

pub const ALL_KEY: &str = "all";
pub const FAV_KEY: &str = "fav";

/// Category chips, in display order. `fav` and `all` are pseudo-categories;
/// every other key is a tag.
pub const CATEGORY_LIST: &[(&str, &str)] = &[
    (FAV_KEY, "Fav"),
    (ALL_KEY, "All"),
    ("decorated", "Decorated"),
    ("lines", "Lines"),
    ("boxed", "Boxed"),
    ("arrows", "Arrows"),
    ("emoji", "Emoji"),
    ("kaomoji", "Kaomoji"),
    ("lenny", "Lenny"),
    ("stars", "Stars"),
    ("love", "Love"),
    ("sexy", "Sexy Art"),
    ("crown", "Crowned"),
    ("weapons", "Gun/Sword"),
    ("attitude", "Attitude"),
    ("small", "Small"),
    ("monospace", "Monospace"),
    ("medieval", "Medieval"),
    ("double-struck", "Double"),
    ("circled", "Circled"),
    ("wide", "Wide"),
    ("cursive", "Cursive"),
    ("mixed-script", "Mixed Script"),
    ("asian", "Asian"),
    ("russian", "Russian"),
    ("royal", "Royal"),
];

/// Base styles cycled over the chip labels.
const CHIP_STYLES: [&str; 8] = [
    "Bold",
    "Italic",
    "Medieval",
    "Double-Struck",
    "Full Width",
    "Circled",
    "Small Caps",
    "Wide",
];

/// Tags every custom style carries.
const CUSTOM_TAGS: [&str; 2] = ["decorated", "custom"];

/// The session's style list: shuffled once, capped, then only ever grown at
/// the front by custom styles.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    styles: Vec<Arc<CanonicalStyle>>,
}

impl Catalog {
    /// Shuffles `canonical` uniformly with `rng` and keeps the first `cap`.
    pub fn build_catalog<R: Rng + ?Sized>(mut canonical: Vec<CanonicalStyle>, cap: usize, rng: &mut R) -> Self {
        canonical.shuffle(rng);
        canonical.truncate(cap);
        Self { styles: canonical.into_iter().map(Arc::new).collect() }
    }

    /// Full pipeline: generate, dedupe, shuffle, cap.
    pub fn assemble<R: Rng + ?Sized>(registries: &Registries, probes: &Probes, cap: usize, rng: &mut R) -> Self {
        let candidate_count = registries.base_styles().len() * registries.wrappers().len();
        let canonical = dedupe(generate(registries), probes);
        let unique = canonical.len();
        let catalog = Self::build_catalog(canonical, cap, rng);
        log::info!(
            "Catalog built: {} candidates, {} unique, {} kept (cap {})",
            candidate_count,
            unique,
            catalog.len(),
            cap
        );
        catalog
    }

    pub fn styles(&self) -> &[Arc<CanonicalStyle>] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.styles.iter().any(|s| s.name == name)
    }

    pub fn prepend(&mut self, style: CanonicalStyle) -> Arc<CanonicalStyle> {
        let style = Arc::new(style);
        self.styles.insert(0, Arc::clone(&style));
        style
    }

    /// Puts the custom style for `recipe` at the front unless one with the
    /// same name is already present. Returns whether anything was added.
    pub fn ensure_custom(&mut self, registries: &Registries, recipe: &CustomStyleRecipe, probes: &Probes) -> bool {
        if self.contains_name(&recipe.name) {
            return false;
        }
        match custom_style(registries, recipe, probes) {
            Some(style) => {
                self.prepend(style);
                true
            }
            None => false,
        }
    }

    /// Prepends every stored recipe in order, so the last element of the stored
    /// array ends up first.
    pub fn rehydrate(&mut self, registries: &Registries, recipes: &[CustomStyleRecipe], probes: &Probes) {
        let mut added = 0;
        for recipe in recipes {
            if self.ensure_custom(registries, recipe, probes) {
                added += 1;
            }
        }
        if added > 0 {
            log::info!("Restored {} custom styles", added);
        }
    }
}

/// Builds the canonical form of a saved recipe. `None` only when the
/// registries have no base styles at all.
pub fn custom_style(registries: &Registries, recipe: &CustomStyleRecipe, probes: &Probes) -> Option<CanonicalStyle> {
    let (base, wrapper) = registries.resolve(recipe)?;
    let preview_a = wrapper.apply(&base.apply(&probes.a));
    let preview_b = wrapper.apply(&base.apply(&probes.b));
    Some(CanonicalStyle {
        name: recipe.name.clone(),
        base_name: base.name.clone(),
        base,
        wrapper,
        preview_a,
        preview_b,
        tags: CUSTOM_TAGS.iter().copied().collect::<BTreeSet<_>>(),
    })
}

/// Styles shown under `key`, in catalog order. Unknown keys match nothing.
pub fn filter_by_category(catalog: &Catalog, key: &str, liked: &LikedSet) -> Vec<Arc<CanonicalStyle>> {
    let keep = |style: &Arc<CanonicalStyle>| match key {
        ALL_KEY => true,
        FAV_KEY => liked.contains(&style.id()),
        tag => style.has_tag(tag),
    };
    catalog.styles().iter().filter(|s| keep(*s)).cloned().collect()
}

fn source_text<'a>(input: &'a str, placeholder: &'a str) -> &'a str {
    if input.is_empty() {
        placeholder
    } else {
        input
    }
}

/// Renders `active[offset..offset + batch_size]` (clamped) on the input, or on
/// the placeholder when the input is empty.
pub fn render_batch(
    active: &[Arc<CanonicalStyle>],
    offset: usize,
    batch_size: usize,
    input: &str,
    placeholder: &str,
) -> Vec<String> {
    let text = source_text(input, placeholder);
    active
        .iter()
        .skip(offset)
        .take(batch_size)
        .map(|style| style.render(text))
        .collect()
}

/// Re-renders every style in `active`. The catalog is left untouched.
pub fn apply_live_input(active: &[Arc<CanonicalStyle>], text: &str, placeholder: &str) -> HashMap<StyleId, String> {
    let source = source_text(text, placeholder);
    active.iter().map(|style| (style.id(), style.render(source))).collect()
}

/// Display text for the `index`-th chip: `fav` verbatim, every other label
/// drawn in one of eight cycling base styles.
pub fn chip_label(registries: &Registries, index: usize, key: &str, label: &str) -> String {
    if key == FAV_KEY {
        return label.to_string();
    }
    let style_name = CHIP_STYLES[index % CHIP_STYLES.len()];
    registries
        .base_by_name(style_name)
        .map_or_else(|| label.to_string(), |base| base.apply(label))
}

/// Every chip in display order as `(key, display text)`.
pub fn chip_labels(registries: &Registries) -> Vec<(&'static str, String)> {
    CATEGORY_LIST
        .iter()
        .enumerate()
        .map(|(i, &(key, label))| (key, chip_label(registries, i, key, label)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BaseStyle, Transform};
    use crate::core::wrappers::{WrapperCategory, WrapperPlan};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_registries() -> Registries {
        let bases = vec![
            BaseStyle::new("Spaced", Transform::Spaced),
            BaseStyle::new("Loud", Transform::LowercaseSubstitute(crate::core::converter::build_map(
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            ))),
        ];
        let cats = vec![
            WrapperCategory::new("BOX", "Boxes", &[("【 ", " 】"), ("『", "』")]),
            WrapperCategory::new("EMOJI", "Emoji", &[("🔥 ", " 🔥")]),
        ];
        let plan = WrapperPlan {
            repeats: vec![("BOX".to_string(), 1), ("EMOJI".to_string(), 1)],
            pairs: vec![],
        };
        Registries::new(bases, cats, &plan)
    }

    fn catalog(seed: u64, cap: usize) -> Catalog {
        let mut rng = StdRng::seed_from_u64(seed);
        Catalog::assemble(&small_registries(), &Probes::default(), cap, &mut rng)
    }

    fn names(styles: &[Arc<CanonicalStyle>]) -> Vec<String> {
        styles.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn cap_truncates_after_shuffle() {
        assert_eq!(catalog(1, 100).len(), 8);
        assert_eq!(catalog(1, 3).len(), 3);
        assert!(catalog(1, 0).is_empty());
    }

    #[test]
    fn same_seed_same_order() {
        assert_eq!(names(catalog(7, 100).styles()), names(catalog(7, 100).styles()));
    }

    #[test]
    fn filter_all_is_the_whole_catalog() {
        let cat = catalog(3, 100);
        let all = filter_by_category(&cat, ALL_KEY, &LikedSet::default());
        assert_eq!(names(&all), names(cat.styles()));
    }

    #[test]
    fn filter_by_tag_keeps_catalog_order() {
        let cat = catalog(3, 100);
        let boxed = filter_by_category(&cat, "boxed", &LikedSet::default());
        assert_eq!(boxed.len(), 4);
        assert!(boxed.iter().all(|s| s.has_tag("boxed")));
        let expected: Vec<String> = cat
            .styles()
            .iter()
            .filter(|s| s.has_tag("boxed"))
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names(&boxed), expected);
        assert!(filter_by_category(&cat, "no-such-tag", &LikedSet::default()).is_empty());
    }

    #[test]
    fn filter_fav_uses_liked_ids() {
        let cat = catalog(3, 100);
        let mut liked = LikedSet::default();
        liked.like("out_Loud_4");
        let fav = filter_by_category(&cat, FAV_KEY, &liked);
        assert_eq!(names(&fav), vec!["Loud #4"]);
    }

    #[test]
    fn batches_use_placeholder_for_empty_input() {
        let cat = catalog(3, 100);
        let all = filter_by_category(&cat, ALL_KEY, &LikedSet::default());
        let first = render_batch(&all, 0, 3, "", "Type something…");
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], all[0].render("Type something…"));

        let tail = render_batch(&all, 6, 28, "hi", "x");
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[1], all[7].render("hi"));
        assert!(render_batch(&all, 8, 28, "hi", "x").is_empty());
    }

    #[test]
    fn live_input_covers_every_active_style() {
        let cat = catalog(3, 100);
        let all = filter_by_category(&cat, ALL_KEY, &LikedSet::default());
        let rendered = apply_live_input(&all, "hi", "x");
        assert_eq!(rendered.len(), all.len());
        assert_eq!(rendered["out_Loud_4"], "HI");
        assert_eq!(rendered["out_Loud_3"], "🔥 HI 🔥");
        assert_eq!(rendered["out_Spaced_1"], "【 h i 】");
        assert_eq!(cat.len(), 8);
    }

    #[test]
    fn rehydrated_customs_come_first_last_stored_first() {
        let reg = small_registries();
        let mut cat = catalog(3, 100);
        let recipes = vec![
            CustomStyleRecipe {
                name: "Custom Spaced + BOX #1".to_string(),
                base_index: 0,
                wrapper_category_key: "BOX".to_string(),
                wrapper_variant_index: 0,
            },
            CustomStyleRecipe {
                name: "Custom Loud + EMOJI #1".to_string(),
                base_index: 1,
                wrapper_category_key: "EMOJI".to_string(),
                wrapper_variant_index: 0,
            },
        ];
        cat.rehydrate(&reg, &recipes, &Probes::default());
        assert_eq!(cat.len(), 10);
        assert_eq!(cat.styles()[0].name, "Custom Loud + EMOJI #1");
        assert_eq!(cat.styles()[1].name, "Custom Spaced + BOX #1");
        assert_eq!(cat.styles()[0].render("ok"), "🔥 OK 🔥");
        let tags: Vec<&str> = cat.styles()[0].tags.iter().copied().collect();
        assert_eq!(tags, vec!["custom", "decorated"]);

        // Rehydrating twice adds nothing.
        cat.rehydrate(&reg, &recipes, &Probes::default());
        assert_eq!(cat.len(), 10);
    }

    #[test]
    fn chip_labels_cycle_styles_and_keep_fav() {
        let reg = Registries::with_plan(&WrapperPlan { repeats: vec![], pairs: vec![] });
        let chips = chip_labels(&reg);
        assert_eq!(chips.len(), CATEGORY_LIST.len());
        assert_eq!(chips[0], ("fav", "Fav".to_string()));
        // Index 1 uses Italic.
        assert_eq!(chips[1], ("all", "𝐴𝑙𝑙".to_string()));
        // Index 2 uses Medieval.
        assert_eq!(chips[2].1, "𝔇𝔢𝔠𝔬𝔯𝔞𝔱𝔢𝔡");
    }
}
