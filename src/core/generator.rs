// File: src/core/generator.rs
use crate::core::registry::Registries;
use crate::core::types::{BaseStyle, Wrapper};
use std::sync::Arc;

/// One (base style, wrapper) composition before dedup.
#[derive(Debug, Clone, Copy)]
pub struct CandidateStyle<'r> {
    pub base: &'r Arc<BaseStyle>,
    pub wrapper: &'r Wrapper,
    pub wrapper_index: usize,
}

impl<'r> CandidateStyle<'r> {
    /// `"{base} #{wrapper_index + 1}"`.
    pub fn name(&self) -> String {
        format!("{} #{}", self.base.name, self.wrapper_index + 1)
    }

    pub fn base_name(&self) -> &'r str {
        &self.base.name
    }

    pub fn render(&self, text: &str) -> String {
        self.wrapper.template.apply(&self.base.apply(text))
    }
}

/// Every base style crossed with every wrapper, base-major, wrapper-minor.
/// Lazy: most candidates die at dedup, so nothing is materialised up front.
pub fn generate(registries: &Registries) -> impl Iterator<Item = CandidateStyle<'_>> + '_ {
    registries.base_styles().iter().flat_map(move |base| {
        registries
            .wrappers()
            .iter()
            .enumerate()
            .map(move |(wrapper_index, wrapper)| CandidateStyle { base, wrapper, wrapper_index })
    })
}
