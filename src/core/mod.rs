// src/core/mod.rs

pub mod alphabets;
pub mod catalog;
pub mod classifier;
pub mod converter;
pub mod dedup;
pub mod engine;
pub mod generator;
pub mod grapheme;
pub mod registry;
pub mod types;
pub mod wrappers;
