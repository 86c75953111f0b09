// src/lib.rs

pub mod builder;
pub mod config;
pub mod core;
pub mod dictation;
pub mod error;
pub mod favorites;
pub mod persistence;
pub mod scheduler;

pub use crate::config::EngineConfig;
pub use crate::core::engine::Session;
pub use crate::core::registry::Registries;
pub use crate::error::StyleError;
