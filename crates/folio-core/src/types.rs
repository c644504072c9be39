//! Core types for Folio

pub mod catalog;
pub mod project;

pub use catalog::Catalog;
pub use project::{capitalize, Project, MUSIC_CATEGORY, PLACEHOLDER_URL};
