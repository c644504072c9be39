//! Folio UI Components
//!
//! Reusable Dioxus components for the portfolio pages: the category filter
//! bar, player controls and carousel navigation. Components only render and
//! report user intent through event handlers; driving media elements and
//! the browser is left to the app.
//!
//! Class names match the site stylesheet (`category`, `play-btn`,
//! `music-progress-bar`, `slider-dot`, ...).

pub mod components;

pub use components::*;
