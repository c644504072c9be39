//! Folio Core Library
//!
//! Everything a portfolio page decides, without touching a browser.
//!
//! ## Overview
//!
//! A Folio site is a homepage with a filterable project gallery and a
//! project detail page with media sliders and an audio player. All project
//! data comes from one static `projects.json` document. This crate holds
//! the logic behind those pages so it can be tested without a DOM:
//!
//! - [`types`]: the `Project` record and the `Catalog` document
//! - [`source`]: loading a catalog from HTTP, disk or memory
//! - [`gallery`]: category filtering, card view models, the gallery controller
//! - [`fragment`]: URL fragment and query conventions
//! - [`playback`]: play/pause mirroring, single-playback groups, seek math
//! - [`slider`]: slide classification and carousel paging
//! - [`detail`]: the detail page view model
//! - [`typewriter`]: the hero typing animation
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{gallery_cards, load_catalog, CategoryFilter, StaticSource};
//!
//! let catalog = load_catalog(&StaticSource::new(json)).await?;
//! for card in gallery_cards(&catalog.projects, &CategoryFilter::parse("music")) {
//!     println!("{} -> {}", card.title, card.href);
//! }
//! ```

pub mod config;
pub mod detail;
pub mod error;
pub mod fragment;
pub mod gallery;
pub mod playback;
pub mod slider;
pub mod source;
pub mod typewriter;
pub mod types;

// Re-exports
pub use config::{SiteConfig, COPY_FEEDBACK_DURATION, HEADER_OFFSET_PX};
pub use detail::{ListSection, ProjectDetail};
pub use error::{FolioError, FolioResult};
pub use fragment::{
    category_from_fragment, category_href, project_href, project_id_param, HOME_PROJECTS_HREF,
    PROJECTS_FRAGMENT,
};
pub use gallery::{
    gallery_cards, CategoryControl, CategoryFilter, FragmentSelection, GalleryCard,
    GalleryController, ALL_CATEGORY,
};
pub use playback::{
    AudioHooks, PlayState, PlaybackCommand, PlaybackGroup, LARGE_PLAYER_KEY, SEEK_STEP_SECS,
};
pub use slider::{Slide, SlideKind, SliderNav, SliderState, VideoLayout};
#[cfg(not(target_arch = "wasm32"))]
pub use source::FileSource;
pub use source::{load_catalog, load_project, CatalogSource, StaticSource};
pub use typewriter::Typewriter;
pub use types::*;
