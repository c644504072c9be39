//! Shared page context for Folio.
//!
//! ## Usage
//!
//! ```ignore
//! // In a page component
//! let playback = provide_playback_group();
//!
//! // In any player below it
//! let playback = use_playback_group();
//! ```

use dioxus::prelude::*;
use folio_core::{PlaybackGroup, SiteConfig};

/// Site configuration for the current component.
pub fn use_site_config() -> SiteConfig {
    use_hook(crate::get_site_config)
}

/// Create the playback group for the players rendered below this component.
///
/// Each page owns one group: the gallery's cards share it so only one of
/// them plays at a time; the detail page's single player sits alone in its own.
pub fn provide_playback_group() -> Signal<PlaybackGroup> {
    use_context_provider(|| Signal::new(PlaybackGroup::new()))
}

/// Hook to access the playback group of the enclosing page.
pub fn use_playback_group() -> Signal<PlaybackGroup> {
    use_context::<Signal<PlaybackGroup>>()
}
