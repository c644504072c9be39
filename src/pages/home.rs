//! Home page - hero, project gallery and contact.
//!
//! A `#projects?category=<value>` fragment preselects a category, is
//! rewritten to `#projects`, and scrolls the gallery into view.

use dioxus::prelude::*;
use folio_core::{load_catalog, GalleryController, HEADER_OFFSET_PX};
use folio_ui::CategoryPills;

use crate::browser::{self, HttpSource};
use crate::components::{ContactSection, Hero, NavHeader, ProjectGallery};
use crate::context::{provide_playback_group, use_site_config};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let config = use_site_config();

    // Apply the fragment before the first render so the right filter
    // is active even while the catalog is still loading.
    let (initial, from_fragment) = use_hook(|| {
        let mut controller = GalleryController::default();
        let applied = controller.apply_fragment(&browser::location_hash());
        if let Some(ref applied) = applied {
            tracing::info!("Category {} requested by URL", applied.filter);
            browser::replace_hash(applied.normalized);
        }
        (controller, applied.is_some())
    });

    let mut controller = use_signal(|| initial);
    let mut scroll_pending = use_signal(|| from_fragment);
    let mut playback = provide_playback_group();

    let data_url = config.data_url.clone();
    use_effect(move || {
        let source = HttpSource::new(data_url.clone());
        spawn(async move {
            match load_catalog(&source).await {
                Ok(catalog) => controller.write().load(catalog),
                // The gallery stays empty; this page is where failures redirect to.
                Err(e) => tracing::error!("Failed to load projects: {}", e),
            }
        });
    });

    use_effect(move || {
        if scroll_pending() {
            browser::scroll_to_projects(HEADER_OFFSET_PX);
            scroll_pending.set(false);
        }
    });

    // Keep the playback group in step with the rendered audio cards.
    use_effect(move || {
        let players: Vec<String> = controller
            .read()
            .cards()
            .into_iter()
            .filter(|card| card.audio_url.is_some())
            .map(|card| card.project_id)
            .collect();
        playback.write().sync_members(players);
    });

    let cards = controller.read().cards();
    let controls = controller.read().controls();

    rsx! {
        NavHeader {}

        main { class: "home",
            Hero { phrases: config.hero_phrases.clone() }

            section { id: "projects", class: "projects",
                h2 { class: "section-title", "Work" }
                CategoryPills {
                    controls,
                    on_select: move |filter| {
                        controller.write().select(filter);
                    },
                }
                ProjectGallery { cards }
            }

            ContactSection { email: config.contact_email.clone() }
        }
    }
}
