//! Project detail page.
//!
//! Loads the catalog, resolves the `id` query parameter and shows the
//! project's media, description, tags and links. Any failure to produce
//! the project sends the browser back to the home page's listing.

use dioxus::prelude::*;
use folio_core::{load_project, project_id_param, ProjectDetail, LARGE_PLAYER_KEY};
use folio_ui::PlayerSize;

use crate::browser::{self, HttpSource};
use crate::components::{AudioPlayer, ImageSlider, NavHeader, VideoSection};
use crate::context::{provide_playback_group, use_site_config};

/// Project detail page component.
#[component]
pub fn ProjectPage(id: String) -> Element {
    let config = use_site_config();
    let mut detail: Signal<Option<ProjectDetail>> = use_signal(|| None);
    let mut playback = provide_playback_group();

    use_hook(|| playback.write().sync_members([LARGE_PLAYER_KEY]));

    use_effect(use_reactive!(|id| {
        // Nothing to look up; skip the catalog download.
        if project_id_param(&id).is_none() {
            tracing::warn!("Project page opened without an id");
            browser::redirect_to_projects();
            return;
        }
        let source = HttpSource::new(config.data_url.clone());
        let tagline = config.tagline.clone();
        spawn(async move {
            match load_project(&source, Some(&id)).await {
                Ok(project) => {
                    let view = ProjectDetail::new(&project, &tagline);
                    browser::set_document_title(&view.page_title);
                    tracing::info!(project = %view.id, "Showing project");
                    detail.set(Some(view));
                }
                Err(e) => {
                    tracing::error!("Project unavailable: {}", e);
                    browser::redirect_to_projects();
                }
            }
        });
    }));

    let Some(view) = detail() else {
        return rsx! {
            NavHeader {}
            main { class: "project-detail loading",
                p { class: "loading-text", "Loading project..." }
            }
        };
    };

    rsx! {
        NavHeader {}

        main { class: "project-detail",
            a { class: "back-btn", href: "{view.back_href}", "\u{2190} Back to Projects" }

            ImageSlider {
                key: "{view.id}-images",
                slides: view.images.clone(),
                title: view.title.clone(),
            }
            VideoSection { key: "{view.id}-videos", layout: view.videos.clone() }

            div { class: "project-info",
                span { id: "project-category", class: "project-category", "{view.category_label}" }
                h1 { id: "project-title", class: "project-title", "{view.title}" }
                p { id: "project-description", class: "project-description", "{view.description}" }

                if let Some(src) = &view.audio_url {
                    section { id: "audio-section", class: "audio-section",
                        AudioPlayer {
                            player: LARGE_PLAYER_KEY.to_string(),
                            src: src.clone(),
                            size: PlayerSize::Large,
                        }
                    }
                }

                section { class: "detail-section",
                    h3 { "Technologies" }
                    div { id: "tech-tags", class: "tech-tags",
                        for tech in view.technologies.iter() {
                            span { class: "tech-tag", "{tech}" }
                        }
                    }
                }

                if let Some(heading) = view.list.heading() {
                    section { class: "detail-section",
                        h3 { "{heading}" }
                        ul { id: "features-list", class: "features-list",
                            for item in view.list.items() {
                                li { "{item}" }
                            }
                        }
                    }
                }

                div { class: "project-links",
                    if let Some(url) = &view.live_url {
                        a {
                            id: "live-link",
                            class: "btn-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Live"
                        }
                    }
                    if let Some(url) = &view.github_url {
                        a {
                            id: "github-link",
                            class: "btn-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Code"
                        }
                    }
                }
            }
        }
    }
}
