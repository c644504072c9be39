//! Project Gallery Component
//!
//! Grid of project cards for the current category selection.

use dioxus::prelude::*;
use folio_core::GalleryCard;
use folio_ui::PlayerSize;

use crate::app::Route;
use crate::components::AudioPlayer;

/// Card grid
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectGallery { cards: controller.read().cards() }
/// }
/// ```
#[component]
pub fn ProjectGallery(
    /// Cards to display, in order
    cards: Vec<GalleryCard>,
) -> Element {
    rsx! {
        div { id: "projects-list", class: "projects-list",
            if cards.is_empty() {
                p { class: "projects-empty", "Nothing here yet." }
            }
            for card in cards {
                ProjectCard { key: "{card.project_id}", card: card.clone() }
            }
        }
    }
}

/// One project tile. Clicking anywhere except the audio controls, or
/// pressing Enter/Space while it has focus, opens the project's detail page.
#[component]
pub fn ProjectCard(card: GalleryCard) -> Element {
    let navigator = use_navigator();
    let click_id = card.project_id.clone();
    let key_id = card.project_id.clone();

    let background = card
        .image
        .as_deref()
        .map(|url| format!("background-image: url('{url}');"))
        .unwrap_or_default();

    rsx! {
        div {
            class: "project",
            role: "link",
            tabindex: "0",
            "aria-label": "{card.title}",
            "data-category": "{card.category}",
            style: "{background}",
            onclick: move |_| {
                navigator.push(Route::ProjectPage { id: click_id.clone() });
            },
            onkeydown: move |evt| {
                if opens_card(&evt.key()) {
                    evt.prevent_default();
                    navigator.push(Route::ProjectPage { id: key_id.clone() });
                }
            },

            if let Some(label) = &card.label {
                div { class: "category-label", "{label}" }
            }

            if let Some(src) = &card.audio_url {
                AudioPlayer {
                    player: card.project_id.clone(),
                    src: src.clone(),
                    size: PlayerSize::Card,
                }
            }

            div { class: "card-body",
                h3 { "{card.title}" }
                p { "{card.description}" }
            }
        }
    }
}

/// Keys that follow a focused card's link.
fn opens_card(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_open_card() {
        assert!(opens_card(&Key::Enter));
        assert!(opens_card(&Key::Character(" ".to_string())));
        assert!(!opens_card(&Key::Character("a".to_string())));
        assert!(!opens_card(&Key::ArrowLeft));
    }
}
