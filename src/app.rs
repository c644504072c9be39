use dioxus::prelude::*;

use crate::browser;
use crate::pages::{Home, ProjectPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page: hero, project gallery, contact
/// - `/project?id=<id>` - Project detail page
/// - anything else - back to the project listing
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/project?:id")]
    ProjectPage { id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Unknown paths have no content of their own.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        tracing::warn!("Unknown route /{}", segments.join("/"));
        browser::redirect_to_projects();
    });

    VNode::empty()
}
