//! Browser glue: catalog fetching, media elements, location and clipboard.
//!
//! Element lookups return `Option` and callers skip missing elements. Media
//! playback errors are left to the element itself.

use dioxus::prelude::*;
use folio_core::{CatalogSource, FolioError, FolioResult, HOME_PROJECTS_HREF};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlMediaElement;

/// Fetches the catalog with a same-origin GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> FolioResult<String> {
        let response = gloo::net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| FolioError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(FolioError::Fetch(format!(
                "{} returned HTTP {}",
                self.url,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FolioError::Fetch(e.to_string()))
    }
}

/// Leave the current page for the home page's project listing.
pub fn redirect_to_projects() {
    if let Err(e) = gloo::utils::window().location().set_href(HOME_PROJECTS_HREF) {
        tracing::error!("Redirect failed: {:?}", e);
    }
}

/// Current URL fragment, including the leading `#`.
pub fn location_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

/// Replace the URL fragment without adding a history entry.
pub fn replace_hash(fragment: &str) {
    let Ok(history) = gloo::utils::window().history() else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
        tracing::debug!("Could not rewrite fragment: {:?}", e);
    }
}

/// Bring the projects heading into view, `offset` pixels clear of the top bar.
pub fn scroll_to_projects(offset: f64) {
    let Some(section) = gloo::utils::document().get_element_by_id("projects") else {
        return;
    };
    match section.query_selector("h2") {
        Ok(Some(heading)) => {
            heading.scroll_into_view_with_bool(true);
            gloo::utils::window().scroll_by_with_x_and_y(0.0, -offset);
        }
        _ => section.scroll_into_view_with_bool(true),
    }
}

pub fn set_document_title(title: &str) {
    gloo::utils::document().set_title(title);
}

/// Look up a media element by id.
pub fn media(id: &str) -> Option<HtmlMediaElement> {
    gloo::utils::document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlMediaElement>()
        .ok()
}

/// The element's own paused flag; a missing element counts as paused.
pub fn is_paused(id: &str) -> bool {
    media(id).map(|m| m.paused()).unwrap_or(true)
}

pub fn play(id: &str) {
    if let Some(element) = media(id) {
        // A rejected play promise (autoplay policy, bad source) is ignored.
        if let Err(e) = element.play() {
            tracing::debug!(element = id, "play() threw: {:?}", e);
        }
    }
}

pub fn pause(id: &str) {
    if let Some(element) = media(id) {
        if let Err(e) = element.pause() {
            tracing::debug!(element = id, "pause() threw: {:?}", e);
        }
    }
}

/// `(current_time, duration)`; duration is NaN until metadata has loaded.
pub fn position(id: &str) -> Option<(f64, f64)> {
    media(id).map(|m| (m.current_time(), m.duration()))
}

pub fn set_position(id: &str, seconds: f64) {
    if let Some(element) = media(id) {
        element.set_current_time(seconds);
    }
}

const COPY_SCRIPT: &str = r#"
const text = await dioxus.recv();
await navigator.clipboard.writeText(text);
return true;
"#;

/// Write `text` to the clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let eval = document::eval(COPY_SCRIPT);
    eval.send(text.to_string()).map_err(|e| e.to_string())?;
    eval.join::<bool>().await.map_err(|e| e.to_string())?;
    Ok(())
}
