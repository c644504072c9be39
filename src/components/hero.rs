//! Hero section with the typing animation.

use dioxus::prelude::*;
use folio_core::Typewriter;

/// Headline whose last words are typed and deleted in a loop.
#[component]
pub fn Hero(phrases: Vec<String>) -> Element {
    let mut writer = use_signal(|| Typewriter::new(phrases.clone()));

    // Stops when the component unmounts.
    use_future(move || async move {
        loop {
            let delay = writer.write().tick();
            gloo::timers::future::sleep(delay).await;
        }
    });

    let text = writer.read().text();
    let visibility = if writer.read().is_visible() { "visible" } else { "hidden" };

    rsx! {
        section { id: "about", class: "hero",
            h1 { class: "hero-title",
                "Hi, I'm a "
                span {
                    id: "typing",
                    class: "typing",
                    style: "visibility: {visibility}",
                    "{text}"
                }
                span { class: "cursor", "|" }
            }
        }
    }
}
