//! Contact section with the copy-email button.

use dioxus::prelude::*;
use folio_core::COPY_FEEDBACK_DURATION;

use crate::browser;

#[component]
pub fn ContactSection(email: String) -> Element {
    let mut copied = use_signal(|| false);

    let copy_email = move |_| {
        let email = email.clone();
        spawn(async move {
            match browser::copy_to_clipboard(&email).await {
                Ok(()) => {
                    copied.set(true);
                    gloo::timers::future::sleep(COPY_FEEDBACK_DURATION).await;
                    copied.set(false);
                }
                Err(e) => tracing::warn!("Copy to clipboard failed: {}", e),
            }
        });
    };

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title", "Contact" }
            p { class: "contact-text", "Have a project in mind? Drop me a line." }
            button {
                id: "copy-email-btn",
                class: "btn-copy",
                r#type: "button",
                onclick: copy_email,
                "Copy email"
            }
            span {
                id: "copy-feedback",
                class: "copy-feedback",
                role: "status",
                style: if copied() { "display: inline" } else { "display: none" },
                "Copied!"
            }
        }
    }
}
