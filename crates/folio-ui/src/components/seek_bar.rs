//! Seek Bar Component
//!
//! Clickable, focusable progress bar. Reports seek requests as a fraction
//! of the bar's width, and arrow-key nudges in seconds.

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::playback::click_fraction;
use folio_core::SEEK_STEP_SECS;

/// Properties for the SeekBar component
#[derive(Clone, PartialEq, Props)]
pub struct SeekBarProps {
    /// Element id (`progress-bar-<key>`)
    pub id: String,
    /// Fill element id (`progress-fill-<key>`)
    pub fill_id: String,
    /// CSS width of the fill, e.g. `"42%"`
    pub fill_width: String,
    /// Large (detail page) styling
    #[props(default = false)]
    pub large: bool,
    /// Called with the click position as a fraction in `[0, 1]`
    pub on_seek: EventHandler<f64>,
    /// Called with a signed offset in seconds (arrow keys)
    pub on_nudge: EventHandler<f64>,
}

#[component]
pub fn SeekBar(props: SeekBarProps) -> Element {
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let on_seek = props.on_seek;
    let on_nudge = props.on_nudge;

    let (bar_class, fill_class) = if props.large {
        ("music-progress-bar large", "music-progress-fill large")
    } else {
        ("music-progress-bar", "music-progress-fill")
    };

    rsx! {
        div {
            id: "{props.id}",
            class: bar_class,
            tabindex: "0",
            role: "slider",
            "aria-label": "Audio progress",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onclick: move |evt| {
                evt.stop_propagation();
                let client_x = evt.client_coordinates().x;
                let Some(element) = mounted() else {
                    return;
                };
                spawn(async move {
                    match element.get_client_rect().await {
                        Ok(rect) => {
                            on_seek.call(click_fraction(client_x, rect.origin.x, rect.size.width));
                        }
                        Err(e) => tracing::debug!("Seek bar has no layout: {:?}", e),
                    }
                });
            },
            onkeydown: move |evt| {
                evt.stop_propagation();
                if let Some(delta) = nudge_for_key(&evt.key()) {
                    evt.prevent_default();
                    on_nudge.call(delta);
                }
            },
            div {
                id: "{props.fill_id}",
                class: fill_class,
                style: "width: {props.fill_width}",
            }
        }
    }
}

/// Seek offset for an arrow key, in seconds.
pub fn nudge_for_key(key: &Key) -> Option<f64> {
    match key {
        Key::ArrowLeft => Some(-SEEK_STEP_SECS),
        Key::ArrowRight => Some(SEEK_STEP_SECS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_nudge_five_seconds() {
        assert_eq!(nudge_for_key(&Key::ArrowLeft), Some(-5.0));
        assert_eq!(nudge_for_key(&Key::ArrowRight), Some(5.0));
        assert_eq!(nudge_for_key(&Key::Enter), None);
    }
}
