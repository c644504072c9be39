//! Slider navigation chrome: arrow buttons and dot indicators.

use dioxus::prelude::*;
use folio_core::SliderNav;

/// Class prefix of a slider's chrome (`slider` or `video-slider`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SliderStyle {
    #[default]
    Image,
    Video,
}

impl SliderStyle {
    pub fn prefix(&self) -> &'static str {
        match self {
            SliderStyle::Image => "slider",
            SliderStyle::Video => "video-slider",
        }
    }

    /// Noun used in dot labels ("Go to slide 2").
    fn noun(&self) -> &'static str {
        match self {
            SliderStyle::Image => "slide",
            SliderStyle::Video => "video",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SliderArrowsProps {
    #[props(default)]
    pub style: SliderStyle,
    /// Ids of the previous/next buttons, when the page needs hooks
    #[props(default)]
    pub prev_id: Option<String>,
    #[props(default)]
    pub next_id: Option<String>,
    pub on_nav: EventHandler<SliderNav>,
}

/// Previous/next buttons
#[component]
pub fn SliderArrows(props: SliderArrowsProps) -> Element {
    let prefix = props.style.prefix();
    let on_nav = props.on_nav;

    rsx! {
        button {
            id: props.prev_id.clone(),
            r#type: "button",
            class: "{prefix}-arrow {prefix}-prev",
            "aria-label": "Previous",
            onclick: move |_| on_nav.call(SliderNav::Prev),
            span { "\u{2039}" }
        }
        button {
            id: props.next_id.clone(),
            r#type: "button",
            class: "{prefix}-arrow {prefix}-next",
            "aria-label": "Next",
            onclick: move |_| on_nav.call(SliderNav::Next),
            span { "\u{203A}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SliderDotsProps {
    #[props(default)]
    pub style: SliderStyle,
    #[props(default)]
    pub id: Option<String>,
    pub count: usize,
    pub active: usize,
    pub on_nav: EventHandler<SliderNav>,
}

/// One dot per slide; clicking a dot jumps to its slide
#[component]
pub fn SliderDots(props: SliderDotsProps) -> Element {
    let prefix = props.style.prefix();
    let noun = props.style.noun();
    let on_nav = props.on_nav;

    rsx! {
        div { id: props.id.clone(), class: "{prefix}-dots",
            for index in 0..props.count {
                button {
                    key: "{index}",
                    r#type: "button",
                    class: dot_class(prefix, index == props.active),
                    "aria-label": "Go to {noun} {index + 1}",
                    onclick: move |_| on_nav.call(SliderNav::GoTo(index)),
                }
            }
        }
    }
}

/// Keyboard navigation for a focused slider container.
pub fn nav_for_key(key: &Key) -> Option<SliderNav> {
    match key {
        Key::ArrowLeft => Some(SliderNav::Prev),
        Key::ArrowRight => Some(SliderNav::Next),
        _ => None,
    }
}

fn dot_class(prefix: &str, active: bool) -> String {
    if active {
        format!("{prefix}-dot active")
    } else {
        format!("{prefix}-dot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_prefixes() {
        assert_eq!(SliderStyle::Image.prefix(), "slider");
        assert_eq!(SliderStyle::Video.prefix(), "video-slider");
    }

    #[test]
    fn dot_classes() {
        assert_eq!(dot_class("slider", true), "slider-dot active");
        assert_eq!(dot_class("video-slider", false), "video-slider-dot");
    }

    #[test]
    fn keyboard_navigation() {
        assert_eq!(nav_for_key(&Key::ArrowLeft), Some(SliderNav::Prev));
        assert_eq!(nav_for_key(&Key::ArrowRight), Some(SliderNav::Next));
        assert_eq!(nav_for_key(&Key::Escape), None);
    }
}
