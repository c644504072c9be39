//! Image and video carousels for the detail page.
//!
//! Each carousel listens for arrow keys on its own focusable container,
//! so two sliders on one page never react to the same key press.

use dioxus::prelude::*;
use folio_core::slider::{EMBED_ALLOW, EMBED_HEIGHT_PX};
use folio_core::{Slide, SlideKind, SliderNav, SliderState, VideoLayout};
use folio_ui::{nav_for_key, SliderArrows, SliderDots, SliderStyle};

/// Image carousel. Remount (via `key`) when the slides change.
#[component]
pub fn ImageSlider(slides: Vec<Slide>, title: String) -> Element {
    let mut slider = use_signal(|| SliderState::new(slides.len()));
    let state = slider();
    let on_nav = move |nav: SliderNav| slider.write().apply(nav);

    rsx! {
        div {
            class: "project-slider",
            tabindex: "0",
            "aria-roledescription": "carousel",
            onkeydown: move |evt| {
                if let Some(nav) = nav_for_key(&evt.key()) {
                    slider.write().apply(nav);
                }
            },
            div { class: "slider-viewport",
                div {
                    id: "slider-track",
                    class: "slider-track",
                    style: "transform: {state.track_transform()}",
                    for (index, slide) in slides.iter().enumerate() {
                        div { key: "{index}", class: "slider-slide",
                            img { src: "{slide.src}", alt: "{title} - Image {index + 1}" }
                        }
                    }
                }
            }
            if state.has_chrome() {
                SliderArrows {
                    style: SliderStyle::Image,
                    prev_id: "slider-prev".to_string(),
                    next_id: "slider-next".to_string(),
                    on_nav,
                }
                SliderDots {
                    style: SliderStyle::Image,
                    id: "slider-dots".to_string(),
                    count: state.count(),
                    active: state.index(),
                    on_nav,
                }
            }
        }
    }
}

/// Video area: nothing, one inline video, or a carousel.
#[component]
pub fn VideoSection(layout: VideoLayout) -> Element {
    match layout {
        VideoLayout::Empty => VNode::empty(),
        VideoLayout::Single(slide) => rsx! {
            div { id: "project-video-container", class: "project-video-container",
                VideoSlide { slide }
            }
        },
        VideoLayout::Carousel(slides) => rsx! {
            div { id: "project-video-container", class: "project-video-container",
                VideoCarousel { slides }
            }
        },
    }
}

#[component]
fn VideoCarousel(slides: Vec<Slide>) -> Element {
    let mut slider = use_signal(|| SliderState::new(slides.len()));
    let state = slider();
    let on_nav = move |nav: SliderNav| slider.write().apply(nav);

    rsx! {
        div {
            class: "video-slider",
            tabindex: "0",
            "aria-roledescription": "carousel",
            onkeydown: move |evt| {
                if let Some(nav) = nav_for_key(&evt.key()) {
                    slider.write().apply(nav);
                }
            },
            div {
                class: "video-slider-track",
                style: "transform: {state.track_transform()}",
                for (index, slide) in slides.iter().enumerate() {
                    div { key: "{index}", class: "video-slider-slide",
                        VideoSlide { slide: slide.clone() }
                    }
                }
            }
            SliderArrows { style: SliderStyle::Video, on_nav }
            SliderDots {
                style: SliderStyle::Video,
                count: state.count(),
                active: state.index(),
                on_nav,
            }
        }
    }
}

/// A native video element or an embedded player.
#[component]
fn VideoSlide(slide: Slide) -> Element {
    match slide.kind {
        SlideKind::Embed => rsx! {
            iframe {
                src: "{slide.src}",
                width: "100%",
                height: "{EMBED_HEIGHT_PX}",
                "frameborder": "0",
                "allow": EMBED_ALLOW,
                "allowfullscreen": "true",
            }
        },
        SlideKind::Video | SlideKind::Image => rsx! {
            video {
                src: "{slide.src}",
                width: "100%",
                controls: true,
                muted: true,
                "loop": "true",
                "playsinline": "true",
            }
        },
    }
}
