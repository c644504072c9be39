//! Category Pills Component
//!
//! Row of gallery filter buttons. The active button carries the `active`
//! class; each button exposes its selection value as `data-category`.

use dioxus::prelude::*;
use folio_core::{CategoryControl, CategoryFilter};

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Controls to show, in order
    pub controls: Vec<CategoryControl>,
    /// Handler called when a category is selected
    pub on_select: EventHandler<CategoryFilter>,
}

/// Displays the gallery's category filter bar
///
/// # Example
///
/// ```rust,ignore
/// let mut controller = use_signal(GalleryController::default);
///
/// rsx! {
///     CategoryPills {
///         controls: controller.read().controls(),
///         on_select: move |filter| { controller.write().select(filter); }
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "categories",
            role: "radiogroup",
            "aria-label": "Project categories",
            for control in props.controls.iter() {
                {
                    let filter = control.filter.clone();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{control.filter}",
                            r#type: "button",
                            class: pill_class(control.active),
                            role: "radio",
                            "data-category": "{control.filter}",
                            "aria-checked": if control.active { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(filter.clone());
                            },
                            "{control.label}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS class of a category button.
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "category active"
    } else {
        "category"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_pill_class() {
        assert_eq!(pill_class(true), "category active");
        assert_eq!(pill_class(false), "category");
    }
}
