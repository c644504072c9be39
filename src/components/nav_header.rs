//! Navigation Header Component
//!
//! Top bar with the site name and section links. On narrow screens the
//! links collapse behind a hamburger button; the open state is mirrored
//! into `aria-expanded` and can be closed from inside the menu.

use dioxus::prelude::*;
use folio_ui::{MenuAction, MenuButton};

/// Section of the home page a nav link points to
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    About,
    Work,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [NavLocation::About, NavLocation::Work, NavLocation::Contact];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::About => "About",
            NavLocation::Work => "Work",
            NavLocation::Contact => "Contact",
        }
    }

    /// Absolute link, usable from either page
    pub fn href(&self) -> &'static str {
        match self {
            NavLocation::About => "/#about",
            NavLocation::Work => "/#projects",
            NavLocation::Contact => "/#contact",
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "navbar",
            a { class: "logo", href: "/", "Portfolio" }

            MenuButton {
                id: "hamburger".to_string(),
                action: MenuAction::Toggle,
                controls: "nav-links".to_string(),
                expanded: menu_open(),
                on_press: move |_| menu_open.set(!menu_open()),
            }

            nav {
                id: "nav-links",
                class: if menu_open() { "nav-links open" } else { "nav-links" },
                MenuButton {
                    id: "close-menu".to_string(),
                    action: MenuAction::Close,
                    controls: "nav-links".to_string(),
                    expanded: menu_open(),
                    on_press: move |_| menu_open.set(false),
                }
                for location in NavLocation::ALL {
                    a { class: "nav-link", href: location.href(), "{location.display_name()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_link_targets_projects_section() {
        assert_eq!(NavLocation::Work.href(), folio_core::HOME_PROJECTS_HREF);
    }
}
