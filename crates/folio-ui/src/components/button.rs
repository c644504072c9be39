//! Button Components
//!
//! - Play/pause toggle used by gallery cards and the detail page
//! - Navigation menu buttons (hamburger, close)

use dioxus::prelude::*;

/// Player size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlayerSize {
    /// Small overlay button on a gallery card
    #[default]
    Card,
    /// Detail page player
    Large,
}

impl PlayerSize {
    /// Returns the CSS class of the button
    pub fn class(&self) -> &'static str {
        match self {
            PlayerSize::Card => "play-btn",
            PlayerSize::Large => "play-btn-large",
        }
    }

    fn icon_classes(&self) -> (&'static str, &'static str) {
        match self {
            PlayerSize::Card => ("play-icon", "pause-icon"),
            PlayerSize::Large => ("play-icon-large", "pause-icon-large"),
        }
    }

    fn icon_px(&self) -> u32 {
        match self {
            PlayerSize::Card => 22,
            PlayerSize::Large => 24,
        }
    }
}

/// Properties for the PlayPauseButton component
#[derive(Clone, PartialEq, Props)]
pub struct PlayPauseButtonProps {
    /// Element id (`play-btn-<key>`)
    pub id: String,
    /// Whether the player shows the "playing" affordance
    pub playing: bool,
    #[props(default)]
    pub size: PlayerSize,
    /// Click handler. The click does not bubble to the enclosing card.
    pub on_toggle: EventHandler<()>,
}

/// Play/pause toggle
///
/// Both icons are always rendered; the stylesheet shows one of them based
/// on the `playing` class.
#[component]
pub fn PlayPauseButton(props: PlayPauseButtonProps) -> Element {
    let (play_class, pause_class) = props.size.icon_classes();
    let px = props.size.icon_px();
    let class = if props.playing {
        format!("{} playing", props.size.class())
    } else {
        props.size.class().to_string()
    };
    let on_toggle = props.on_toggle;

    rsx! {
        button {
            id: "{props.id}",
            class: "{class}",
            r#type: "button",
            "aria-label": if props.playing { "Pause music" } else { "Play music" },
            "aria-pressed": "{props.playing}",
            onclick: move |evt| {
                evt.stop_propagation();
                on_toggle.call(());
            },
            // Enter/Space activate the button, not an enclosing card.
            onkeydown: move |evt| evt.stop_propagation(),
            span { class: "{play_class}",
                svg {
                    class: "play-svg",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "{px}",
                    height: "{px}",
                    view_box: "0 0 {px} {px}",
                    fill: "none",
                    polygon { points: "5,3 19,11 5,19", fill: "white" }
                }
            }
            span { class: "{pause_class}",
                svg {
                    class: "pause-svg",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "{px}",
                    height: "{px}",
                    view_box: "0 0 {px} {px}",
                    fill: "none",
                    rect { x: "4", y: "4", width: "4", height: "14", rx: "1.5", fill: "white" }
                    rect { x: "14", y: "4", width: "4", height: "14", rx: "1.5", fill: "white" }
                }
            }
        }
    }
}

/// What a navigation menu button does
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    /// Hamburger: opens or closes the menu
    Toggle,
    /// Close control inside the open menu
    Close,
}

impl MenuAction {
    pub fn class(&self) -> &'static str {
        match self {
            MenuAction::Toggle => "hamburger",
            MenuAction::Close => "close-btn",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            MenuAction::Toggle => "Toggle navigation",
            MenuAction::Close => "Close navigation",
        }
    }
}

/// Properties for the MenuButton component
#[derive(Clone, PartialEq, Props)]
pub struct MenuButtonProps {
    /// Element id (`hamburger`, `close-menu`)
    pub id: String,
    pub action: MenuAction,
    /// Id of the menu this button controls
    pub controls: String,
    /// Current menu state, mirrored into `aria-expanded`
    pub expanded: bool,
    pub on_press: EventHandler<()>,
}

/// Hamburger or close button of the navigation menu
#[component]
pub fn MenuButton(props: MenuButtonProps) -> Element {
    let on_press = props.on_press;

    rsx! {
        button {
            id: "{props.id}",
            class: props.action.class(),
            r#type: "button",
            "aria-label": props.action.aria_label(),
            "aria-controls": "{props.controls}",
            "aria-expanded": "{props.expanded}",
            onclick: move |_| on_press.call(()),
            {
                match props.action {
                    MenuAction::Toggle => rsx! {
                        span { class: "hamburger-bar" }
                        span { class: "hamburger-bar" }
                        span { class: "hamburger-bar" }
                    },
                    MenuAction::Close => rsx! { "\u{00D7}" },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_size_classes() {
        assert_eq!(PlayerSize::Card.class(), "play-btn");
        assert_eq!(PlayerSize::Large.class(), "play-btn-large");
        assert_eq!(PlayerSize::Large.icon_classes(), ("play-icon-large", "pause-icon-large"));
    }

    #[test]
    fn menu_action_hooks() {
        assert_eq!(MenuAction::Toggle.class(), "hamburger");
        assert_eq!(MenuAction::Close.class(), "close-btn");
        assert_ne!(MenuAction::Toggle.aria_label(), MenuAction::Close.aria_label());
    }

    #[test]
    fn player_size_default() {
        assert_eq!(PlayerSize::default(), PlayerSize::Card);
    }
}
