//! Audio player wiring shared by gallery cards and the detail page.
//!
//! The play/pause affordance mirrors the audio element's native events
//! through the page's [`PlaybackGroup`](folio_core::PlaybackGroup). Clicking
//! play first pauses every sibling in the group.

use dioxus::prelude::*;
use folio_core::playback::{fill_width, nudge, seek_position};
use folio_core::{AudioHooks, PlaybackCommand, LARGE_PLAYER_KEY};
use folio_ui::{PlayPauseButton, PlayerSize, SeekBar};

use crate::browser;
use crate::context::use_playback_group;

#[derive(Props, Clone, PartialEq)]
pub struct AudioPlayerProps {
    /// Player key within the page's group (project id on gallery cards)
    pub player: String,
    /// Audio source URL
    pub src: String,
    #[props(default)]
    pub size: PlayerSize,
}

/// Play button, seek bar and audio element for one track
#[component]
pub fn AudioPlayer(props: AudioPlayerProps) -> Element {
    let mut group = use_playback_group();
    let mut fill = use_signal(|| "0%".to_string());

    let hooks = match props.size {
        PlayerSize::Large => AudioHooks::large(),
        PlayerSize::Card => AudioHooks::for_project(&props.player),
    };
    let playing = group.read().is_playing(&props.player);

    let on_toggle = {
        let player = props.player.clone();
        let audio_id = hooks.audio.clone();
        move |_| {
            let command = group.write().toggle(&player, browser::is_paused(&audio_id));
            match command {
                PlaybackCommand::Play { pause } => {
                    for sibling in pause {
                        browser::pause(&sibling_audio_id(&sibling));
                    }
                    browser::play(&audio_id);
                }
                PlaybackCommand::Pause => browser::pause(&audio_id),
            }
        }
    };

    let on_seek = {
        let audio_id = hooks.audio.clone();
        move |fraction: f64| {
            let Some((_, duration)) = browser::position(&audio_id) else {
                return;
            };
            if let Some(target) = seek_position(fraction, duration) {
                browser::set_position(&audio_id, target);
            }
        }
    };

    let on_nudge = {
        let audio_id = hooks.audio.clone();
        move |delta: f64| {
            let Some((current, duration)) = browser::position(&audio_id) else {
                return;
            };
            if let Some(target) = nudge(current, duration, delta) {
                browser::set_position(&audio_id, target);
            }
        }
    };

    let on_time_update = {
        let audio_id = hooks.audio.clone();
        move |_| {
            if let Some((current, duration)) = browser::position(&audio_id) {
                fill.set(fill_width(current, duration));
            }
        }
    };

    let player_play = props.player.clone();
    let player_pause = props.player.clone();
    let player_ended = props.player.clone();

    rsx! {
        PlayPauseButton {
            id: hooks.play_button.clone(),
            playing,
            size: props.size,
            on_toggle,
        }
        SeekBar {
            id: hooks.progress_bar.clone(),
            fill_id: hooks.progress_fill.clone(),
            fill_width: fill(),
            large: props.size == PlayerSize::Large,
            on_seek,
            on_nudge,
        }
        audio {
            id: "{hooks.audio}",
            src: "{props.src}",
            preload: "metadata",
            onplay: move |_| group.write().mark_playing(&player_play),
            onpause: move |_| group.write().mark_paused(&player_pause),
            onended: move |_| group.write().mark_paused(&player_ended),
            ontimeupdate: on_time_update,
        }
    }
}

/// Audio element id of a sibling player.
fn sibling_audio_id(player: &str) -> String {
    if player == LARGE_PLAYER_KEY {
        AudioHooks::large().audio
    } else {
        AudioHooks::for_project(player).audio
    }
}
