//! Audio player logic shared by the gallery cards and the detail page.
//!
//! Players mirror the native media element: the element's `play`, `pause`
//! and `ended` events are the source of truth, and the UI only issues
//! commands. [`PlaybackGroup`] adds the gallery's rule that at most one
//! card plays at a time, enforced cooperatively: starting one player first
//! pauses every sibling.

/// Seconds skipped by the seek bar's arrow keys.
pub const SEEK_STEP_SECS: f64 = 5.0;

/// Hook suffix of the detail page's single player.
pub const LARGE_PLAYER_KEY: &str = "large";

/// Element ids of one player's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioHooks {
    pub play_button: String,
    pub audio: String,
    pub progress_bar: String,
    pub progress_fill: String,
}

impl AudioHooks {
    /// Hooks of a gallery card's player, keyed by project id.
    pub fn for_project(project_id: &str) -> Self {
        Self::with_key(project_id)
    }

    /// Hooks of the detail page's player.
    pub fn large() -> Self {
        Self::with_key(LARGE_PLAYER_KEY)
    }

    fn with_key(key: &str) -> Self {
        Self {
            play_button: format!("play-btn-{key}"),
            audio: format!("audio-{key}"),
            progress_bar: format!("progress-bar-{key}"),
            progress_fill: format!("progress-fill-{key}"),
        }
    }
}

/// Visual state of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Paused,
    Playing,
}

impl PlayState {
    pub fn is_playing(self) -> bool {
        self == PlayState::Playing
    }
}

/// What the UI must do with the media elements after a button click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Pause the listed siblings, then start this player
    Play { pause: Vec<String> },
    /// Pause this player
    Pause,
}

/// Players that must not play simultaneously.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackGroup {
    members: Vec<String>,
    playing: Option<String>,
}

impl PlaybackGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the member set with the players currently rendered.
    /// A playing player that is no longer rendered is forgotten.
    pub fn sync_members<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = keys.into_iter().map(Into::into).collect();
        if let Some(ref key) = self.playing {
            if !self.members.contains(key) {
                self.playing = None;
            }
        }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Handle a click on `key`'s play/pause button.
    ///
    /// `natively_paused` is the element's own `paused` flag at click time.
    pub fn toggle(&mut self, key: &str, natively_paused: bool) -> PlaybackCommand {
        if natively_paused {
            PlaybackCommand::Play {
                pause: self.request_play(key),
            }
        } else {
            tracing::debug!(player = key, "Pausing playback");
            self.mark_paused(key);
            PlaybackCommand::Pause
        }
    }

    /// Make `key` the playing member. Returns the siblings to pause first.
    pub fn request_play(&mut self, key: &str) -> Vec<String> {
        let pause: Vec<String> = self
            .members
            .iter()
            .filter(|m| m.as_str() != key)
            .cloned()
            .collect();
        tracing::debug!(player = key, siblings = pause.len(), "Starting playback");
        self.playing = Some(key.to_string());
        pause
    }

    /// Mirror a native `play` event.
    pub fn mark_playing(&mut self, key: &str) {
        self.playing = Some(key.to_string());
    }

    /// Mirror a native `pause` or `ended` event.
    pub fn mark_paused(&mut self, key: &str) {
        if self.playing.as_deref() == Some(key) {
            self.playing = None;
        }
    }

    pub fn state(&self, key: &str) -> PlayState {
        if self.playing.as_deref() == Some(key) {
            PlayState::Playing
        } else {
            PlayState::Paused
        }
    }

    pub fn is_playing(&self, key: &str) -> bool {
        self.state(key).is_playing()
    }

    /// The player currently shown as playing, if any.
    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

/// Duration usable for seeking: finite and positive.
fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Seek bar fill in percent; 0 while the duration is unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    match known_duration(duration) {
        Some(d) if current_time.is_finite() => (current_time / d * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// CSS width of the seek bar fill.
pub fn fill_width(current_time: f64, duration: f64) -> String {
    format!("{}%", progress_percent(current_time, duration))
}

/// Horizontal position of a click within a bar, as a fraction in `[0, 1]`.
pub fn click_fraction(client_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if !(bar_width.is_finite() && bar_width > 0.0) {
        return 0.0;
    }
    ((client_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

/// Playback position for a click at `fraction`; `None` while the duration
/// is unknown.
pub fn seek_position(fraction: f64, duration: f64) -> Option<f64> {
    known_duration(duration).map(|d| fraction.clamp(0.0, 1.0) * d)
}

/// Playback position after an arrow-key nudge of `delta` seconds, clamped to
/// `[0, duration]`; `None` while the duration is unknown.
pub fn nudge(current_time: f64, duration: f64, delta: f64) -> Option<f64> {
    known_duration(duration).map(|d| (current_time + delta).clamp(0.0, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(keys: &[&str]) -> PlaybackGroup {
        let mut group = PlaybackGroup::new();
        group.sync_members(keys.iter().copied());
        group
    }

    #[test]
    fn test_hooks() {
        let hooks = AudioHooks::large();
        assert_eq!(hooks.play_button, "play-btn-large");
        assert_eq!(hooks.audio, "audio-large");
        assert_eq!(hooks.progress_bar, "progress-bar-large");
        assert_eq!(hooks.progress_fill, "progress-fill-large");
        assert_eq!(AudioHooks::for_project("x").progress_fill, "progress-fill-x");
    }

    #[test]
    fn test_play_pauses_siblings() {
        let mut group = group(&["a", "b", "c"]);
        let cmd = group.toggle("b", true);
        assert_eq!(
            cmd,
            PlaybackCommand::Play {
                pause: vec!["a".to_string(), "c".to_string()]
            }
        );
        assert!(group.is_playing("b"));
        assert!(!group.is_playing("a"));
    }

    #[test]
    fn test_request_play_returns_siblings() {
        let mut group = group(&["a", "b"]);
        assert_eq!(group.request_play("a"), vec!["b".to_string()]);
        assert_eq!(group.request_play("b"), vec!["a".to_string()]);
        assert_eq!(group.playing(), Some("b"));
    }

    #[test]
    fn test_switching_players() {
        let mut group = group(&["a", "b"]);
        group.toggle("a", true);
        group.toggle("b", true);
        // The sibling's pause event arrives afterwards and must not clear b.
        group.mark_paused("a");
        assert_eq!(group.playing(), Some("b"));
    }

    #[test]
    fn test_click_while_playing_pauses() {
        let mut group = group(&["a"]);
        group.toggle("a", true);
        assert_eq!(group.toggle("a", false), PlaybackCommand::Pause);
        assert_eq!(group.state("a"), PlayState::Paused);
    }

    #[test]
    fn test_native_events_are_mirrored() {
        let mut group = group(&["a"]);
        group.mark_playing("a");
        assert!(group.is_playing("a"));
        group.mark_paused("a");
        assert!(!group.is_playing("a"));
    }

    #[test]
    fn test_single_member_group_has_no_siblings() {
        let mut group = group(&[LARGE_PLAYER_KEY]);
        assert_eq!(
            group.toggle(LARGE_PLAYER_KEY, true),
            PlaybackCommand::Play { pause: vec![] }
        );
    }

    #[test]
    fn test_sync_members_forgets_unrendered_player() {
        let mut group = group(&["a", "b"]);
        group.toggle("a", true);
        group.sync_members(["b"]);
        assert_eq!(group.playing(), None);
        assert_eq!(group.members(), &["b".to_string()]);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(30.0, 120.0), 25.0);
        assert_eq!(progress_percent(5.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(5.0, f64::INFINITY), 0.0);
        assert_eq!(progress_percent(5.0, 0.0), 0.0);
        assert_eq!(fill_width(60.0, 120.0), "50%");
        assert_eq!(fill_width(0.0, f64::NAN), "0%");
    }

    #[test]
    fn test_click_fraction() {
        assert_eq!(click_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(click_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(click_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(click_fraction(150.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_seek_position() {
        assert_eq!(seek_position(0.5, 200.0), Some(100.0));
        assert_eq!(seek_position(0.5, f64::NAN), None);
    }

    #[test]
    fn test_nudge_clamps() {
        assert_eq!(nudge(10.0, 60.0, SEEK_STEP_SECS), Some(15.0));
        assert_eq!(nudge(2.0, 60.0, -SEEK_STEP_SECS), Some(0.0));
        assert_eq!(nudge(58.0, 60.0, SEEK_STEP_SECS), Some(60.0));
        assert_eq!(nudge(1.0, f64::NAN, SEEK_STEP_SECS), None);
    }
}
