//! Hero typing animation as an explicit state machine.
//!
//! ```text
//! Typing --(phrase complete)--> Holding --> Deleting --(empty)--> Resting --> Typing (next phrase)
//! ```
//!
//! The UI calls [`Typewriter::tick`] and sleeps for the returned delay
//! before the next tick.

use std::time::Duration;

/// Delay between typed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Pause once a phrase is fully typed.
pub const HOLD_DELAY: Duration = Duration::from_millis(3000);
/// Delay between deleted characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(40);
/// Pause before typing the next phrase.
pub const REST_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
    Resting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    revealed: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            revealed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently displayed text.
    pub fn text(&self) -> String {
        self.current().chars().take(self.shown).collect()
    }

    /// The element stays hidden until the first character is typed.
    pub fn is_visible(&self) -> bool {
        self.revealed
    }

    /// Advance one step; returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return HOLD_DELAY;
        }
        match self.phase {
            Phase::Typing => self.type_char(),
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_char()
            }
            Phase::Deleting => self.delete_char(),
            Phase::Resting => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                self.type_char()
            }
        }
    }

    fn current(&self) -> &str {
        self.phrases.get(self.phrase).map(String::as_str).unwrap_or("")
    }

    fn type_char(&mut self) -> Duration {
        let len = self.current().chars().count();
        if self.shown < len {
            self.shown += 1;
            self.revealed = true;
        }
        if self.shown >= len {
            self.phase = Phase::Holding;
            HOLD_DELAY
        } else {
            TYPE_DELAY
        }
    }

    fn delete_char(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.phase = Phase::Resting;
            REST_DELAY
        } else {
            DELETE_DELAY
        }
    }
}
