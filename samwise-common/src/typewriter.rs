//! Hero headline typing animation.
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. The view calls [`Typewriter::tick`] and schedules
//! the next call after the returned delay.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1000);

pub const HERO_PHRASES: &[&str] = &["Speak powerfully.", "Grow continuously."];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// `phrases` must not be empty.
    pub fn new(phrases: &'static [&'static str]) -> Self {
        assert!(!phrases.is_empty(), "typewriter needs at least one phrase");
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn full(&self) -> &'static str {
        self.phrases[self.phrase]
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &'static str {
        let full = self.full();
        let end = full
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(full.len());
        &full[..end]
    }

    /// Advance one step; returns how long to wait before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.full().chars().count();
        if !self.deleting && self.shown == len {
            self.deleting = true;
            return HOLD_DELAY;
        }
        if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            return TYPE_DELAY;
        }
        if self.deleting {
            self.shown -= 1;
            DELETE_DELAY
        } else {
            self.shown += 1;
            TYPE_DELAY
        }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(HERO_PHRASES)
    }
}
