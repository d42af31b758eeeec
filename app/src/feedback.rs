//! Timed user-visible status messages.
//!
//! Each `show` schedules its own hide deadline; a superseding call replaces
//! the visible content but does not cancel deadlines already pending, so an
//! older deadline firing hides whatever message is current at that moment.
//! That race matches the original behavior and is accepted.

use std::time::{Duration, Instant};

/// How long a message stays visible absent a superseding call.
pub const HIDE_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct FeedbackPanel {
    current: Option<(String, Severity)>,
    hide_deadlines: Vec<Instant>,
}

impl FeedbackPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.show_at(Instant::now(), message, severity);
    }

    pub fn show_at(&mut self, now: Instant, message: impl Into<String>, severity: Severity) {
        self.current = Some((message.into(), severity));
        self.hide_deadlines.push(now + HIDE_DELAY);
    }

    /// Fire every deadline that has come due; any of them hides the panel.
    pub fn tick(&mut self, now: Instant) {
        let before = self.hide_deadlines.len();
        self.hide_deadlines.retain(|deadline| *deadline > now);
        if self.hide_deadlines.len() < before {
            self.current = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.current.as_ref().map(|(_, severity)| *severity)
    }
}
