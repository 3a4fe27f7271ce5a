// SPDX-License-Identifier: MPL-2.0
//! Live notification entries and their lifecycle.
//!
//! Every entry moves strictly forward through
//! `Entering -> Visible -> Exiting -> Removed`. The only deferred work an
//! entry carries is a single [`ScheduledTask`]; replacing or taking that task
//! is how timers get cancelled.

use super::request::{NotificationRequest, Variant};
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier assigned by the engine when an entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Entering,
    Visible,
    Exiting,
    Removed,
}

/// What a scheduled task does when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// Entering -> Visible.
    Reveal,
    /// Visible -> Exiting.
    Expire,
    /// Exiting -> Removed.
    Remove,
}

/// A fire-once timer stored alongside the entry it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask {
    pub due: Instant,
    pub action: TaskAction,
}

/// A notification owned by the engine.
#[derive(Debug, Clone)]
pub struct NotificationEntry {
    id: NotificationId,
    display_text: String,
    variant: Variant,
    created_at: Instant,
    shown_at: Option<Instant>,
    state: EntryState,
    task: Option<ScheduledTask>,
}

impl NotificationEntry {
    pub(crate) fn new(id: NotificationId, request: NotificationRequest, now: Instant) -> Self {
        Self {
            id,
            display_text: request.display_text().to_owned(),
            variant: request.variant(),
            created_at: now,
            shown_at: None,
            state: EntryState::Entering,
            task: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the entry got a visible slot; `None` while it waits in the queue.
    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    #[must_use]
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// The pending timer, if any.
    #[must_use]
    pub fn task(&self) -> Option<ScheduledTask> {
        self.task
    }

    /// Returns true while the entry still accepts a dismissal.
    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        matches!(self.state, EntryState::Entering | EntryState::Visible)
    }

    /// Gives the entry a visible slot and starts its timers.
    ///
    /// The display timeout always counts from `now`, so the entry starts
    /// exiting exactly `duration` later however long the fade-in is.
    pub(crate) fn show(&mut self, now: Instant, enter: Duration, duration: Duration) {
        self.shown_at = Some(now);
        if enter.is_zero() {
            self.state = EntryState::Visible;
            self.schedule(now + duration, TaskAction::Expire);
        } else {
            self.state = EntryState::Entering;
            self.schedule(now + enter.min(duration), TaskAction::Reveal);
        }
    }

    /// Takes the pending task if it is due at `now`.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<ScheduledTask> {
        match self.task {
            Some(task) if task.due <= now => self.task.take(),
            _ => None,
        }
    }

    /// Entering -> Visible, scheduling expiry relative to when it was shown.
    pub(crate) fn reveal(&mut self, at: Instant, duration: Duration) {
        if self.state != EntryState::Entering {
            return;
        }
        self.state = EntryState::Visible;
        let shown_at = self.shown_at.unwrap_or(at);
        self.schedule(shown_at + duration, TaskAction::Expire);
    }

    /// Starts the exit, cancelling whatever timer was pending.
    ///
    /// Shared by manual dismissal and auto-expiry. Returns false if the
    /// entry is already exiting or removed.
    pub(crate) fn begin_exit(&mut self, at: Instant, exit: Duration) -> bool {
        if !self.is_dismissible() {
            return false;
        }
        self.task = None;
        self.state = EntryState::Exiting;
        self.schedule(at + exit, TaskAction::Remove);
        true
    }

    pub(crate) fn mark_removed(&mut self) {
        self.task = None;
        self.state = EntryState::Removed;
    }

    /// Visual opacity in `0.0..=1.0` for fade animations.
    #[must_use]
    pub fn opacity(&self, now: Instant, enter: Duration, exit: Duration) -> f32 {
        match self.state {
            EntryState::Entering => match self.shown_at {
                Some(shown_at) if !enter.is_zero() => {
                    progress(now.saturating_duration_since(shown_at), enter)
                }
                Some(_) => 1.0,
                None => 0.0,
            },
            EntryState::Visible => 1.0,
            EntryState::Exiting => match self.task {
                Some(task) if !exit.is_zero() => {
                    progress(task.due.saturating_duration_since(now), exit)
                }
                _ => 0.0,
            },
            EntryState::Removed => 0.0,
        }
    }

    fn schedule(&mut self, due: Instant, action: TaskAction) {
        self.task = Some(ScheduledTask { due, action });
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
