// SPDX-License-Identifier: MPL-2.0
//! Engine configuration: timing, screen anchor and capacity bounds.
//!
//! These options are given to the engine when it is created. They are not
//! part of [`Dispatcher::notify`](super::Dispatcher::notify); callers only
//! choose what to say, never how long it stays on screen.

use crate::config::defaults::{
    DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_MAX_QUEUED, DEFAULT_MAX_VISIBLE,
    DEFAULT_TOAST_DURATION_MS, MAX_ANIMATION_MS, MAX_MAX_QUEUED, MAX_MAX_VISIBLE,
    MAX_TOAST_DURATION_MS, MIN_MAX_QUEUED, MIN_MAX_VISIBLE, MIN_TOAST_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Screen anchor of the toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns true if the stack grows downward from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }

    fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown toast position: {s}"))
    }
}

/// Time a toast stays visible before it starts exiting.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
///
/// # Example
///
/// ```
/// use iced_toasts::notifications::ToastDuration;
///
/// let duration = ToastDuration::from_millis(2500);
/// assert_eq!(duration.as_millis(), 2500);
///
/// // Values outside range are clamped
/// let too_short = ToastDuration::from_millis(10);
/// assert_eq!(too_short.as_millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

/// Options recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// How long an entry stays visible once it has a slot.
    pub duration: ToastDuration,
    /// Fade-in time; an entry is `Entering` during this window.
    pub enter_duration: Duration,
    /// Fade-out time; an entry is `Exiting` during this window.
    pub exit_duration: Duration,
    /// Screen anchor of the stack.
    pub position: Position,
    /// Entries holding a visible slot at once.
    pub max_visible: usize,
    /// Entries waiting for a slot; the oldest is dropped beyond this.
    pub max_queued: usize,
}

impl EngineOptions {
    /// Returns a copy with every field clamped into its supported range.
    #[must_use]
    pub fn normalized(self) -> Self {
        let max_animation = Duration::from_millis(MAX_ANIMATION_MS);
        Self {
            duration: ToastDuration::from_millis(self.duration.as_millis()),
            enter_duration: self.enter_duration.min(max_animation),
            exit_duration: self.exit_duration.min(max_animation),
            position: self.position,
            max_visible: self.max_visible.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE),
            max_queued: self.max_queued.clamp(MIN_MAX_QUEUED, MAX_MAX_QUEUED),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: ToastDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets both animation windows at once.
    #[must_use]
    pub fn with_animation(mut self, enter: Duration, exit: Duration) -> Self {
        self.enter_duration = enter;
        self.exit_duration = exit;
        self
    }

    #[must_use]
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    #[must_use]
    pub fn with_max_queued(mut self, max_queued: usize) -> Self {
        self.max_queued = max_queued;
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            duration: ToastDuration::default(),
            enter_duration: Duration::from_millis(DEFAULT_ENTER_MS),
            exit_duration: Duration::from_millis(DEFAULT_EXIT_MS),
            position: Position::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            max_queued: DEFAULT_MAX_QUEUED,
        }
    }
}
