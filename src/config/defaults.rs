// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long a toast stays on screen
//! - **Animation**: Entry and exit fade durations
//! - **Capacity**: Visible slots, overflow queue and dispatch channel bounds
//! - **Host**: Tick interval of the host subscription

// ==========================================================================
// Display Duration Defaults
// ==========================================================================

/// Default time a toast stays visible before it starts exiting (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Minimum toast display duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum toast display duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default fade-in duration of a freshly shown toast (in milliseconds).
pub const DEFAULT_ENTER_MS: u64 = 150;

/// Default fade-out grace period before an exiting toast is removed (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 200;

/// Upper bound for both entry and exit animations (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE: usize = 10;

/// Default number of toasts waiting for a visible slot.
pub const DEFAULT_MAX_QUEUED: usize = 32;

/// Minimum overflow queue length.
pub const MIN_MAX_QUEUED: usize = 1;

/// Maximum overflow queue length.
pub const MAX_MAX_QUEUED: usize = 256;

/// Capacity of the channel between dispatchers and the engine.
/// Requests beyond this are dropped until the host drains the channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

// ==========================================================================
// Host Defaults
// ==========================================================================

/// Interval of the host tick that drains dispatches and fires timers (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Duration validation
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);

    // Animation validation
    assert!(DEFAULT_ENTER_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_ANIMATION_MS);
    assert!(MAX_ANIMATION_MS < MIN_TOAST_DURATION_MS * 3);

    // Capacity validation
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(MAX_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);
    assert!(MIN_MAX_QUEUED > 0);
    assert!(MAX_MAX_QUEUED >= MIN_MAX_QUEUED);
    assert!(DEFAULT_MAX_QUEUED >= MIN_MAX_QUEUED);
    assert!(DEFAULT_MAX_QUEUED <= MAX_MAX_QUEUED);
    assert!(DEFAULT_CHANNEL_CAPACITY > 0);

    // The host must tick well within the shortest toast lifetime
    assert!(TICK_INTERVAL_MS < MIN_TOAST_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 4000);
        assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
        assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    }

    #[test]
    fn animation_defaults_fit_inside_bounds() {
        assert!(DEFAULT_ENTER_MS <= MAX_ANIMATION_MS);
        assert!(DEFAULT_EXIT_MS <= MAX_ANIMATION_MS);
    }

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_VISIBLE, 3);
        assert!(DEFAULT_MAX_QUEUED >= DEFAULT_MAX_VISIBLE);
        assert!(DEFAULT_CHANNEL_CAPACITY >= DEFAULT_MAX_VISIBLE);
    }
}
