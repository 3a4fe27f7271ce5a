// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{NotificationMessage, Position, Variant};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dispatch a notification of the given variant right away.
    Notify(Variant),
    /// Start a fake network request that reports back through a dispatcher.
    SimulateRequest,
    /// The fake request finished; its notification was already dispatched.
    RequestFinished,
    Notification(NotificationMessage),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Config file to read instead of the platform default.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured display duration (in milliseconds).
    pub duration_ms: Option<u64>,
    /// Overrides the configured screen anchor.
    pub position: Option<Position>,
}
