// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, failed sign-in, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`request`] - `NotificationRequest` and the `Variant` it carries
//! - [`entry`] - Live entries, their lifecycle state and scheduled task
//! - [`engine`] - `Engine` for queuing, timers and lifecycle management
//! - [`dispatcher`] - Fire-and-forget `Dispatcher` handle
//! - [`host`] - `Host` mount point with its messages and subscription
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::notifications::{Engine, EngineOptions, Host, NotificationRequest};
//!
//! // Create an engine and hand out dispatchers before mounting it
//! let engine = Engine::new(EngineOptions::default());
//! let dispatcher = engine.dispatcher();
//! let host = Host::mount(engine);
//!
//! // Anywhere in the application
//! dispatcher.notify(NotificationRequest::destructive("Upload failed"));
//!
//! // In your view function, render toasts
//! let toast_overlay = host.view().map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - One display duration for every variant (4s by default)
//! - Max visible toasts: 3 (others are queued, oldest dropped beyond 32)
//! - Position: bottom-right corner unless configured otherwise
//! - Entries fade in and out; a dismissed toast fades out before removal

pub mod clock;
pub mod dispatcher;
pub mod engine;
pub mod entry;
pub mod host;
pub mod options;
pub mod request;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatcher::Dispatcher;
pub use engine::Engine;
pub use entry::{EntryState, NotificationEntry, NotificationId, ScheduledTask, TaskAction};
pub use host::{Host, Message as NotificationMessage};
pub use options::{EngineOptions, Position, ToastDuration};
pub use request::{NotificationRequest, ToastKind, Variant};
pub use toast::{Toast, ToastStyle};
