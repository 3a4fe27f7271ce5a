// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification subsystem for the Iced GUI framework.
//!
//! Application code requests notifications through a cheap, cloneable
//! [`Dispatcher`](notifications::Dispatcher); a single
//! [`Host`](notifications::Host) mounted at the application root owns the
//! engine, expires toasts after a timeout and renders them in a screen corner.

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
