// SPDX-License-Identifier: MPL-2.0
//! The mount point rendering all active notifications.
//!
//! Mounting moves the engine into the host, so one engine can back at most
//! one host. Application code keeps only [`Dispatcher`]s.

use super::dispatcher::Dispatcher;
use super::engine::Engine;
use super::entry::NotificationId;
use super::toast::Toast;
use crate::config::defaults::TICK_INTERVAL_MS;
use iced::{time, Element, Subscription};
use std::time::Duration;
use tracing::debug;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for draining dispatches and firing timers.
    Tick,
}

/// A mounted notification engine.
#[derive(Debug)]
pub struct Host {
    engine: Engine,
}

impl Host {
    /// Mounts `engine`. Anything dispatched before this point is dropped.
    #[must_use]
    pub fn mount(mut engine: Engine) -> Self {
        engine.mount();
        debug!(
            "Notification host mounted at {} (max {} visible)",
            engine.options().position,
            engine.options().max_visible
        );
        Self { engine }
    }

    /// Unmounts the host, discarding every entry without transitions.
    ///
    /// The returned engine can be mounted again; its dispatchers stay valid.
    pub fn unmount(mut self) -> Engine {
        self.engine.unmount();
        debug!("Notification host unmounted");
        self.engine
    }

    /// Read-only view of the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        self.engine.dispatcher()
    }

    /// Drains pending dispatches and fires due timers.
    ///
    /// Returns `true` if the rendered output may have changed.
    pub fn refresh(&mut self) -> bool {
        let created = self.engine.process_pending();
        let changed = self.engine.tick();
        created > 0 || changed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.engine.dismiss(*id);
            }
            Message::Tick => {
                self.refresh();
            }
        }
    }

    /// Periodic tick while mounted.
    ///
    /// Dispatchers may be used from async tasks that never pass through the
    /// application's update loop, so the tick runs even with no entries.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick)
    }

    /// Renders the toast overlay.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(&self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{
        EngineOptions, EntryState, ManualClock, NotificationRequest, ToastDuration,
    };

    fn engine(clock: &ManualClock) -> Engine {
        Engine::with_clock(
            EngineOptions::default()
                .with_duration(ToastDuration::from_millis(2000))
                .with_animation(Duration::ZERO, Duration::from_millis(200)),
            clock.clone(),
        )
    }

    #[test]
    fn mount_marks_engine_mounted() {
        let host = Host::mount(Engine::default());
        assert!(host.engine().is_mounted());
    }

    #[test]
    fn empty_host_refresh_changes_nothing() {
        let mut host = Host::mount(Engine::default());
        assert!(!host.refresh());
        assert!(!host.engine().has_notifications());
        let _ = host.view();
    }

    #[test]
    fn tick_message_drains_dispatches() {
        let clock = ManualClock::new();
        let mut host = Host::mount(engine(&clock));
        host.dispatcher().notify_message("Saved");

        host.handle_message(&Message::Tick);
        assert_eq!(host.engine().visible_count(), 1);
    }

    #[test]
    fn dismiss_message_starts_exit() {
        let clock = ManualClock::new();
        let mut host = Host::mount(engine(&clock));
        host.dispatcher().notify_message("Saved");
        host.refresh();
        let id = host.engine().entries().next().map(|e| e.id()).expect("entry");

        host.handle_message(&Message::Dismiss(id));
        assert_eq!(
            host.engine().entry(id).map(|e| e.state()),
            Some(EntryState::Exiting)
        );

        clock.advance(Duration::from_millis(200));
        host.handle_message(&Message::Tick);
        assert!(host.engine().entry(id).is_none());
    }

    #[test]
    fn unmount_discards_entries_and_returns_engine() {
        let clock = ManualClock::new();
        let mut host = Host::mount(engine(&clock));
        let dispatcher = host.dispatcher();
        dispatcher.notify_message("Saved");
        host.refresh();

        let engine = host.unmount();
        assert!(!engine.is_mounted());
        assert!(!engine.has_notifications());

        dispatcher.notify_message("while unmounted");
        let mut host = Host::mount(engine);
        host.refresh();
        assert!(!host.engine().has_notifications());

        dispatcher.notify(NotificationRequest::new("after remount"));
        host.refresh();
        assert_eq!(host.engine().visible_count(), 1);
    }
}
