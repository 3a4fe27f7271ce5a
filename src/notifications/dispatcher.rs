// SPDX-License-Identifier: MPL-2.0
//! The call surface application code uses to request notifications.

use super::request::NotificationRequest;
use crossbeam_channel::Sender;

/// Handle for sending notification requests to an engine.
///
/// This handle is cheap to clone and can be shared across threads.
/// Requests are sent via a bounded channel so callers never block.
///
/// # Example
///
/// ```
/// use iced_toasts::notifications::{Engine, Host, NotificationRequest};
///
/// let engine = Engine::default();
/// let dispatcher = engine.dispatcher();
/// let mut host = Host::mount(engine);
///
/// dispatcher.notify(NotificationRequest::new("Saved").with_detail("Profile updated"));
/// host.refresh();
///
/// let texts: Vec<&str> = host.engine().entries().map(|e| e.display_text()).collect();
/// assert_eq!(texts, ["Profile updated"]);
/// ```
#[derive(Clone, Debug)]
pub struct Dispatcher {
    request_tx: Sender<NotificationRequest>,
}

impl Dispatcher {
    pub(crate) fn new(request_tx: Sender<NotificationRequest>) -> Self {
        Self { request_tx }
    }

    /// Requests a notification.
    ///
    /// Fire-and-forget: the request is dropped silently if the channel is
    /// full, if the engine is gone, or if no host has mounted the engine by
    /// the time it is drained.
    pub fn notify(&self, request: NotificationRequest) {
        let _ = self.request_tx.try_send(request);
    }

    /// Shorthand for a default notification with only a message.
    pub fn notify_message(&self, message: impl Into<String>) {
        self.notify(NotificationRequest::new(message));
    }

    /// Shorthand for a destructive notification with a detail line.
    pub fn notify_error(&self, message: impl Into<String>, detail: impl Into<String>) {
        self.notify(NotificationRequest::destructive(message).with_detail(detail));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Engine, Host, Variant};

    #[test]
    fn notify_after_engine_dropped_does_not_panic() {
        let dispatcher = Engine::default().dispatcher();
        dispatcher.notify_message("nobody is listening");
    }

    #[test]
    fn notify_beyond_channel_capacity_drops_silently() {
        let engine = Engine::default();
        let dispatcher = engine.dispatcher();
        let mut host = Host::mount(engine);

        for i in 0..1000 {
            dispatcher.notify_message(format!("flood-{i}"));
        }
        host.refresh();

        assert!(host.engine().has_notifications());
    }

    #[test]
    fn notify_error_builds_destructive_request_with_detail() {
        let engine = Engine::default();
        let dispatcher = engine.dispatcher();
        let mut host = Host::mount(engine);

        dispatcher.notify_error("Sign-in failed", "Wrong password");
        host.refresh();

        let entry = host.engine().entries().next().expect("one entry");
        assert_eq!(entry.display_text(), "Wrong password");
        assert_eq!(entry.variant(), Variant::Destructive);
    }

    #[test]
    fn cloned_dispatchers_feed_the_same_engine() {
        let engine = Engine::default();
        let first = engine.dispatcher();
        let second = first.clone();
        let mut host = Host::mount(engine);

        first.notify_message("one");
        second.notify_message("two");
        host.refresh();

        assert_eq!(host.engine().visible_count(), 2);
    }

    #[test]
    fn dispatcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dispatcher>();
    }
}
