// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Engine` owns the live entries, the overflow queue and the inbound
//! request channel. It limits the number of visible toasts, drives each
//! entry's scheduled task and hands out [`Dispatcher`]s.
//!
//! An engine only accepts notifications while a [`Host`](super::Host) has it
//! mounted. Anything dispatched before that is discarded.

use super::clock::{Clock, SystemClock};
use super::dispatcher::Dispatcher;
use super::entry::{EntryState, NotificationEntry, NotificationId, TaskAction};
use super::options::EngineOptions;
use super::request::NotificationRequest;
use crate::config::defaults::DEFAULT_CHANNEL_CAPACITY;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::debug;

/// Owns the notification collection and its timers.
#[derive(Debug)]
pub struct Engine {
    options: EngineOptions,
    clock: Box<dyn Clock>,
    /// Entries holding a visible slot, oldest first.
    visible: VecDeque<NotificationEntry>,
    /// Entries waiting for a slot, oldest first.
    queue: VecDeque<NotificationEntry>,
    next_id: u64,
    mounted: bool,
    request_tx: Sender<NotificationRequest>,
    request_rx: Receiver<NotificationRequest>,
}

impl Engine {
    /// Creates an unmounted engine driven by the system clock.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }

    /// Creates an unmounted engine driven by the given clock.
    #[must_use]
    pub fn with_clock(options: EngineOptions, clock: impl Clock + 'static) -> Self {
        let (request_tx, request_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            options: options.normalized(),
            clock: Box::new(clock),
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            next_id: 0,
            mounted: false,
            request_tx,
            request_rx,
        }
    }

    /// Creates a dispatcher feeding this engine.
    ///
    /// Dispatchers are cheap to clone and can be handed to any part of the
    /// application, including async tasks on other threads.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.request_tx.clone())
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Current time according to the engine's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Marks the engine mounted, dropping requests sent while it was not.
    pub(crate) fn mount(&mut self) {
        self.discard_pending();
        self.mounted = true;
    }

    /// Discards every entry and pending request without transitions.
    pub(crate) fn unmount(&mut self) {
        self.mounted = false;
        self.discard_pending();
        self.clear();
    }

    /// Creates an entry for `request`.
    ///
    /// If fewer than `max_visible` entries hold a slot, the entry is shown
    /// immediately. Otherwise it waits in the queue; when the queue is full
    /// the oldest queued entry is dropped.
    ///
    /// Returns `None` when no host has mounted the engine.
    pub fn push(&mut self, request: NotificationRequest) -> Option<NotificationId> {
        if !self.mounted {
            return None;
        }

        let now = self.clock.now();
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;
        let mut entry = NotificationEntry::new(id, request, now);

        if self.visible.len() < self.options.max_visible {
            entry.show(
                now,
                self.options.enter_duration,
                self.options.duration.as_duration(),
            );
            debug!("Showing notification {} ({})", id, entry.variant());
            self.visible.push_back(entry);
        } else {
            if self.queue.len() >= self.options.max_queued {
                if let Some(dropped) = self.queue.pop_front() {
                    debug!(
                        "Notification queue full, dropping {} ({} queued)",
                        dropped.id(),
                        self.queue.len() + 1
                    );
                }
            }
            debug!("Queueing notification {} ({})", id, entry.variant());
            self.queue.push_back(entry);
        }

        Some(id)
    }

    /// Drains requests sent through dispatchers, in the order they were sent.
    ///
    /// Returns the number of entries created. Requests are discarded while
    /// the engine is unmounted.
    pub fn process_pending(&mut self) -> usize {
        let mut created = 0;
        while let Ok(request) = self.request_rx.try_recv() {
            if self.push(request).is_some() {
                created += 1;
            }
        }
        created
    }

    /// Starts the exit of a notification by its ID.
    ///
    /// Queued entries were never shown and are dropped outright. Returns
    /// `true` if the call changed anything; dismissing an entry that is
    /// already exiting or gone is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        let exit = self.options.exit_duration;

        let started = self
            .visible
            .iter_mut()
            .find(|entry| entry.id() == id)
            .map(|entry| entry.begin_exit(now, exit));
        match started {
            Some(true) => {
                debug!("Dismissed notification {}", id);
                self.advance(now);
                return true;
            }
            Some(false) => return false,
            None => {}
        }

        if let Some(pos) = self.queue.iter().position(|entry| entry.id() == id) {
            self.queue.remove(pos);
            debug!("Dismissed queued notification {}", id);
            return true;
        }

        false
    }

    /// Fires every scheduled task that is due.
    ///
    /// Returns `true` if any entry changed state.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.advance(now)
    }

    /// Returns the entries holding a visible slot, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &NotificationEntry> {
        self.visible.iter()
    }

    /// Looks up a shown or queued entry.
    #[must_use]
    pub fn entry(&self, id: NotificationId) -> Option<&NotificationEntry> {
        self.visible
            .iter()
            .chain(self.queue.iter())
            .find(|entry| entry.id() == id)
    }

    /// Opacity of an entry at the current time.
    #[must_use]
    pub fn opacity(&self, entry: &NotificationEntry) -> f32 {
        entry.opacity(
            self.clock.now(),
            self.options.enter_duration,
            self.options.exit_duration,
        )
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn discard_pending(&mut self) {
        while self.request_rx.try_recv().is_ok() {}
    }

    fn advance(&mut self, now: Instant) -> bool {
        let duration = self.options.duration.as_duration();
        let exit = self.options.exit_duration;
        let mut changed = false;

        for entry in &mut self.visible {
            while let Some(task) = entry.take_due(now) {
                changed = true;
                match task.action {
                    TaskAction::Reveal => entry.reveal(task.due, duration),
                    TaskAction::Expire => {
                        entry.begin_exit(task.due, exit);
                    }
                    TaskAction::Remove => {
                        entry.mark_removed();
                        debug!("Removed notification {}", entry.id());
                    }
                }
            }
        }

        if changed {
            self.visible
                .retain(|entry| entry.state() != EntryState::Removed);
            self.promote_from_queue(now);
        }
        changed
    }

    /// Promotes queued entries while there is space.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < self.options.max_visible {
            let Some(mut entry) = self.queue.pop_front() else {
                break;
            };
            entry.show(
                now,
                self.options.enter_duration,
                self.options.duration.as_duration(),
            );
            debug!("Promoted notification {} from queue", entry.id());
            self.visible.push_back(entry);
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
