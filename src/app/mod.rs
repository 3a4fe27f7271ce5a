// SPDX-License-Identifier: MPL-2.0
//! Demo application root.
//!
//! The `App` mounts the notification host once, keeps a dispatcher for its
//! own handlers and renders the toast overlay above a small control panel.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::notifications::{Dispatcher, Engine, Host, NotificationRequest, Variant};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Latency of the fake request started from the control panel.
const SIMULATED_LATENCY_MS: u64 = 1200;

/// Root Iced application state.
pub struct App {
    /// Toast notification host, mounted for the lifetime of the app.
    notifications: Host,
    dispatcher: Dispatcher,
    /// Number of notifications requested so far, used in demo texts.
    sent: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.notifications.engine().visible_count())
            .field("queued", &self.notifications.engine().queued_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Resolves the configuration from flags, falling back to defaults.
fn resolve_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) if path.exists() => config::load_from_path(path),
        Some(path) => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(Config::default())
        }
        None => config::load(),
    };

    let mut config = loaded.unwrap_or_else(|err| {
        warn!("Failed to load config: {}", err);
        Config::default()
    });
    if flags.duration_ms.is_some() {
        config.duration_ms = flags.duration_ms;
    }
    if flags.position.is_some() {
        config.position = flags.position;
    }
    config
}

pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = resolve_config(&flags);
        let engine = Engine::new(config.engine_options());
        let dispatcher = engine.dispatcher();
        let notifications = Host::mount(engine);
        info!("Demo started with {:?}", notifications.engine().options());

        let app = Self {
            notifications,
            dispatcher,
            sent: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications
            .subscription()
            .map(Message::Notification)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Notify(variant) => {
                self.sent += 1;
                let request = match variant {
                    Variant::Default => NotificationRequest::new("Changes saved")
                        .with_detail(format!("Revision {} stored", self.sent)),
                    Variant::Destructive => NotificationRequest::destructive("Save failed")
                        .with_detail(format!("Revision {} was rejected", self.sent)),
                };
                self.dispatcher.notify(request);
                Task::none()
            }
            Message::SimulateRequest => {
                self.sent += 1;
                let dispatcher = self.dispatcher.clone();
                let sent = self.sent;
                Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_millis(SIMULATED_LATENCY_MS)).await;
                        dispatcher.notify(
                            NotificationRequest::new("Request completed")
                                .with_detail(format!("Request {sent} answered")),
                        );
                    },
                    |()| Message::RequestFinished,
                )
            }
            Message::RequestFinished => Task::none(),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        };

        // Show anything dispatched during this update in the same frame.
        self.notifications.refresh();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::SM)
            .push(button(Text::new("Show success")).on_press(Message::Notify(Variant::Default)))
            .push(
                button(Text::new("Show error"))
                    .on_press(Message::Notify(Variant::Destructive)),
            )
            .push(button(Text::new("Simulate request")).on_press(Message::SimulateRequest));

        let engine = self.notifications.engine();
        let status = Text::new(format!(
            "{} visible, {} queued",
            engine.visible_count(),
            engine.queued_count()
        ))
        .size(typography::BODY);

        let panel = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Iced Toasts").size(typography::TITLE_MD))
            .push(controls)
            .push(status);

        let content = Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG);

        Stack::new()
            .push(content)
            .push(self.notifications.view().map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
