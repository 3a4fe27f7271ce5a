// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config};
use iced_toasts::notifications::{
    Engine, EngineOptions, EntryState, Host, ManualClock, NotificationMessage,
    NotificationRequest, Toast, ToastDuration, ToastKind, Variant,
};
use std::time::Duration;
use tempfile::tempdir;

const SHOW: Duration = Duration::from_millis(2500);

fn options() -> EngineOptions {
    EngineOptions::default()
        .with_duration(ToastDuration::from_millis(2500))
        .with_animation(Duration::ZERO, Duration::ZERO)
}

fn mounted_host(options: EngineOptions) -> (Host, ManualClock) {
    let clock = ManualClock::new();
    let host = Host::mount(Engine::with_clock(options, clock.clone()));
    (host, clock)
}

fn rendered_texts(host: &Host) -> Vec<String> {
    host.engine()
        .entries()
        .map(|entry| entry.display_text().to_owned())
        .collect()
}

#[test]
fn detail_text_is_rendered_instead_of_message() {
    let (mut host, _clock) = mounted_host(options());
    let dispatcher = host.dispatcher();

    dispatcher.notify(NotificationRequest::new("Saved").with_detail("Avatar uploaded"));
    dispatcher.notify(NotificationRequest::new("Copied"));
    dispatcher.notify(NotificationRequest::new("Linked").with_detail(""));
    host.refresh();

    assert_eq!(rendered_texts(&host), ["Avatar uploaded", "Copied", "Linked"]);
}

#[test]
fn destructive_requests_take_the_error_path() {
    let (mut host, _clock) = mounted_host(options());
    let dispatcher = host.dispatcher();

    dispatcher.notify(NotificationRequest::destructive("Sign-in failed"));
    dispatcher.notify(NotificationRequest::new("Signed out"));
    host.refresh();

    let kinds: Vec<ToastKind> = host
        .engine()
        .entries()
        .map(|entry| entry.variant().kind())
        .collect();
    assert_eq!(kinds, [ToastKind::Error, ToastKind::Success]);

    let styles: Vec<_> = host
        .engine()
        .entries()
        .map(|entry| Toast::style_for(entry.variant()))
        .collect();
    assert_eq!(styles[0], Toast::style_for(Variant::Destructive));
    assert_eq!(styles[1], Toast::style_for(Variant::Default));
}

#[test]
fn dispatches_in_one_tick_keep_fifo_order() {
    let (mut host, _clock) = mounted_host(options());
    let dispatcher = host.dispatcher();

    dispatcher.notify_message("D1");
    dispatcher.notify_message("D2");
    dispatcher.notify_message("D3");
    host.handle_message(&NotificationMessage::Tick);

    assert_eq!(rendered_texts(&host), ["D1", "D2", "D3"]);
}

#[test]
fn entry_is_removed_exactly_when_timeout_elapses() {
    let (mut host, clock) = mounted_host(options());
    host.dispatcher().notify_message("Saved");
    host.refresh();

    clock.advance(SHOW - Duration::from_millis(1));
    host.handle_message(&NotificationMessage::Tick);
    assert_eq!(rendered_texts(&host), ["Saved"]);

    clock.advance(Duration::from_millis(1));
    host.handle_message(&NotificationMessage::Tick);
    assert!(rendered_texts(&host).is_empty());
    assert!(!host.engine().has_notifications());
}

#[test]
fn dismissing_after_the_timer_fired_is_harmless() {
    let exit = Duration::from_millis(300);
    let (mut host, clock) =
        mounted_host(options().with_animation(Duration::ZERO, exit).with_max_visible(1));
    let dispatcher = host.dispatcher();
    dispatcher.notify_message("first");
    dispatcher.notify_message("second");
    host.refresh();
    let first = host.engine().entries().next().map(|e| e.id()).expect("entry");

    // Manual dismissal, then the exit timer fires.
    host.handle_message(&NotificationMessage::Dismiss(first));
    clock.advance(exit);
    host.handle_message(&NotificationMessage::Tick);
    assert_eq!(rendered_texts(&host), ["second"]);

    // A late duplicate dismissal changes nothing.
    host.handle_message(&NotificationMessage::Dismiss(first));
    assert_eq!(rendered_texts(&host), ["second"]);
    assert_eq!(
        host.engine().entries().next().map(|e| e.state()),
        Some(EntryState::Visible)
    );
}

#[test]
fn notify_without_host_leaves_nothing_behind() {
    let clock = ManualClock::new();
    let engine = Engine::with_clock(options(), clock);
    let dispatcher = engine.dispatcher();

    dispatcher.notify_message("before mount");
    dispatcher.notify(NotificationRequest::destructive("also before mount"));

    let mut host = Host::mount(engine);
    host.refresh();
    assert!(!host.engine().has_notifications());

    dispatcher.notify_message("after mount");
    host.refresh();
    assert_eq!(rendered_texts(&host), ["after mount"]);
}

#[test]
fn overflow_waits_for_a_visible_slot() {
    let (mut host, clock) = mounted_host(options().with_max_visible(2));
    let dispatcher = host.dispatcher();
    for name in ["a", "b", "c", "d"] {
        dispatcher.notify_message(name);
    }
    host.refresh();

    assert_eq!(rendered_texts(&host), ["a", "b"]);
    assert_eq!(host.engine().queued_count(), 2);

    clock.advance(SHOW);
    host.refresh();
    assert_eq!(rendered_texts(&host), ["c", "d"]);
    assert_eq!(host.engine().queued_count(), 0);
}

#[tokio::test]
async fn dispatcher_works_from_spawned_tasks() {
    let (mut host, _clock) = mounted_host(options());
    let dispatcher = host.dispatcher();

    let handle = tokio::spawn(async move {
        dispatcher.notify(NotificationRequest::new("Uploaded").with_detail("3 files"));
    });
    handle.await.expect("task panicked");

    host.refresh();
    assert_eq!(rendered_texts(&host), ["3 files"]);
}

#[test]
fn config_file_drives_engine_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let stored = Config {
        duration_ms: Some(1500),
        max_visible: Some(1),
        ..Config::default()
    };
    config::save_to_path(&stored, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let clock = ManualClock::new();
    let mut host = Host::mount(Engine::with_clock(loaded.engine_options(), clock.clone()));
    host.dispatcher().notify_message("one");
    host.dispatcher().notify_message("two");
    host.refresh();

    assert_eq!(host.engine().visible_count(), 1);
    assert_eq!(host.engine().queued_count(), 1);

    dir.close().expect("Failed to close temporary directory");
}
