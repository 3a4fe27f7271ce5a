// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads an optional flag, ignoring values that do not parse.
fn opt_flag<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            warn!("Ignoring {}: {}", key, err);
            None
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_toasts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_path: opt_flag(&mut args, "--config"),
        duration_ms: opt_flag(&mut args, "--duration"),
        position: opt_flag(&mut args, "--position"),
    };

    app::run(flags)
}
