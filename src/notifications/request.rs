// SPDX-License-Identifier: MPL-2.0
//! Notification requests and their variants.
//!
//! A [`NotificationRequest`] is what application code hands to the
//! dispatcher. It is immutable once built and is consumed exactly once by
//! the engine, which turns it into a live entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity/style classifier chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Rendering path of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Variant {
    /// Maps the variant onto its rendering path.
    ///
    /// Destructive notifications take the error path; everything else is
    /// rendered as a success toast.
    #[must_use]
    pub fn kind(self) -> ToastKind {
        match self {
            Variant::Default => ToastKind::Success,
            Variant::Destructive => ToastKind::Error,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Default => f.write_str("default"),
            Variant::Destructive => f.write_str("destructive"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Variant::Default),
            "destructive" => Ok(Variant::Destructive),
            other => Err(format!("unknown notification variant: {other}")),
        }
    }
}

/// A request to show one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    message: String,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    variant: Variant,
}

impl NotificationRequest {
    /// Creates a request with the default variant.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
            variant: Variant::Default,
        }
    }

    /// Creates a destructive (error) request.
    pub fn destructive(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Destructive)
    }

    /// Adds secondary text, shown in place of the message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the detail text; an empty detail counts as absent.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref().filter(|detail| !detail.is_empty())
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Text the toast shows: the detail when present, otherwise the message.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.detail().unwrap_or(&self.message)
    }
}
