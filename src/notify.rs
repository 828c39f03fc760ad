//! User-facing notifications.
//!
//! The store reports mutation and fetch outcomes as [`Toast`]s through a
//! [`Notifier`]. Rendering them (toast, snackbar, status line) is up to the app.

use tracing;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    FetchFailed,
    Added,
    AddFailed,
    Removed,
    RemoveFailed,
}

impl ToastKind {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::AddFailed | Self::RemoveFailed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FetchFailed => "Failed to load watchlist",
            Self::Added => "Added",
            Self::AddFailed => "Failed to add",
            Self::Removed => "Removed",
            Self::RemoveFailed => "Failed to remove",
        }
    }
}

/// Icon hint, matching the host toast API (`success` / `none`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastIcon {
    Success,
    None,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub icon: ToastIcon,
}

impl Toast {
    pub fn new(kind: ToastKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            icon: if kind.is_failure() {
                ToastIcon::None
            } else {
                ToastIcon::Success
            },
        }
    }
}

impl From<ToastKind> for Toast {
    fn from(kind: ToastKind) -> Self {
        Toast::new(kind)
    }
}

/// Presentation collaborator. Must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

/// Logs every toast through `tracing`. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: &Toast) {
        tracing::info!(kind = ?toast.kind, icon = ?toast.icon, "{}", toast.title);
    }
}

/// Drops every toast.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _toast: &Toast) {}
}
