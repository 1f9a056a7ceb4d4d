use std::time::{Duration, Instant};
use tracing::debug;

pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_TTL
    }
}

/// Transient notifications, newest last.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        debug!(?kind, %message, "toast");
        self.toasts.push(Toast {
            kind,
            message,
            shown_at: now,
        });
    }

    /// Toasts still on screen at `now`; expired ones are dropped.
    pub fn visible(&mut self, now: Instant) -> &[Toast] {
        self.toasts.retain(|t| !t.is_expired(now));
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}
