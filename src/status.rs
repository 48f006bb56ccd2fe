//! Status Banner
//!
//! Transient success/error message shown at the top of a page. Each post
//! gets a ticket; the auto-dismiss timer only clears its own message.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-banner success",
            StatusKind::Error => "status-banner error",
            StatusKind::Info => "status-banner info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub ticket: u64,
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Clone)]
pub struct StatusBanner {
    current: RwSignal<Option<StatusMessage>>,
    next_ticket: Arc<AtomicU64>,
    timeout_ms: u32,
}

impl StatusBanner {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            next_ticket: Arc::new(AtomicU64::new(1)),
            timeout_ms,
        }
    }

    /// Tracked read for the banner view
    pub fn current(&self) -> Option<StatusMessage> {
        self.current.get()
    }

    /// Show a message without scheduling its removal
    pub fn post(&self, kind: StatusKind, text: impl Into<String>) -> u64 {
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        self.current.set(Some(StatusMessage { ticket, kind, text: text.into() }));
        ticket
    }

    /// Clear the banner if it still shows `ticket`
    pub fn dismiss(&self, ticket: u64) {
        let showing = self.current.with_untracked(|m| m.as_ref().map(|m| m.ticket));
        if showing == Some(ticket) {
            let _ = self.current.try_set(None);
        }
    }

    /// Show a message and drop it after the configured timeout
    pub fn flash(&self, kind: StatusKind, text: impl Into<String>) {
        let ticket = self.post(kind, text);
        let banner = self.clone();
        let timeout = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            banner.dismiss(ticket);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.flash(StatusKind::Success, text);
    }

    pub fn error(&self, err: &AppError) {
        if err.is_client_side() {
            log::debug!("rejected locally: {}", err);
        } else {
            log::warn!("{}", err);
        }
        self.flash(StatusKind::Error, err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_does_not_clear_newer_message() {
        let banner = StatusBanner::new(3_000);
        let first = banner.post(StatusKind::Success, "Saved");
        let second = banner.post(StatusKind::Error, "Save failed");

        banner.dismiss(first);
        let shown = banner.current.get_untracked().unwrap();
        assert_eq!(shown.ticket, second);
        assert_eq!(shown.text, "Save failed");

        banner.dismiss(second);
        assert!(banner.current.get_untracked().is_none());
    }
}
