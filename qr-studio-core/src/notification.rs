//! Transient notification channel
//!
//! Short-lived messages for submit / download / share outcomes. Entries expire
//! after a TTL (≈3s by default) and are never part of the request state.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default time a notification stays visible
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Maximum number of notifications kept at once
pub const MAX_VISIBLE: usize = 5;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Queue of active notifications, oldest first
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    items: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
            next_id: 1,
        }
    }

    /// Push a notification created now
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, Instant::now())
    }

    /// Push a notification with an explicit creation time
    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        created_at: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.items.len() == MAX_VISIBLE {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            id,
            kind,
            message: message.into(),
            created_at,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Info, message)
    }

    /// Drop expired entries; returns whether anything was removed
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
        before != self.items.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
