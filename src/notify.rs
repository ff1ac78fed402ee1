use std::cell::RefCell;
use std::collections::VecDeque;

/// Notices older than the newest MAX_PENDING are dropped unseen, the same
/// way a toast that was never read disappears.
const MAX_PENDING: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient status message for the user.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Collects transient status messages (the toast element of the page).
///
/// Components push into it; the host surface drains it, which dismisses
/// everything drained.
#[derive(Debug, Default)]
pub struct Notifier {
    pending: RefCell<VecDeque<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        match kind {
            NoticeKind::Success => tracing::info!("notice: {}", message),
            NoticeKind::Error => tracing::warn!("notice: {}", message),
        }
        let mut pending = self.pending.borrow_mut();
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(Notice { kind, message });
    }

    /// Takes every pending notice, leaving the queue empty.
    pub fn drain(&self) -> Vec<Notice> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}
