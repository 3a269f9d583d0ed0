use crate::{
    constants::{SWAP_FAILED_TITLE, TOAST_LIMIT},
    Error,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastSeverity {
    #[default]
    Default,
    Destructive,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub severity: ToastSeverity,
}

/// Notifications currently on screen, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u32,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::with_capacity(limit),
            next_id: 0,
            limit,
        }
    }

    /// Adds a toast and returns its id. The oldest toast is dropped when full.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: ToastSeverity,
    ) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        self.toasts.push_front(Toast {
            id,
            title: title.into(),
            description: description.into(),
            severity,
        });
        self.toasts.truncate(self.limit);

        id
    }

    /// Every failed swap is announced the same way: a destructive toast carrying
    /// the failure message.
    pub fn push_failure(&mut self, error: &Error) -> u32 {
        self.push(SWAP_FAILED_TITLE, error.message(), ToastSeverity::Destructive)
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
