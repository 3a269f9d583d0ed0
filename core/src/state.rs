use crate::{
    constants::*,
    types::ToastQueue,
    Error,
};
use leptos::prelude::*;
use std::time::Duration;
use tracing::trace;

/// Tunables for the swap form, provided once by the app shell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwapConfig {
    pub multiplier: f64,
    pub settlement_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            multiplier: DISCOUNT_MULTIPLIER,
            settlement_delay: SETTLEMENT_DELAY,
            toast_duration: TOAST_DURATION,
        }
    }
}

#[derive(Copy, Clone)]
pub struct Toasts {
    pub queue: RwSignal<ToastQueue>,
    pub duration: StoredValue<Duration>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration: StoredValue::new(duration),
        }
    }

    /// Shows the toast for a failed swap and schedules its removal.
    pub fn push_failure(&self, error: &Error) -> u32 {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push_failure(error));

        let queue = self.queue;
        set_timeout(
            move || {
                trace!("toast {id} expired");
                queue.update(|queue| {
                    queue.dismiss(id);
                });
            },
            self.duration.get_value(),
        );

        id
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}
