//! Notifications
//!
//! Toast messages shown after mutations.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 3_000;

/// Receives user-facing outcome messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Active toasts
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Toast queue handle shared through the app context
#[derive(Clone, Copy)]
pub struct Toaster {
    store: Store<ToastState>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            store: Store::new(ToastState::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.store.toasts().get()
    }

    pub fn dismiss(&self, id: u64) {
        self.store.update(|state| state.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let Some(id) = self.store.try_update(|state| state.push(kind, message)) else {
            return;
        };
        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            toaster.dismiss(id);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        log::info!("[Toast] {}", message);
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        log::warn!("[Toast] {}", message);
        self.show(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        let a = state.push(ToastKind::Success, "Item Deleted successfully");
        let b = state.push(ToastKind::Error, "Something went wrong");
        assert!(b > a);
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut state = ToastState::default();
        let a = state.push(ToastKind::Success, "one");
        let b = state.push(ToastKind::Success, "two");
        state.dismiss(a);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].id, b);

        // Unknown ids are ignored
        state.dismiss(99);
        assert_eq!(state.toasts.len(), 1);
    }
}
