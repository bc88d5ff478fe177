//! # Notification Bridge
//!
//! The boundary between the store and whatever shows toasts to the user.
//!
//! Two sources feed the same channel:
//! - explicit signals ([`NotificationBridge::success`], [`error`](NotificationBridge::error),
//!   [`info`](NotificationBridge::info)) raised by the UI layer after an operation returns,
//!   or by the persist task when a save fails;
//! - [`watch_errors`], which observes the store's error slot and clears it shortly after
//!   reporting it.
//!
//! The bridge never changes store state except through `clear_error`.

pub mod bridge;
pub mod watcher;

pub use bridge::*;
pub use watcher::*;
