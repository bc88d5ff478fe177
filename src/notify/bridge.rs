use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Info => "Info",
        }
    }
}

/// A transient message for the presentation layer to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// How long the message should stay visible.
    pub display_for: Duration,
}

/// Sending half of the notification channel.
///
/// Cheap to clone; the UI layer, the persist task and the error watcher each hold one.
/// Delivery is best effort: once the receiver is gone, notifications are dropped.
///
/// The async signals wait for room in the channel. Background tasks that must never
/// stall on an undrained receiver use [`NotificationBridge::try_info`] instead.
#[derive(Debug, Clone)]
pub struct NotificationBridge {
    sender: mpsc::Sender<Notification>,
    display_for: Duration,
    clear_delay: Duration,
}

impl NotificationBridge {
    /// * `display_for` - stamped on every notification.
    /// * `clear_delay` - how long the error watcher waits before clearing the error slot.
    pub fn new(
        buffer_size: usize,
        display_for: Duration,
        clear_delay: Duration,
    ) -> (Self, mpsc::Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let bridge = Self {
            sender,
            display_for,
            clear_delay,
        };
        (bridge, receiver)
    }

    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    pub async fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message.into()).await;
    }

    pub async fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message.into()).await;
    }

    pub async fn info(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Info, message.into()).await;
    }

    /// Sends an info notification without waiting. Dropped if the channel is full.
    pub fn try_info(&self, message: impl Into<String>) {
        let notification = self.build(NotificationKind::Info, message.into());
        match self.sender.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => {
                warn!(message = %dropped.message, "Notification channel full, dropping notification");
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Notification receiver closed, dropping notification");
            }
        }
    }

    async fn notify(&self, kind: NotificationKind, message: String) {
        let notification = self.build(kind, message);
        if self.sender.send(notification).await.is_err() {
            debug!("Notification receiver closed, dropping notification");
        }
    }

    fn build(&self, kind: NotificationKind, message: String) -> Notification {
        debug!(?kind, %message, "Notify");
        Notification {
            kind,
            title: kind.title().to_string(),
            message,
            display_for: self.display_for,
        }
    }
}
