//! Push notification channels.

use strato_core::error::Result;

use crate::dispatch::PendingJson;

use super::Strato;

/// Notification layouts supported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    TileText,
    TileImageText,
    ToastText,
    ToastTextSubtitle,
    ToastImageText,
}

impl NotificationType {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::TileText => "tile-text",
            NotificationType::TileImageText => "tile-image-text",
            NotificationType::ToastText => "toast-text-01",
            NotificationType::ToastTextSubtitle => "toast-text-02",
            NotificationType::ToastImageText => "toast-image-text-02",
        }
    }
}

impl Strato {
    /// Subscribe this device to a notification channel. Every device is
    /// implicitly on the `all` channel; `channel` adds one more.
    pub fn notification_subscribe(
        &self,
        device_key: &str,
        network: &str,
        channel: Option<&str>,
    ) -> Result<PendingJson> {
        let mut request = self
            .request("notifications-register", "notifications-register")?
            .field("action", "subscribe")
            .field("device_key", device_key)
            .field("device_network", network);
        if let Some(channel) = channel {
            request = request.field("channel", channel);
        }
        Ok(self.dispatcher.submit(request))
    }

    /// Unsubscribe from a channel; `from_all` removes the device from the
    /// `all` channel as well.
    pub fn notification_unsubscribe(
        &self,
        device_key: &str,
        network: &str,
        channel: &str,
        from_all: bool,
    ) -> Result<PendingJson> {
        let mut request = self
            .request("notifications-register", "notifications-register")?
            .field("action", "unsubscribe")
            .field("device_key", device_key)
            .field("device_network", network)
            .field("channel", channel);
        if from_all {
            request = request.field("from_all", "true");
        }
        Ok(self.dispatcher.submit(request))
    }

    /// Push a notification to every device on a channel.
    pub fn send_notification(
        &self,
        kind: NotificationType,
        channel: &str,
        title: &str,
        subtitle: &str,
        image_uri: &str,
    ) -> Result<PendingJson> {
        let request = self
            .request("notifications", "notifications")?
            .field("channel", channel)
            .field("win_type", kind.as_str())
            .field("alert", title)
            .field("alert2", subtitle)
            .field("image_uri", image_uri);
        Ok(self.dispatcher.submit(request))
    }
}
