pub mod notification_panel;
pub mod right;

pub use notification_panel::NotificationPanel;
pub use right::Right;
