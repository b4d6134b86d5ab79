// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for short-lived feedback ("copied", config problems,
//! dialer failures).
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - queueing and expiry
//! - [`toast`] - rendering

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
