// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every control action that changes a user-facing mode reports the new
//! state through a toast. The channel holds a single slot: a newer
//! message replaces the pending one and resets its expiry, so the user
//! only ever sees the latest feedback.

mod channel;
mod notification;
mod toast;

pub use channel::Channel;
pub use notification::{Icon, Notification};
pub use toast::view as toast_view;
