// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: the player pane with its control bar and seek
//! bar, the playlist/history sidebar, toast notifications, icons, and
//! theming.

pub mod controls;
pub mod icons;
pub mod notifications;
pub mod player_pane;
pub mod seek_bar;
pub mod sidebar;
pub mod theme;
