// SPDX-License-Identifier: MPL-2.0
//! `launchdeck` is a lightweight application launcher built with the Iced GUI
//! framework.
//!
//! It demonstrates internationalization with Fluent, locale-aware window
//! chrome (right-to-left mirroring, script-specific font fallback), and user
//! preference management.

#![doc(html_root_url = "https://docs.rs/launchdeck/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod ui;
