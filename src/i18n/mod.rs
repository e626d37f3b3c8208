// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the launcher.
//!
//! This module provides localization using the Fluent localization system.
//! Translation files are embedded at build time; lookup falls back to the
//! English bundle for locales whose translation has not landed yet.

pub mod fluent;
