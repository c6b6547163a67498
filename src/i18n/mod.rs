// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded in the binary and selected once at startup.
//!
//! # Features
//!
//! - Locale chosen from the `--lang` command line flag
//! - Simplified Chinese by default, English available
//! - Placeholder substitution through Fluent arguments

pub mod fluent;

/// Locale used when none is requested or the request is unavailable.
pub const DEFAULT_LOCALE: &str = "zh-CN";
