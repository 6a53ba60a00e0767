// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by indicator configuration and page selection.
//!
//! [`Dot`](crate::dot::Dot) operations cannot fail; only the controller
//! rejects input.

use core::fmt;

/// Errors from building an [`IndicatorConfig`](crate::config::IndicatorConfig)
/// or [`DotSizes`](crate::config::DotSizes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The visible window is smaller than the sliding layout needs.
    TooFewVisibleDots {
        /// Requested number of visible dots.
        requested: usize,
        /// Smallest accepted number of visible dots.
        minimum: usize,
    },
    /// Dot sizes do not shrink from active to small.
    UnorderedSizes,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVisibleDots { requested, minimum } => write!(
                f,
                "visible dot count cannot be smaller than {minimum} (got {requested})"
            ),
            Self::UnorderedSizes => {
                f.write_str("dot sizes must satisfy active >= inactive >= medium >= small")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors from [`DotIndicator::select_page`](crate::indicator::DotIndicator::select_page).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageError {
    /// The page is not below the page count.
    OutOfRange {
        /// Requested page.
        page: usize,
        /// Current page count.
        page_count: usize,
    },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { page, page_count } => {
                write!(f, "page {page} out of range for {page_count} pages")
            }
        }
    }
}

impl core::error::Error for PageError {}
