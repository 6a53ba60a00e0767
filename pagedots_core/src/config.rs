// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator configuration.
//!
//! [`IndicatorConfig`] sets how many dots are visible at once. When a strip
//! has more pages than that, the indicator slides a window over the pages and
//! shrinks the dots at its edges; the sliding layout needs at least
//! [`MIN_VISIBLE_DOTS`] positions to fit two shrunk dots on each side plus
//! the active one.
//!
//! [`DotSizes`] maps each [`DotState`] to a visual scale. Sizes are in
//! abstract units; hosts convert them to pixels or points.

use crate::dot::DotState;
use crate::error::ConfigError;

/// Smallest accepted visible window.
pub const MIN_VISIBLE_DOTS: usize = 6;

/// Visible window used by [`IndicatorConfig::default`].
pub const DEFAULT_VISIBLE_DOTS: usize = MIN_VISIBLE_DOTS;

/// Per-state dot diameters plus the gap between neighbouring dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DotSizes {
    /// Diameter of the active dot.
    pub active: u32,
    /// Diameter of an inactive dot.
    pub inactive: u32,
    /// Diameter of a medium dot.
    pub medium: u32,
    /// Diameter of a small dot.
    pub small: u32,
    /// Gap after each dot.
    pub margin: u32,
}

impl Default for DotSizes {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DotSizes {
    /// Default sizes: 8 / 6 / 4 / 2 with a gap of 4.
    pub const STANDARD: Self = Self {
        active: 8,
        inactive: 6,
        medium: 4,
        small: 2,
        margin: 4,
    };

    /// Returns the diameter used for `state`.
    #[must_use]
    pub const fn diameter(&self, state: DotState) -> u32 {
        match state {
            DotState::Active => self.active,
            DotState::Inactive => self.inactive,
            DotState::Medium => self.medium,
            DotState::Small => self.small,
        }
    }

    /// Returns half the diameter, rounded down.
    #[must_use]
    pub const fn radius(&self, state: DotState) -> u32 {
        self.diameter(state) / 2
    }

    /// Returns the diameter plus the trailing gap.
    #[must_use]
    pub const fn pitch(&self, state: DotState) -> u32 {
        self.diameter(state).saturating_add(self.margin)
    }

    /// Checks that sizes shrink from active to small.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.active >= self.inactive && self.inactive >= self.medium && self.medium >= self.small
        {
            Ok(())
        } else {
            Err(ConfigError::UnorderedSizes)
        }
    }
}

/// Configuration for a [`DotIndicator`](crate::indicator::DotIndicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndicatorConfig {
    visible_dots: usize,
    sizes: DotSizes,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            visible_dots: DEFAULT_VISIBLE_DOTS,
            sizes: DotSizes::STANDARD,
        }
    }
}

impl IndicatorConfig {
    /// Creates a config with `visible_dots` positions and standard sizes.
    pub const fn new(visible_dots: usize) -> Result<Self, ConfigError> {
        if visible_dots < MIN_VISIBLE_DOTS {
            return Err(ConfigError::TooFewVisibleDots {
                requested: visible_dots,
                minimum: MIN_VISIBLE_DOTS,
            });
        }
        Ok(Self {
            visible_dots,
            sizes: DotSizes::STANDARD,
        })
    }

    /// Replaces the dot sizes after validating them.
    pub const fn with_sizes(mut self, sizes: DotSizes) -> Result<Self, ConfigError> {
        if let Err(e) = sizes.validate() {
            return Err(e);
        }
        self.sizes = sizes;
        Ok(self)
    }

    /// Maximum number of dots shown at once.
    #[must_use]
    pub const fn visible_dots(&self) -> usize {
        self.visible_dots
    }

    /// Per-state dot sizes.
    #[must_use]
    pub const fn sizes(&self) -> &DotSizes {
        &self.sizes
    }
}
