// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-dot state value.
//!
//! A [`Dot`] stores one [`DotState`] and nothing else. Any state may follow
//! any other: transition rules belong to whoever owns the dots (normally
//! [`DotIndicator`](crate::indicator::DotIndicator)), not to the dot itself.

use core::fmt;

/// Visual state of a single indicator dot.
///
/// The variants are ordered from smallest to largest visual scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DotState {
    /// Smallest scale, used for the outermost pages of a sliding window.
    Small,
    /// Intermediate scale, used next to the window edge.
    Medium,
    /// An unselected page at resting scale.
    Inactive,
    /// The currently selected page.
    Active,
}

impl DotState {
    /// Every state, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Inactive, Self::Active];

    /// Returns `true` for [`DotState::Active`].
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns a short stable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Inactive => "inactive",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for DotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position marker in a page indicator.
///
/// A dot has no index and no reference to its siblings; ordering is owned by
/// the collection that holds it. A dot always has a state: it is either given
/// one at construction or defaults to [`DotState::Inactive`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dot {
    state: DotState,
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(DotState::Inactive)
    }
}

impl Dot {
    /// Creates a dot in the given state.
    #[inline]
    #[must_use]
    pub const fn new(state: DotState) -> Self {
        Self { state }
    }

    /// Returns the stored state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> DotState {
        self.state
    }

    /// Replaces the stored state unconditionally.
    #[inline]
    pub fn set_state(&mut self, state: DotState) {
        self.state = state;
    }
}

impl From<DotState> for Dot {
    fn from(state: DotState) -> Self {
        Self::new(state)
    }
}
