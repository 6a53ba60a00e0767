// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-update change reports.
//!
//! Every mutating [`DotIndicator`](crate::indicator::DotIndicator) call
//! returns a [`DotChanges`] describing what a host must redraw. Positions are
//! strip indices (0 = leftmost visible dot), not page numbers.
//!
//! When the window slid or the strip was rebuilt, every position is reported:
//! dots moved under their indices, so per-index diffing is meaningless. A host
//! that animates slides reads [`DotChanges::shift`] to pick a direction.

use alloc::vec::Vec;

/// Direction the visible window moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Toward lower pages; dots appear to move right.
    Left,
    /// Toward higher pages; dots appear to move left.
    Right,
}

/// A slide of the visible window during one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowShift {
    /// Which way the window moved.
    pub direction: ShiftDirection,
    /// How many pages it moved.
    pub pages: usize,
}

/// What changed during one indicator update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DotChanges {
    /// Strip indices whose dot must be redrawn, ascending.
    pub changed: Vec<usize>,
    /// Set when the visible window slid.
    pub shift: Option<WindowShift>,
    /// Set when the strip was rebuilt from scratch.
    pub rebuilt: bool,
}

impl DotChanges {
    /// Returns `true` if nothing needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.shift.is_none() && !self.rebuilt
    }

    /// Iterates over the changed strip indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.changed.iter().copied()
    }

    /// Returns `true` if the dot at `index` must be redrawn.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.changed.binary_search(&index).is_ok()
    }

    pub(crate) fn all(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    /// Folds a shift of one page into the running total.
    pub(crate) fn record_shift(&mut self, direction: ShiftDirection) {
        match &mut self.shift {
            Some(shift) if shift.direction == direction => shift.pages += 1,
            Some(shift) => {
                // Opposite steps cancel out.
                shift.pages -= 1;
                if shift.pages == 0 {
                    self.shift = None;
                }
            }
            None => {
                self.shift = Some(WindowShift {
                    direction,
                    pages: 1,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(DotChanges::default().is_empty());
    }

    #[test]
    fn shifts_accumulate() {
        let mut changes = DotChanges::default();
        changes.record_shift(ShiftDirection::Right);
        changes.record_shift(ShiftDirection::Right);
        assert_eq!(
            changes.shift,
            Some(WindowShift {
                direction: ShiftDirection::Right,
                pages: 2,
            })
        );
        changes.record_shift(ShiftDirection::Left);
        assert_eq!(changes.shift.map(|s| s.pages), Some(1));
        changes.record_shift(ShiftDirection::Left);
        assert_eq!(changes.shift, None);
    }

    #[test]
    fn contains_uses_sorted_indices() {
        let changes = DotChanges {
            changed: alloc::vec![1, 3, 4],
            shift: None,
            rebuilt: false,
        };
        assert!(changes.contains(3));
        assert!(!changes.contains(2));
        assert_eq!(changes.iter().count(), 3);
    }
}
