// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The indicator controller.
//!
//! [`DotIndicator`] owns one [`Dot`] per visible position and is the only
//! thing that writes their states. It upholds the invariants a [`Dot`] cannot
//! see on its own:
//!
//! - a non-empty strip has exactly one [`DotState::Active`] dot;
//! - the active dot sits at `current_page - window_start`;
//! - the strip length is `min(page_count, visible_dots)` and never changes
//!   while the selection moves.
//!
//! # Sliding window
//!
//! With more pages than visible dots, the strip shows a window of pages. The
//! two outermost dots on a side that has hidden pages are drawn
//! [`Small`](DotState::Small) and [`Medium`](DotState::Medium). Moving the
//! selection toward such an edge slides the window by one page: the dot on
//! the far side drops off, a fresh active dot is inserted, and the edge dots
//! are reassigned.
//!
//! ```text
//!   page 3 of 10    ● ● ● ◉ • ·        window 0..6
//!   page 4 of 10    · • ● ◉ • ·        window 1..7 (slid right)
//! ```
//!
//! A jump of several pages is applied as that many single steps, so the
//! result is the same as swiping there one page at a time.

use alloc::vec::Vec;
use core::ops::Range;

use crate::changes::{DotChanges, ShiftDirection};
use crate::config::IndicatorConfig;
use crate::dot::{Dot, DotState};
use crate::error::{ConfigError, PageError};
use crate::trace::{PageChangeEvent, RebuildEvent, RejectedPageEvent, Tracer, WindowShiftEvent};

/// Number of positions between the active dot and a shrunk edge before the
/// window slides toward lower pages.
const LEFT_EDGE: usize = 2;

/// Owns the dots of one page indicator and assigns their states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotIndicator {
    config: IndicatorConfig,
    dots: Vec<Dot>,
    page_count: usize,
    current_page: usize,
    window_start: usize,
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}

impl DotIndicator {
    /// Creates an indicator with no pages.
    #[must_use]
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            dots: Vec::new(),
            page_count: 0,
            current_page: 0,
            window_start: 0,
        }
    }

    /// Creates an indicator with `page_count` pages and page 0 selected.
    #[must_use]
    pub fn with_pages(config: IndicatorConfig, page_count: usize) -> Self {
        let mut indicator = Self::new(config);
        indicator.set_page_count(page_count);
        indicator
    }

    // -- Accessors --------------------------------------------------------

    /// The visible dots, leftmost first.
    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Selected page. Always 0 for an empty indicator.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Configured maximum number of visible dots.
    #[must_use]
    pub fn visible_dots(&self) -> usize {
        self.config.visible_dots()
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// First page shown by the strip.
    #[must_use]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Pages shown by the strip.
    #[must_use]
    pub fn visible_pages(&self) -> Range<usize> {
        self.window_start..self.window_start + self.dots.len()
    }

    /// Strip index of the active dot, or `None` for an empty strip.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().position(|d| d.state().is_active())
    }

    /// Returns `true` when there are more pages than visible dots.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.page_count > self.config.visible_dots()
    }

    /// Returns `true` when the indicator should be shown at all.
    ///
    /// A single page needs no indicator.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.page_count > 1
    }

    /// Returns the dot for `page` if it is inside the window.
    #[must_use]
    pub fn dot_for_page(&self, page: usize) -> Option<&Dot> {
        page.checked_sub(self.window_start)
            .and_then(|index| self.dots.get(index))
    }

    // -- Configuration ----------------------------------------------------

    /// Sets the page count and rebuilds the strip with page 0 selected.
    pub fn set_page_count(&mut self, page_count: usize) -> DotChanges {
        self.set_page_count_traced(page_count, &mut Tracer::none())
    }

    /// Like [`set_page_count`](Self::set_page_count), reporting to `tracer`.
    pub fn set_page_count_traced(
        &mut self,
        page_count: usize,
        tracer: &mut Tracer<'_>,
    ) -> DotChanges {
        self.page_count = page_count;
        self.rebuild(tracer)
    }

    /// Replaces the configuration and rebuilds the strip with page 0
    /// selected.
    pub fn set_config(&mut self, config: IndicatorConfig) -> DotChanges {
        self.config = config;
        self.rebuild(&mut Tracer::none())
    }

    /// Changes the visible window size, keeping the current dot sizes.
    ///
    /// On error nothing is modified.
    pub fn set_visible_dots(&mut self, visible_dots: usize) -> Result<DotChanges, ConfigError> {
        let config = IndicatorConfig::new(visible_dots)?.with_sizes(*self.config.sizes())?;
        Ok(self.set_config(config))
    }

    fn rebuild(&mut self, tracer: &mut Tracer<'_>) -> DotChanges {
        let len = self.page_count.min(self.config.visible_dots());
        let scrolling = self.is_scrolling();

        self.dots.clear();
        self.dots
            .extend((0..len).map(|i| Dot::new(initial_state(i, len, scrolling))));
        self.current_page = 0;
        self.window_start = 0;

        tracer.rebuild(&RebuildEvent {
            page_count: self.page_count,
            visible_dots: self.config.visible_dots(),
            dot_count: len,
        });
        #[cfg(feature = "trace-rich")]
        self.trace_dot_states(tracer, None, &DotChanges::all(len));

        DotChanges {
            changed: DotChanges::all(len),
            shift: None,
            rebuilt: true,
        }
    }

    // -- Selection --------------------------------------------------------

    /// Moves the selection to `page`.
    ///
    /// Selecting the current page returns empty changes. A page outside
    /// `0..page_count` is rejected and nothing is modified.
    pub fn select_page(&mut self, page: usize) -> Result<DotChanges, PageError> {
        self.select_page_traced(page, &mut Tracer::none())
    }

    /// Like [`select_page`](Self::select_page), reporting to `tracer`.
    pub fn select_page_traced(
        &mut self,
        page: usize,
        tracer: &mut Tracer<'_>,
    ) -> Result<DotChanges, PageError> {
        if page >= self.page_count {
            tracer.rejected_page(&RejectedPageEvent {
                page,
                page_count: self.page_count,
            });
            return Err(PageError::OutOfRange {
                page,
                page_count: self.page_count,
            });
        }
        if page == self.current_page {
            return Ok(DotChanges::default());
        }

        let before: Vec<DotState> = self.dots.iter().map(Dot::state).collect();
        let from = self.current_page;
        let mut changes = DotChanges::default();

        if self.is_scrolling() {
            while self.current_page < page {
                self.step_forward(&mut changes);
            }
            while self.current_page > page {
                self.step_backward(&mut changes);
            }
        } else {
            self.dots[from].set_state(DotState::Inactive);
            self.dots[page].set_state(DotState::Active);
            self.current_page = page;
        }

        changes.changed = if changes.shift.is_some() {
            DotChanges::all(self.dots.len())
        } else {
            self.dots
                .iter()
                .zip(&before)
                .enumerate()
                .filter(|(_, (dot, old))| dot.state() != **old)
                .map(|(i, _)| i)
                .collect()
        };

        debug_assert_eq!(
            self.active_index(),
            Some(self.current_page - self.window_start),
            "active dot must track the selected page"
        );
        debug_assert_eq!(before.len(), self.dots.len(), "strip length changed");

        tracer.page_change(&PageChangeEvent {
            from,
            to: page,
            window_start: self.window_start,
        });
        if let Some(shift) = changes.shift {
            tracer.window_shift(&WindowShiftEvent {
                shift,
                window_start: self.window_start,
            });
        }
        #[cfg(feature = "trace-rich")]
        {
            let old = changes.shift.is_none().then_some(before.as_slice());
            self.trace_dot_states(tracer, old, &changes.changed);
        }

        Ok(changes)
    }

    /// Moves the selection one page toward higher pages.
    fn step_forward(&mut self, changes: &mut DotChanges) {
        let len = self.dots.len();
        let index = self.current_page - self.window_start;
        let target = self.current_page + 1;

        self.dots[index].set_state(DotState::Inactive);
        if index + 3 >= len {
            if target == self.page_count - 1 {
                self.dots[len - 1].set_state(DotState::Active);
            } else if target == self.page_count - 2 {
                self.dots[len - 1].set_state(DotState::Medium);
                self.dots[len - 2].set_state(DotState::Active);
            } else {
                self.dots.remove(0);
                self.dots[0].set_state(DotState::Small);
                self.dots[1].set_state(DotState::Medium);
                self.dots.insert(index, Dot::new(DotState::Active));
                self.window_start += 1;
                changes.record_shift(ShiftDirection::Right);
            }
        } else {
            self.dots[index + 1].set_state(DotState::Active);
        }
        self.current_page = target;
    }

    /// Moves the selection one page toward lower pages.
    fn step_backward(&mut self, changes: &mut DotChanges) {
        let index = self.current_page - self.window_start;
        let target = self.current_page - 1;

        self.dots[index].set_state(DotState::Inactive);
        if index <= LEFT_EDGE {
            if target == 0 {
                self.dots[0].set_state(DotState::Active);
            } else if target == 1 {
                self.dots[0].set_state(DotState::Medium);
                self.dots[1].set_state(DotState::Active);
            } else {
                self.dots.pop();
                let last = self.dots.len() - 1;
                self.dots[last].set_state(DotState::Small);
                self.dots[last - 1].set_state(DotState::Medium);
                self.dots.insert(index, Dot::new(DotState::Active));
                self.window_start -= 1;
                changes.record_shift(ShiftDirection::Left);
            }
        } else {
            self.dots[index - 1].set_state(DotState::Active);
        }
        self.current_page = target;
    }

    #[cfg(feature = "trace-rich")]
    fn trace_dot_states(
        &self,
        tracer: &mut Tracer<'_>,
        before: Option<&[DotState]>,
        indices: &[usize],
    ) {
        use crate::trace::DotStateEvent;

        if !tracer.is_enabled() {
            return;
        }
        let events: Vec<DotStateEvent> = indices
            .iter()
            .map(|&index| DotStateEvent {
                index,
                from: before.and_then(|b| b.get(index).copied()),
                to: self.dots[index].state(),
            })
            .collect();
        tracer.dot_states(&events);
    }
}

/// State of dot `index` in a freshly built strip of `len` dots.
fn initial_state(index: usize, len: usize, scrolling: bool) -> DotState {
    if index == 0 {
        DotState::Active
    } else if scrolling && index == len - 1 {
        DotState::Small
    } else if scrolling && index == len - 2 {
        DotState::Medium
    } else {
        DotState::Inactive
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::changes::WindowShift;

    /// One letter per dot: `A`ctive, `I`nactive, `M`edium, `S`mall.
    fn strip(indicator: &DotIndicator) -> String {
        indicator
            .dots()
            .iter()
            .map(|d| match d.state() {
                DotState::Active => 'A',
                DotState::Inactive => 'I',
                DotState::Medium => 'M',
                DotState::Small => 'S',
            })
            .collect()
    }

    fn ten_pages() -> DotIndicator {
        DotIndicator::with_pages(IndicatorConfig::default(), 10)
    }

    #[test]
    fn empty_indicator_has_no_dots() {
        let indicator = DotIndicator::default();
        assert!(indicator.dots().is_empty());
        assert_eq!(indicator.active_index(), None);
        assert!(!indicator.is_visible());
    }

    #[test]
    fn single_page_is_hidden_but_active() {
        let indicator = DotIndicator::with_pages(IndicatorConfig::default(), 1);
        assert_eq!(strip(&indicator), "A");
        assert!(!indicator.is_visible());
    }

    #[test]
    fn few_pages_build_plain_strip() {
        let indicator = DotIndicator::with_pages(IndicatorConfig::default(), 4);
        assert_eq!(strip(&indicator), "AIII");
        assert!(!indicator.is_scrolling());
        assert!(indicator.is_visible());

        let indicator = DotIndicator::with_pages(IndicatorConfig::default(), 6);
        assert_eq!(strip(&indicator), "AIIIII");
    }

    #[test]
    fn many_pages_build_shrunk_right_edge() {
        let indicator = ten_pages();
        assert_eq!(strip(&indicator), "AIIIMS");
        assert!(indicator.is_scrolling());
        assert_eq!(indicator.visible_pages(), 0..6);
    }

    #[test]
    fn rebuild_reports_every_dot() {
        let mut indicator = DotIndicator::default();
        let changes = indicator.set_page_count(3);
        assert!(changes.rebuilt);
        assert_eq!(changes.changed, [0, 1, 2]);
    }

    #[test]
    fn plain_strip_moves_active_dot() {
        let mut indicator = DotIndicator::with_pages(IndicatorConfig::default(), 5);
        let changes = indicator.select_page(3).unwrap();
        assert_eq!(strip(&indicator), "IIIAI");
        assert_eq!(changes.changed, [0, 3]);
        assert_eq!(changes.shift, None);
        assert_eq!(indicator.current_page(), 3);
    }

    #[test]
    fn forward_sweep_slides_window() {
        let mut indicator = ten_pages();
        let expected = [
            ("IAIIMS", 0),
            ("IIAIMS", 0),
            ("IIIAMS", 0),
            ("SMIAMS", 1),
            ("SMIAMS", 2),
            ("SMIAMS", 3),
            ("SMIAMS", 4),
            ("SMIIAM", 4),
            ("SMIIIA", 4),
        ];
        for (page, (dots, start)) in (1..10).zip(expected) {
            indicator.select_page(page).unwrap();
            assert_eq!(strip(&indicator), dots, "strip at page {page}");
            assert_eq!(indicator.window_start(), start, "window at page {page}");
        }
    }

    #[test]
    fn backward_sweep_slides_window() {
        let mut indicator = ten_pages();
        indicator.select_page(9).unwrap();
        let expected = [
            ("SMIIAI", 4),
            ("SMIAII", 4),
            ("SMAIII", 4),
            ("SMAIMS", 3),
            ("SMAIMS", 2),
            ("SMAIMS", 1),
            ("SMAIMS", 0),
            ("MAIIMS", 0),
            ("AIIIMS", 0),
        ];
        for (page, (dots, start)) in (0..9).rev().zip(expected) {
            indicator.select_page(page).unwrap();
            assert_eq!(strip(&indicator), dots, "strip at page {page}");
            assert_eq!(indicator.window_start(), start, "window at page {page}");
        }
    }

    #[test]
    fn jump_matches_single_steps() {
        let mut stepped = ten_pages();
        for page in 1..=7 {
            stepped.select_page(page).unwrap();
        }
        let mut jumped = ten_pages();
        let changes = jumped.select_page(7).unwrap();
        assert_eq!(jumped, stepped);
        assert_eq!(
            changes.shift,
            Some(WindowShift {
                direction: ShiftDirection::Right,
                pages: 4,
            })
        );
        assert_eq!(changes.changed.len(), 6);
    }

    #[test]
    fn step_without_slide_reports_two_dots() {
        let mut indicator = ten_pages();
        let changes = indicator.select_page(1).unwrap();
        assert_eq!(changes.changed, [0, 1]);
        assert_eq!(changes.shift, None);
    }

    #[test]
    fn slide_reports_whole_strip() {
        let mut indicator = ten_pages();
        indicator.select_page(3).unwrap();
        let changes = indicator.select_page(4).unwrap();
        assert_eq!(changes.changed, [0, 1, 2, 3, 4, 5]);
        assert_eq!(
            changes.shift,
            Some(WindowShift {
                direction: ShiftDirection::Right,
                pages: 1,
            })
        );
    }

    #[test]
    fn reselecting_current_page_is_a_no_op() {
        let mut indicator = ten_pages();
        let changes = indicator.select_page(0).unwrap();
        assert!(changes.is_empty());
        assert_eq!(strip(&indicator), "AIIIMS");
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let mut indicator = ten_pages();
        indicator.select_page(2).unwrap();
        let before = indicator.clone();
        assert_eq!(
            indicator.select_page(10),
            Err(PageError::OutOfRange {
                page: 10,
                page_count: 10,
            })
        );
        assert_eq!(indicator, before);

        let mut empty = DotIndicator::default();
        assert!(empty.select_page(0).is_err(), "no pages to select");
    }

    #[test]
    fn page_count_change_resets_selection() {
        let mut indicator = ten_pages();
        indicator.select_page(6).unwrap();
        indicator.set_page_count(3);
        assert_eq!(indicator.current_page(), 0);
        assert_eq!(indicator.window_start(), 0);
        assert_eq!(strip(&indicator), "AII");
    }

    #[test]
    fn wider_window_rebuilds() {
        let mut indicator = ten_pages();
        indicator.select_page(5).unwrap();
        let changes = indicator.set_visible_dots(8).unwrap();
        assert!(changes.rebuilt);
        assert_eq!(strip(&indicator), "AIIIIIMS");
        assert_eq!(indicator.visible_dots(), 8);
    }

    #[test]
    fn invalid_window_leaves_indicator_untouched() {
        let mut indicator = ten_pages();
        indicator.select_page(4).unwrap();
        let before = indicator.clone();
        assert!(indicator.set_visible_dots(3).is_err(), "3 is below minimum");
        assert_eq!(indicator, before);
    }

    #[test]
    fn wide_window_slides_at_its_own_edge() {
        let config = IndicatorConfig::new(8).unwrap();
        let mut indicator = DotIndicator::with_pages(config, 12);
        indicator.select_page(5).unwrap();
        assert_eq!(strip(&indicator), "IIIIIAMS");
        indicator.select_page(6).unwrap();
        assert_eq!(strip(&indicator), "SMIIIAMS");
        assert_eq!(indicator.visible_pages(), 1..9);
    }

    #[test]
    fn minimal_overflow() {
        let mut indicator = DotIndicator::with_pages(IndicatorConfig::default(), 7);
        let expected = ["IAIIMS", "IIAIMS", "IIIAMS", "SMIAMS", "SMIIAM", "SMIIIA"];
        for (page, dots) in (1..7).zip(expected) {
            indicator.select_page(page).unwrap();
            assert_eq!(strip(&indicator), dots, "strip at page {page}");
        }
    }

    #[test]
    fn dot_for_page_respects_window() {
        let mut indicator = ten_pages();
        indicator.select_page(5).unwrap();
        assert_eq!(indicator.visible_pages(), 2..8);
        assert_eq!(indicator.dot_for_page(1), None);
        assert_eq!(
            indicator.dot_for_page(5).map(Dot::state),
            Some(DotState::Active)
        );
        assert_eq!(
            indicator.dot_for_page(7).map(Dot::state),
            Some(DotState::Small)
        );
        assert_eq!(indicator.dot_for_page(8), None);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn selection_is_traced() {
        use crate::trace::TraceSink;

        #[derive(Default)]
        struct Sink {
            pages: Vec<(usize, usize)>,
            shifts: usize,
            rejected: usize,
        }
        impl TraceSink for Sink {
            fn on_page_change(&mut self, e: &PageChangeEvent) {
                self.pages.push((e.from, e.to));
            }
            fn on_window_shift(&mut self, _: &WindowShiftEvent) {
                self.shifts += 1;
            }
            fn on_rejected_page(&mut self, _: &RejectedPageEvent) {
                self.rejected += 1;
            }
        }

        let mut sink = Sink::default();
        let mut indicator = ten_pages();
        {
            let mut tracer = Tracer::new(&mut sink);
            indicator.select_page_traced(2, &mut tracer).unwrap();
            indicator.select_page_traced(5, &mut tracer).unwrap();
            assert!(indicator.select_page_traced(40, &mut tracer).is_err());
        }
        assert_eq!(sink.pages, [(0, 2), (2, 5)]);
        assert_eq!(sink.shifts, 1);
        assert_eq!(sink.rejected, 1);
    }
}
