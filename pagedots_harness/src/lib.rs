// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted navigation runs and invariant checks for indicators.
//!
//! [`check`] verifies everything a [`DotIndicator`] promises about its strip.
//! [`run`] drives an indicator through a list of [`Move`]s and checks after
//! every step; [`sweep`] and [`random_walk`] build common scripts.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use pagedots_core::changes::DotChanges;
use pagedots_core::dot::{Dot, DotState};
use pagedots_core::indicator::DotIndicator;

/// Which end of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Lower pages.
    Left,
    /// Higher pages.
    Right,
}

/// A broken indicator invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A non-empty strip does not have exactly one active dot.
    ActiveCount(usize),
    /// The active dot is not at `current_page - window_start`.
    ActiveMisplaced {
        /// Where the active dot should be.
        expected: usize,
        /// Where it is.
        actual: usize,
    },
    /// The strip length is not `min(page_count, visible_dots)`.
    WrongLength {
        /// Expected number of dots.
        expected: usize,
        /// Actual number of dots.
        actual: usize,
    },
    /// The window reaches past the last page.
    WindowOutOfBounds {
        /// First visible page.
        start: usize,
        /// One past the last visible page.
        end: usize,
        /// Page count.
        page_count: usize,
    },
    /// A side with hidden pages does not end in a small and a medium dot.
    EdgeNotShrunk(Side),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActiveCount(n) => write!(f, "expected one active dot, found {n}"),
            Self::ActiveMisplaced { expected, actual } => {
                write!(f, "active dot at {actual}, expected {expected}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "strip has {actual} dots, expected {expected}")
            }
            Self::WindowOutOfBounds {
                start,
                end,
                page_count,
            } => write!(f, "window {start}..{end} exceeds {page_count} pages"),
            Self::EdgeNotShrunk(side) => write!(f, "{side:?} edge hides pages but is not shrunk"),
        }
    }
}

impl core::error::Error for Violation {}

/// The parts of an indicator that [`check_snapshot`] looks at.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// Visible dots, leftmost first.
    pub dots: &'a [Dot],
    /// Number of pages.
    pub page_count: usize,
    /// Configured visible window.
    pub visible_dots: usize,
    /// Selected page.
    pub current_page: usize,
    /// First visible page.
    pub window_start: usize,
}

impl<'a> Snapshot<'a> {
    /// Captures the current state of `indicator`.
    #[must_use]
    pub fn of(indicator: &'a DotIndicator) -> Self {
        Self {
            dots: indicator.dots(),
            page_count: indicator.page_count(),
            visible_dots: indicator.visible_dots(),
            current_page: indicator.current_page(),
            window_start: indicator.window_start(),
        }
    }
}

/// Checks every strip invariant of `indicator`.
pub fn check(indicator: &DotIndicator) -> Result<(), Violation> {
    check_snapshot(&Snapshot::of(indicator))
}

/// Checks every strip invariant of a captured strip.
pub fn check_snapshot(s: &Snapshot<'_>) -> Result<(), Violation> {
    let dots = s.dots;
    let expected_len = s.page_count.min(s.visible_dots);
    if dots.len() != expected_len {
        return Err(Violation::WrongLength {
            expected: expected_len,
            actual: dots.len(),
        });
    }
    if dots.is_empty() {
        return Ok(());
    }

    let active = dots.iter().filter(|d| d.state().is_active()).count();
    if active != 1 {
        return Err(Violation::ActiveCount(active));
    }

    let start = s.window_start;
    let end = start + dots.len();
    if end > s.page_count || s.current_page < start || s.current_page >= end {
        return Err(Violation::WindowOutOfBounds {
            start,
            end,
            page_count: s.page_count,
        });
    }

    let expected = s.current_page - start;
    if let Some(actual) = dots.iter().position(|d| d.state().is_active()) {
        if actual != expected {
            return Err(Violation::ActiveMisplaced { expected, actual });
        }
    }

    let len = dots.len();
    if start > 0 && (dots[0].state() != DotState::Small || dots[1].state() != DotState::Medium) {
        return Err(Violation::EdgeNotShrunk(Side::Left));
    }
    if end < s.page_count
        && (dots[len - 1].state() != DotState::Small || dots[len - 2].state() != DotState::Medium)
    {
        return Err(Violation::EdgeNotShrunk(Side::Right));
    }
    Ok(())
}

/// One scripted navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Select the next page, if any.
    Next,
    /// Select the previous page, if any.
    Prev,
    /// Select a page directly. Out-of-range pages count as rejected.
    Jump(usize),
    /// Replace the page count.
    SetPages(usize),
}

/// Summary of a successful [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Moves applied.
    pub steps: usize,
    /// Pages the window slid, summed over all moves.
    pub slid_pages: usize,
    /// Selections the indicator rejected.
    pub rejected: usize,
    /// Largest window start seen.
    pub max_window_start: usize,
}

/// A [`run`] that stopped on a broken invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunFailure {
    /// Index of the move after which the check failed.
    pub step: usize,
    /// The offending move.
    pub mv: Move,
    /// What was broken.
    pub violation: Violation,
}

impl fmt::Display for RunFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({:?}): {}", self.step, self.mv, self.violation)
    }
}

impl core::error::Error for RunFailure {}

/// Applies `moves` to `indicator`, checking invariants after each one.
pub fn run(indicator: &mut DotIndicator, moves: &[Move]) -> Result<RunReport, RunFailure> {
    let mut report = RunReport::default();
    for (step, &mv) in moves.iter().enumerate() {
        let result = match mv {
            Move::Next => indicator.select_page(indicator.current_page() + 1),
            Move::Prev => match indicator.current_page().checked_sub(1) {
                Some(page) => indicator.select_page(page),
                None => Ok(DotChanges::default()),
            },
            Move::Jump(page) => indicator.select_page(page),
            Move::SetPages(count) => Ok(indicator.set_page_count(count)),
        };
        match result {
            Ok(changes) => {
                report.slid_pages += changes.shift.map_or(0, |s| s.pages);
            }
            Err(_) => report.rejected += 1,
        }
        report.steps += 1;
        report.max_window_start = report.max_window_start.max(indicator.window_start());
        check(indicator).map_err(|violation| RunFailure {
            step,
            mv,
            violation,
        })?;
    }
    Ok(report)
}

/// Forward to the last page one step at a time, then back to the first.
#[must_use]
pub fn sweep(page_count: usize) -> Vec<Move> {
    let steps = page_count.saturating_sub(1);
    let mut moves = Vec::with_capacity(steps * 2);
    moves.extend((0..steps).map(|_| Move::Next));
    moves.extend((0..steps).map(|_| Move::Prev));
    moves
}

/// A deterministic pseudo-random mix of steps and jumps within
/// `0..page_count`.
#[must_use]
pub fn random_walk(seed: u64, len: usize, page_count: usize) -> Vec<Move> {
    let mut state = seed | 1;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..len)
        .map(|_| match next() % 4 {
            0 | 1 => Move::Next,
            2 => Move::Prev,
            _ => Move::Jump(usize::try_from(next()).unwrap_or(0) % page_count.max(1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedots_core::config::IndicatorConfig;

    fn indicator(visible: usize, pages: usize) -> DotIndicator {
        DotIndicator::with_pages(IndicatorConfig::new(visible).unwrap(), pages)
    }

    #[test]
    fn sweeps_hold_invariants() {
        for visible in [6, 7, 9] {
            for pages in [0, 1, 2, visible, visible + 1, visible + 2, 25] {
                let mut ind = indicator(visible, pages);
                let report = run(&mut ind, &sweep(pages))
                    .unwrap_or_else(|f| panic!("{visible}/{pages}: {f}"));
                assert_eq!(ind.current_page(), 0, "{visible}/{pages} ends at page 0");
                assert_eq!(ind.window_start(), 0, "{visible}/{pages} window returns");
                if pages > visible + 2 {
                    assert!(report.slid_pages > 0, "{visible}/{pages} must slide");
                }
            }
        }
    }

    #[test]
    fn sweep_reaches_last_window() {
        let mut ind = indicator(6, 25);
        let report = run(&mut ind, &sweep(25)).unwrap();
        assert_eq!(report.max_window_start, 19);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn random_walks_hold_invariants() {
        for seed in 1..20 {
            let mut ind = indicator(6, 30);
            let moves = random_walk(seed, 300, 30);
            if let Err(f) = run(&mut ind, &moves) {
                panic!("seed {seed}: {f}");
            }
        }
    }

    #[test]
    fn random_walk_is_deterministic() {
        assert_eq!(random_walk(7, 50, 12), random_walk(7, 50, 12));
    }

    #[test]
    fn rejected_moves_are_counted() {
        let mut ind = indicator(6, 3);
        let report = run(&mut ind, &[Move::Next, Move::Next, Move::Next, Move::Jump(9)]).unwrap();
        assert_eq!(report.rejected, 2);
        assert_eq!(ind.current_page(), 2);
    }

    #[test]
    fn page_count_changes_hold_invariants() {
        let mut ind = indicator(6, 12);
        let moves = [
            Move::Jump(8),
            Move::SetPages(4),
            Move::Next,
            Move::SetPages(0),
            Move::Next,
            Move::SetPages(20),
            Move::Jump(19),
        ];
        let report = run(&mut ind, &moves).unwrap();
        assert_eq!(report.rejected, 1);
        assert_eq!(ind.current_page(), 19);
    }

    #[test]
    fn check_reports_broken_strips() {
        use DotState::{Active as A, Inactive as I, Medium as M, Small as S};

        let ind = indicator(6, 10);
        assert_eq!(check(&ind), Ok(()));

        fn strip(states: [DotState; 6]) -> [Dot; 6] {
            states.map(Dot::new)
        }
        fn snapshot(dots: &[Dot], current_page: usize, window_start: usize) -> Snapshot<'_> {
            Snapshot {
                dots,
                page_count: 10,
                visible_dots: 6,
                current_page,
                window_start,
            }
        }

        let two_active = strip([A, A, I, I, M, S]);
        assert_eq!(
            check_snapshot(&snapshot(&two_active, 0, 0)),
            Err(Violation::ActiveCount(2))
        );

        let misplaced = strip([I, A, I, I, M, S]);
        assert_eq!(
            check_snapshot(&snapshot(&misplaced, 2, 0)),
            Err(Violation::ActiveMisplaced {
                expected: 2,
                actual: 1,
            })
        );

        let flat_left = strip([I, M, I, A, M, S]);
        assert_eq!(
            check_snapshot(&snapshot(&flat_left, 4, 1)),
            Err(Violation::EdgeNotShrunk(Side::Left))
        );

        let flat_right = strip([I, I, I, A, I, I]);
        assert_eq!(
            check_snapshot(&snapshot(&flat_right, 3, 0)),
            Err(Violation::EdgeNotShrunk(Side::Right))
        );

        let past_end = strip([S, M, I, A, M, S]);
        assert_eq!(
            check_snapshot(&snapshot(&past_end, 8, 5)),
            Err(Violation::WindowOutOfBounds {
                start: 5,
                end: 11,
                page_count: 10,
            })
        );

        let short = [Dot::new(A)];
        assert_eq!(
            check_snapshot(&snapshot(&short, 0, 0)),
            Err(Violation::WrongLength {
                expected: 6,
                actual: 1,
            })
        );
    }

    #[test]
    fn violations_display() {
        use alloc::string::ToString;

        assert_eq!(
            Violation::ActiveCount(2).to_string(),
            "expected one active dot, found 2"
        );
        assert_eq!(
            Violation::EdgeNotShrunk(Side::Right).to_string(),
            "Right edge hides pages but is not shrunk"
        );
    }
}
