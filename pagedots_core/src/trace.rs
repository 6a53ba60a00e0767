// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for indicator updates.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! indicator calls as it rebuilds and moves its selection. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`DotStateEvent`] and the
//!   corresponding `TraceSink` method.

use crate::changes::WindowShift;
#[cfg(feature = "trace-rich")]
use crate::dot::DotState;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the strip is rebuilt from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebuildEvent {
    /// Page count after the rebuild.
    pub page_count: usize,
    /// Configured visible window.
    pub visible_dots: usize,
    /// Number of dots in the rebuilt strip.
    pub dot_count: usize,
}

/// Emitted when the selection moves to another page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChangeEvent {
    /// Previously selected page.
    pub from: usize,
    /// Newly selected page.
    pub to: usize,
    /// First visible page after the change.
    pub window_start: usize,
}

/// Emitted when the visible window slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowShiftEvent {
    /// Net slide for the update.
    pub shift: WindowShift,
    /// First visible page after the slide.
    pub window_start: usize,
}

/// Emitted when a page selection is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RejectedPageEvent {
    /// Requested page.
    pub page: usize,
    /// Page count at the time of the request.
    pub page_count: usize,
}

/// A single dot changing state.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotStateEvent {
    /// Strip index of the dot.
    pub index: usize,
    /// State before the update, if the dot existed before it.
    pub from: Option<DotState>,
    /// State after the update.
    pub to: DotState,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the indicator.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the strip is rebuilt.
    fn on_rebuild(&mut self, e: &RebuildEvent) {
        _ = e;
    }

    /// Called after the selection moves.
    fn on_page_change(&mut self, e: &PageChangeEvent) {
        _ = e;
    }

    /// Called after the window slides.
    fn on_window_shift(&mut self, e: &WindowShiftEvent) {
        _ = e;
    }

    /// Called when a selection request is rejected.
    fn on_rejected_page(&mut self, e: &RejectedPageEvent) {
        _ = e;
    }

    /// Called with per-dot state changes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_dot_states(&mut self, changes: &[DotStateEvent]) {
        _ = changes;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RebuildEvent`].
    #[inline]
    pub fn rebuild(&mut self, e: &RebuildEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rebuild(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PageChangeEvent`].
    #[inline]
    pub fn page_change(&mut self, e: &PageChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`WindowShiftEvent`].
    #[inline]
    pub fn window_shift(&mut self, e: &WindowShiftEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_window_shift(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RejectedPageEvent`].
    #[inline]
    pub fn rejected_page(&mut self, e: &RejectedPageEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rejected_page(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits per-dot state changes (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn dot_states(&mut self, changes: &[DotStateEvent]) {
        if let Some(s) = &mut self.sink {
            s.on_dot_states(changes);
        }
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
