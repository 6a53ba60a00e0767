// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use pagedots_core::changes::ShiftDirection;
use pagedots_core::trace::{
    DotStateEvent, PageChangeEvent, RebuildEvent, RejectedPageEvent, TraceSink, WindowShiftEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn direction_name(direction: ShiftDirection) -> &'static str {
    match direction {
        ShiftDirection::Left => "left",
        ShiftDirection::Right => "right",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_rebuild(&mut self, e: &RebuildEvent) {
        let _ = writeln!(
            self.writer,
            "[rebuild] pages={} visible={} dots={}",
            e.page_count, e.visible_dots, e.dot_count,
        );
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[page] {} -> {} window_start={}",
            e.from, e.to, e.window_start,
        );
    }

    fn on_window_shift(&mut self, e: &WindowShiftEvent) {
        let _ = writeln!(
            self.writer,
            "[shift] {} by {} window_start={}",
            direction_name(e.shift.direction),
            e.shift.pages,
            e.window_start,
        );
    }

    fn on_rejected_page(&mut self, e: &RejectedPageEvent) {
        let _ = writeln!(
            self.writer,
            "[rejected] page={} page_count={}",
            e.page, e.page_count,
        );
    }

    fn on_dot_states(&mut self, changes: &[DotStateEvent]) {
        for c in changes {
            let from = c.from.map_or("-", |s| s.as_str());
            let _ = writeln!(self.writer, "[dot] #{} {from} -> {}", c.index, c.to);
        }
    }
}
