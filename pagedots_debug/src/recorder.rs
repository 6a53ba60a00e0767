// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Per-dot events ([`on_dot_states`](TraceSink::on_dot_states)) store only
//! the count.

use pagedots_core::changes::{ShiftDirection, WindowShift};
use pagedots_core::trace::{
    DotStateEvent, PageChangeEvent, RebuildEvent, RejectedPageEvent, TraceSink, WindowShiftEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_REBUILD: u8 = 1;
const TAG_PAGE_CHANGE: u8 = 2;
const TAG_WINDOW_SHIFT: u8 = 3;
const TAG_REJECTED_PAGE: u8 = 4;
const TAG_DOT_STATES_COUNT: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_direction(&mut self, d: ShiftDirection) {
        self.write_u8(match d {
            ShiftDirection::Left => 0,
            ShiftDirection::Right => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_rebuild(&mut self, e: &RebuildEvent) {
        self.write_u8(TAG_REBUILD);
        self.write_usize(e.page_count);
        self.write_usize(e.visible_dots);
        self.write_usize(e.dot_count);
    }

    fn on_page_change(&mut self, e: &PageChangeEvent) {
        self.write_u8(TAG_PAGE_CHANGE);
        self.write_usize(e.from);
        self.write_usize(e.to);
        self.write_usize(e.window_start);
    }

    fn on_window_shift(&mut self, e: &WindowShiftEvent) {
        self.write_u8(TAG_WINDOW_SHIFT);
        self.write_direction(e.shift.direction);
        self.write_usize(e.shift.pages);
        self.write_usize(e.window_start);
    }

    fn on_rejected_page(&mut self, e: &RejectedPageEvent) {
        self.write_u8(TAG_REJECTED_PAGE);
        self.write_usize(e.page);
        self.write_usize(e.page_count);
    }

    fn on_dot_states(&mut self, changes: &[DotStateEvent]) {
        self.write_u8(TAG_DOT_STATES_COUNT);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "dot change count capped at u32::MAX for recording"
        )]
        self.write_u32(changes.len().min(u32::MAX as usize) as u32);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A [`RebuildEvent`].
    Rebuild(RebuildEvent),
    /// A [`PageChangeEvent`].
    PageChange(PageChangeEvent),
    /// A [`WindowShiftEvent`].
    WindowShift(WindowShiftEvent),
    /// A [`RejectedPageEvent`].
    RejectedPage(RejectedPageEvent),
    /// Number of per-dot state changes in one update.
    DotStatesCount(u32),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_usize(&mut self) -> Option<usize> {
        usize::try_from(self.read_u64()?).ok()
    }

    fn read_direction(&mut self) -> Option<ShiftDirection> {
        Some(match self.read_u8()? {
            0 => ShiftDirection::Left,
            _ => ShiftDirection::Right,
        })
    }

    fn decode_rebuild(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Rebuild(RebuildEvent {
            page_count: self.read_usize()?,
            visible_dots: self.read_usize()?,
            dot_count: self.read_usize()?,
        }))
    }

    fn decode_page_change(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PageChange(PageChangeEvent {
            from: self.read_usize()?,
            to: self.read_usize()?,
            window_start: self.read_usize()?,
        }))
    }

    fn decode_window_shift(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::WindowShift(WindowShiftEvent {
            shift: WindowShift {
                direction: self.read_direction()?,
                pages: self.read_usize()?,
            },
            window_start: self.read_usize()?,
        }))
    }

    fn decode_rejected_page(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::RejectedPage(RejectedPageEvent {
            page: self.read_usize()?,
            page_count: self.read_usize()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_REBUILD => self.decode_rebuild(),
            TAG_PAGE_CHANGE => self.decode_page_change(),
            TAG_WINDOW_SHIFT => self.decode_window_shift(),
            TAG_REJECTED_PAGE => self.decode_rejected_page(),
            TAG_DOT_STATES_COUNT => self.read_u32().map(RecordedEvent::DotStatesCount),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
