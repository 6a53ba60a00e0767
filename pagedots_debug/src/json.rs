// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array
//! with one object per event. Recordings carry no timestamps, so each object
//! gets a `seq` field with its position in the recording.

use std::io::{self, Write};

use serde_json::{Value, json};

use pagedots_core::changes::ShiftDirection;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a pretty-printed JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = decode(bytes)
        .enumerate()
        .map(|(seq, recorded)| event_json(seq, &recorded))
        .collect();

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn event_json(seq: usize, recorded: &RecordedEvent) -> Value {
    match recorded {
        RecordedEvent::Rebuild(e) => json!({
            "seq": seq,
            "name": "Rebuild",
            "args": {
                "page_count": e.page_count,
                "visible_dots": e.visible_dots,
                "dot_count": e.dot_count,
            }
        }),
        RecordedEvent::PageChange(e) => json!({
            "seq": seq,
            "name": "PageChange",
            "args": {
                "from": e.from,
                "to": e.to,
                "window_start": e.window_start,
            }
        }),
        RecordedEvent::WindowShift(e) => {
            let direction = match e.shift.direction {
                ShiftDirection::Left => "left",
                ShiftDirection::Right => "right",
            };
            json!({
                "seq": seq,
                "name": "WindowShift",
                "args": {
                    "direction": direction,
                    "pages": e.shift.pages,
                    "window_start": e.window_start,
                }
            })
        }
        RecordedEvent::RejectedPage(e) => json!({
            "seq": seq,
            "name": "RejectedPage",
            "args": {
                "page": e.page,
                "page_count": e.page_count,
            }
        }),
        RecordedEvent::DotStatesCount(count) => json!({
            "seq": seq,
            "name": "DotStates",
            "args": {
                "count": count,
            }
        }),
    }
}
