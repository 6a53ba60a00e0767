// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for pagedots diagnostics.
//!
//! This crate provides [`TraceSink`](pagedots_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`json::export`]: writes a JSON array from recorded bytes.
//!
//! [`strip::render`] draws a dot strip as a line of text for logs and test
//! failure messages.

pub mod json;
pub mod pretty;
pub mod recorder;
pub mod strip;
