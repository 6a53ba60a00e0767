// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dot state model and controller for multi-page position indicators.
//!
//! `pagedots_core` models the row of dots shown under a carousel or an
//! onboarding flow. It is `no_std` compatible (with `alloc`) and does no
//! drawing, measuring, or animating: a host reads the dot states and decides
//! how to present them.
//!
//! # Architecture
//!
//! ```text
//!   host page-selected signal
//!       │
//!       ▼
//!   DotIndicator::select_page() ──► Dot::set_state() (per dot)
//!       │
//!       ▼
//!   DotChanges ──► host redraws changed dots / animates window slide
//! ```
//!
//! **[`dot`]**: [`Dot`](dot::Dot) holds exactly one
//! [`DotState`](dot::DotState). It is a plain value holder with no transition
//! guard and no knowledge of its siblings.
//!
//! **[`indicator`]**: [`DotIndicator`](indicator::DotIndicator) owns the
//! ordered dots, keeps exactly one of them active, and slides a fixed-size
//! window over the pages when there are more pages than visible dots.
//!
//! **[`changes`]**: Per-update report of which dots changed and whether the
//! window slid.
//!
//! **[`config`]**: Visible window size and per-state dot sizes.
//!
//! **[`error`]**: Configuration and page-selection errors.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! indicator instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-dot state
//!   change events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod changes;
pub mod config;
pub mod dot;
pub mod error;
pub mod indicator;
pub mod trace;
