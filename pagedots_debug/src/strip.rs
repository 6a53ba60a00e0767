// Copyright 2026 the Pagedots Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text rendering of a dot strip.
//!
//! ```text
//!   ● ● ◉ ● • ·
//! ```

use pagedots_core::dot::{Dot, DotState};
use pagedots_core::indicator::DotIndicator;

/// Glyph used for `state`.
#[must_use]
pub const fn glyph(state: DotState) -> char {
    match state {
        DotState::Active => '◉',
        DotState::Inactive => '●',
        DotState::Medium => '•',
        DotState::Small => '·',
    }
}

/// Renders `dots` as space-separated glyphs.
#[must_use]
pub fn render(dots: &[Dot]) -> String {
    let mut out = String::with_capacity(dots.len() * 4);
    for (i, dot) in dots.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(glyph(dot.state()));
    }
    out
}

/// Renders an indicator with its selection and window, e.g.
/// `page 4/10 [1..7) · • ● ◉ • ·`.
#[must_use]
pub fn describe(indicator: &DotIndicator) -> String {
    let pages = indicator.visible_pages();
    format!(
        "page {}/{} [{}..{}) {}",
        indicator.current_page(),
        indicator.page_count(),
        pages.start,
        pages.end,
        render(indicator.dots()),
    )
}
