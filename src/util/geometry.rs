// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the pure rectangle operations used by the ROI
//! editor: normalization of inverted drags, pointer clamping and the
//! translate-only clamp applied while moving a rectangle.

use crate::models::rect::{CanvasBounds, Rect};

/// Fold negative extents into the origin so `w >= 0` and `h >= 0`.
///
/// A rectangle dragged from bottom-right toward top-left carries negative
/// width/height until the gesture ends; this restores the canonical
/// top-left-origin form. Idempotent and area-preserving.
pub fn normalized(r: Rect) -> Rect {
    let mut r = r;
    if r.w < 0 {
        r.x += r.w;
        r.w = -r.w;
    }
    if r.h < 0 {
        r.y += r.h;
        r.h = -r.h;
    }
    r
}

/// Translate `r` so it lies inside `bounds` without changing its size.
///
/// Only valid for moving an existing rectangle; creation and resizing are
/// clamped at the pointer instead, so a growing edge may leave the canvas.
pub fn translate_into(r: Rect, bounds: &CanvasBounds) -> Rect {
    let mut r = r;
    if r.x < bounds.x {
        r.x = bounds.x;
    }
    if r.y < bounds.y {
        r.y = bounds.y;
    }
    if r.x + r.w > bounds.x + bounds.w - 1 {
        r.x = bounds.x + bounds.w - 1 - r.w;
    }
    if r.y + r.h > bounds.y + bounds.h - 1 {
        r.y = bounds.y + bounds.h - 1 - r.h;
    }
    r
}

/// Point-in-rectangle test, inclusive on both edges.
pub fn contains_point(px: i32, py: i32, rx: i32, ry: i32, rw: i32, rh: i32) -> bool {
    rx <= px && px <= rx + rw && ry <= py && py <= ry + rh
}

/// Clamp a raw pointer coordinate into the drawable area.
///
/// Applied to every incoming pointer event before any gesture logic runs,
/// so gesture math never sees out-of-canvas input.
pub fn clamp_point(x: i32, y: i32, bounds: &CanvasBounds) -> (i32, i32) {
    let x = x.clamp(bounds.x, bounds.x + bounds.w - 1);
    let y = y.clamp(bounds.y, bounds.y + bounds.h - 1);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_folds_negative_extents() {
        let r = normalized(Rect::new(10, 10, -5, -5));
        assert_eq!(r, Rect::new(5, 5, 5, 5));
    }

    #[test]
    fn test_normalized_idempotent_and_area_preserving() {
        let cases = [
            Rect::new(0, 0, 10, 10),
            Rect::new(10, 10, -5, -5),
            Rect::new(3, 7, -4, 2),
            Rect::new(0, 0, 0, 0),
        ];
        for r in cases {
            let once = normalized(r);
            assert_eq!(normalized(once), once);
            assert_eq!(once.area(), r.area());
            assert!(once.w >= 0 && once.h >= 0);
        }
    }

    #[test]
    fn test_translate_into_keeps_size() {
        let bounds = CanvasBounds::of_frame(100, 100);
        let r = translate_into(Rect::new(93, 93, 20, 20), &bounds);
        assert_eq!(r, Rect::new(79, 79, 20, 20));

        let r = translate_into(Rect::new(-7, -3, 20, 20), &bounds);
        assert_eq!(r, Rect::new(0, 0, 20, 20));
    }

    #[test]
    fn test_contains_point_inclusive_edges() {
        assert!(contains_point(0, 0, 0, 0, 10, 10));
        assert!(contains_point(10, 10, 0, 0, 10, 10));
        assert!(!contains_point(11, 5, 0, 0, 10, 10));
        assert!(!contains_point(5, -1, 0, 0, 10, 10));
    }

    #[test]
    fn test_clamp_point_to_last_pixel() {
        let bounds = CanvasBounds::of_frame(640, 480);
        assert_eq!(clamp_point(-5, 1000, &bounds), (0, 479));
        assert_eq!(clamp_point(640, 480, &bounds), (639, 479));
        assert_eq!(clamp_point(100, 100, &bounds), (100, 100));
    }
}
