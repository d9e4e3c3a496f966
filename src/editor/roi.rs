// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-ROI drag gesture state machine.
//!
//! Each ROI owns one gesture at a time: defining its initial extent,
//! moving it as a whole, or resizing it by one of the eight handles.
//! All pointer coordinates arriving here are already clamped to the
//! canvas, so the math never sees out-of-frame input.

use crate::editor::handles::{self, Handle, Hit, MARKER_SIZE};
use crate::models::rect::{CanvasBounds, Rect};
use crate::util::geometry;

/// Grip offsets recorded when a move gesture starts.
///
/// `dx`/`dy` is the distance from the pointer-down point to the
/// rectangle's top-left corner, `ow`/`oh` the complementary distance to
/// its bottom-right, so the pointer keeps the same grip point in
/// rectangle-local coordinates for the whole move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub dx: i32,
    pub dy: i32,
    pub ow: i32,
    pub oh: i32,
}

impl Anchor {
    /// Record the grip offsets for a pointer-down at `(x, y)` on `rect`.
    pub fn grip(rect: &Rect, x: i32, y: i32) -> Self {
        let dx = x - rect.x;
        let dy = y - rect.y;
        Self {
            dx,
            dy,
            ow: rect.w - dx,
            oh: rect.h - dy,
        }
    }
}

/// The gesture a ROI is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Initial extent growing with the pointer from a fixed origin.
    Defining,
    /// Whole-rectangle translation with a recorded grip.
    Moving(Anchor),
    /// One or two edges following the pointer, the rest fixed.
    Resizing(Handle),
}

/// What a pointer-down on a ROI resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The ROI consumed the press and a gesture is now in progress.
    Claimed,
    /// The press landed outside the active rectangle and all of its
    /// handle zones; the caller should start a fresh ROI.
    Missed,
}

/// One managed rectangle with its selection lifecycle flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roi {
    /// Stable creation index within the owning collection.
    pub id: usize,
    pub rect: Rect,
    /// Set once a defining drag has run; only used ROIs are exported.
    pub used: bool,
    /// Set once creation has begun (the rectangle has an origin).
    pub active: bool,
    pub gesture: Gesture,
}

impl Roi {
    /// A fresh inactive placeholder with a zero rectangle.
    pub fn blank(id: usize) -> Self {
        Self {
            id,
            rect: Rect::zero(),
            used: false,
            active: false,
            gesture: Gesture::Idle,
        }
    }

    /// A ROI restored from persisted data or supplied by a tracker.
    ///
    /// Persisted rectangles already count as finalized.
    pub fn from_saved(id: usize, rect: Rect) -> Self {
        Self {
            id,
            rect,
            used: true,
            active: false,
            gesture: Gesture::Idle,
        }
    }

    /// Handle a pointer-down at the (clamped) position `(x, y)`.
    ///
    /// An inactive ROI anchors its origin there and starts defining; an
    /// active one is hit-tested against its handles and body. A miss is
    /// reported to the caller instead of mutating anything.
    pub fn press(&mut self, x: i32, y: i32) -> PressOutcome {
        if !self.active {
            self.rect.x = x;
            self.rect.y = y;
            self.active = true;
            self.gesture = Gesture::Defining;
            return PressOutcome::Claimed;
        }

        match handles::hit_test(self.rect, x, y, MARKER_SIZE) {
            Some(Hit::Handle(handle)) => {
                self.gesture = Gesture::Resizing(handle);
                PressOutcome::Claimed
            }
            Some(Hit::Body) => {
                self.gesture = Gesture::Moving(Anchor::grip(&self.rect, x, y));
                PressOutcome::Claimed
            }
            None => PressOutcome::Missed,
        }
    }

    /// Handle a pointer-move at the (clamped) position `(x, y)`.
    pub fn drag_to(&mut self, x: i32, y: i32, bounds: &CanvasBounds) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Defining => {
                // Extent may go negative while dragging up/left; it is
                // folded back once at release.
                self.rect.w = x - self.rect.x;
                self.rect.h = y - self.rect.y;
                self.used = true;
            }
            Gesture::Moving(anchor) => {
                let mut r = self.rect;
                r.x = x - anchor.dx;
                r.y = y - anchor.dy;
                self.rect = geometry::translate_into(r, bounds);
            }
            Gesture::Resizing(handle) => self.resize_to(handle, x, y),
        }
    }

    /// Move the edge(s) implied by `handle` to the pointer, leaving the
    /// opposite edge(s) fixed. Intentionally unclamped: a growing edge
    /// may pass the canvas border until the pointer clamp stops it.
    fn resize_to(&mut self, handle: Handle, x: i32, y: i32) {
        let r = &mut self.rect;
        match handle {
            Handle::TopLeft => {
                r.w = (r.x + r.w) - x;
                r.h = (r.y + r.h) - y;
                r.x = x;
                r.y = y;
            }
            Handle::TopRight => {
                r.h = (r.y + r.h) - y;
                r.y = y;
                r.w = x - r.x;
            }
            Handle::BottomLeft => {
                r.w = (r.x + r.w) - x;
                r.x = x;
                r.h = y - r.y;
            }
            Handle::BottomRight => {
                r.w = x - r.x;
                r.h = y - r.y;
            }
            Handle::TopMid => {
                r.h = (r.y + r.h) - y;
                r.y = y;
            }
            Handle::BottomMid => {
                r.h = y - r.y;
            }
            Handle::LeftMid => {
                r.w = (r.x + r.w) - x;
                r.x = x;
            }
            Handle::RightMid => {
                r.w = x - r.x;
            }
        }
    }

    /// Handle a pointer-up: end the gesture and normalize exactly once.
    ///
    /// A rectangle that ends with zero width or height is degenerate and
    /// drops back to inactive; it stays in the collection as a
    /// placeholder.
    pub fn release(&mut self) {
        self.gesture = Gesture::Idle;
        self.rect = geometry::normalized(self.rect);

        if self.rect.w == 0 || self.rect.h == 0 {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> CanvasBounds {
        CanvasBounds::of_frame(100, 100)
    }

    #[test]
    fn test_define_then_release_normalizes_inverted_drag() {
        let mut roi = Roi::blank(0);
        assert_eq!(roi.press(10, 10), PressOutcome::Claimed);
        assert!(roi.active);
        assert_eq!(roi.gesture, Gesture::Defining);

        roi.drag_to(5, 5, &bounds());
        assert_eq!(roi.rect, Rect::new(10, 10, -5, -5));
        assert!(roi.used);

        roi.release();
        assert_eq!(roi.rect, Rect::new(5, 5, 5, 5));
        assert!(roi.active);
        assert_eq!(roi.gesture, Gesture::Idle);
    }

    #[test]
    fn test_click_without_drag_deactivates() {
        let mut roi = Roi::blank(0);
        roi.press(30, 40);
        roi.release();
        assert!(!roi.active);
        assert!(!roi.used);
        assert_eq!(roi.rect, Rect::new(30, 40, 0, 0));
    }

    #[test]
    fn test_resize_bottom_right() {
        let mut roi = Roi::from_saved(0, Rect::new(0, 0, 50, 50));
        roi.active = true;
        assert_eq!(roi.press(50, 50), PressOutcome::Claimed);
        assert_eq!(roi.gesture, Gesture::Resizing(Handle::BottomRight));

        roi.drag_to(80, 90, &bounds());
        assert_eq!(roi.rect, Rect::new(0, 0, 80, 90));
    }

    #[test]
    fn test_resize_top_left_keeps_far_corner() {
        let mut roi = Roi::from_saved(0, Rect::new(20, 20, 30, 30));
        roi.active = true;
        roi.press(20, 20);
        assert_eq!(roi.gesture, Gesture::Resizing(Handle::TopLeft));

        roi.drag_to(10, 15, &bounds());
        assert_eq!(roi.rect, Rect::new(10, 15, 40, 35));
    }

    #[test]
    fn test_resize_edge_midpoints_move_one_edge() {
        let mut roi = Roi::from_saved(0, Rect::new(20, 20, 30, 30));
        roi.active = true;
        roi.press(35, 20); // top midpoint
        assert_eq!(roi.gesture, Gesture::Resizing(Handle::TopMid));
        roi.drag_to(60, 10, &bounds());
        assert_eq!(roi.rect, Rect::new(20, 10, 30, 40));

        roi.release();
        roi.press(50, 33); // right midpoint
        assert_eq!(roi.gesture, Gesture::Resizing(Handle::RightMid));
        roi.drag_to(70, 80, &bounds());
        assert_eq!(roi.rect, Rect::new(20, 10, 50, 40));
    }

    #[test]
    fn test_resize_does_not_mark_used() {
        let mut roi = Roi::from_saved(0, Rect::new(0, 0, 50, 50));
        roi.active = true;
        roi.used = false;
        roi.press(50, 50);
        roi.drag_to(60, 60, &bounds());
        assert!(!roi.used);
    }

    #[test]
    fn test_move_keeps_grip_and_clamps() {
        let mut roi = Roi::from_saved(0, Rect::new(0, 0, 20, 20));
        roi.active = true;
        roi.press(5, 5);
        match roi.gesture {
            Gesture::Moving(a) => {
                assert_eq!(a, Anchor { dx: 5, dy: 5, ow: 15, oh: 15 });
            }
            other => panic!("expected a move gesture, got {:?}", other),
        }

        roi.drag_to(50, 50, &bounds());
        assert_eq!(roi.rect, Rect::new(45, 45, 20, 20));

        // Far corner stays on the canvas: x + w <= 99.
        roi.drag_to(98, 98, &bounds());
        assert_eq!(roi.rect, Rect::new(79, 79, 20, 20));
    }

    #[test]
    fn test_press_outside_everything_misses() {
        let mut roi = Roi::from_saved(0, Rect::new(10, 10, 20, 20));
        roi.active = true;
        assert_eq!(roi.press(70, 70), PressOutcome::Missed);
        assert_eq!(roi.gesture, Gesture::Idle);
        assert_eq!(roi.rect, Rect::new(10, 10, 20, 20));
    }

    #[test]
    fn test_degenerate_release_keeps_used() {
        let mut roi = Roi::blank(0);
        roi.press(10, 10);
        roi.drag_to(30, 10, &bounds()); // width only, zero height
        roi.release();
        assert!(!roi.active);
        assert!(roi.used);
        assert_eq!(roi.rect, Rect::new(10, 10, 20, 0));
    }
}
