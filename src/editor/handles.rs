// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resize handle layout and hit-testing.
//!
//! A selected rectangle exposes eight square grab zones centered on its
//! corners and edge midpoints, plus the rectangle body as a ninth,
//! lowest-priority zone.

use crate::models::rect::Rect;
use crate::util::geometry::contains_point;

/// Half the side length of a handle's square hit zone, in pixels.
pub const MARKER_SIZE: i32 = 4;

/// One of the eight resize handles of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    TopMid,
    BottomMid,
    LeftMid,
    RightMid,
}

/// Fixed hit-test order: corners before edge midpoints.
///
/// Corner zones overlap midpoint zones on rectangles smaller than
/// `4 * MARKER_SIZE`, so this order decides which handle wins there.
/// First match wins; changing the order changes observable behavior.
pub const HIT_ORDER: [Handle; 8] = [
    Handle::TopLeft,
    Handle::TopRight,
    Handle::BottomLeft,
    Handle::BottomRight,
    Handle::TopMid,
    Handle::BottomMid,
    Handle::LeftMid,
    Handle::RightMid,
];

/// Result of hit-testing a pointer position against a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A resize handle zone was struck.
    Handle(Handle),
    /// The rectangle body was struck outside every handle zone.
    Body,
}

impl Handle {
    /// Center of this handle on the given rectangle.
    pub fn center(self, r: Rect) -> (i32, i32) {
        match self {
            Handle::TopLeft => (r.x, r.y),
            Handle::TopRight => (r.x + r.w, r.y),
            Handle::BottomLeft => (r.x, r.y + r.h),
            Handle::BottomRight => (r.x + r.w, r.y + r.h),
            Handle::TopMid => (r.x + r.w / 2, r.y),
            Handle::BottomMid => (r.x + r.w / 2, r.y + r.h),
            Handle::LeftMid => (r.x, r.y + r.h / 2),
            Handle::RightMid => (r.x + r.w, r.y + r.h / 2),
        }
    }

    /// Square hit zone of side `2 * marker_size` centered on the handle.
    pub fn zone(self, r: Rect, marker_size: i32) -> Rect {
        let (cx, cy) = self.center(r);
        Rect::new(cx - marker_size, cy - marker_size, marker_size * 2, marker_size * 2)
    }
}

/// Hit-test a clamped pointer position against a rectangle's zones.
///
/// Handles are probed in [`HIT_ORDER`], then the body; `None` means the
/// pointer struck neither.
pub fn hit_test(r: Rect, x: i32, y: i32, marker_size: i32) -> Option<Hit> {
    for handle in HIT_ORDER {
        let z = handle.zone(r, marker_size);
        if contains_point(x, y, z.x, z.y, z.w, z.h) {
            return Some(Hit::Handle(handle));
        }
    }

    // The body check has to stay below all of the handle checks.
    if contains_point(x, y, r.x, r.y, r.w, r.h) {
        return Some(Hit::Body);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_geometry() {
        let r = Rect::new(10, 20, 40, 30);
        assert_eq!(Handle::TopLeft.zone(r, 4), Rect::new(6, 16, 8, 8));
        assert_eq!(Handle::BottomRight.zone(r, 4), Rect::new(46, 46, 8, 8));
        assert_eq!(Handle::TopMid.zone(r, 4), Rect::new(26, 16, 8, 8));
        assert_eq!(Handle::LeftMid.zone(r, 4), Rect::new(6, 31, 8, 8));
    }

    #[test]
    fn test_corner_and_midpoint_hits() {
        let r = Rect::new(100, 100, 60, 40);
        assert_eq!(hit_test(r, 100, 100, 4), Some(Hit::Handle(Handle::TopLeft)));
        assert_eq!(hit_test(r, 160, 140, 4), Some(Hit::Handle(Handle::BottomRight)));
        assert_eq!(hit_test(r, 130, 100, 4), Some(Hit::Handle(Handle::TopMid)));
        assert_eq!(hit_test(r, 160, 120, 4), Some(Hit::Handle(Handle::RightMid)));
    }

    #[test]
    fn test_body_is_lowest_priority() {
        let r = Rect::new(100, 100, 60, 40);
        assert_eq!(hit_test(r, 130, 120, 4), Some(Hit::Body));
        // Inside the rectangle but within the top-left zone.
        assert_eq!(hit_test(r, 103, 103, 4), Some(Hit::Handle(Handle::TopLeft)));
    }

    #[test]
    fn test_miss_returns_none() {
        let r = Rect::new(100, 100, 60, 40);
        assert_eq!(hit_test(r, 10, 10, 4), None);
        assert_eq!(hit_test(r, 170, 150, 4), None);
    }

    #[test]
    fn test_corners_beat_midpoints_on_small_rects() {
        // 6x6 rectangle: every midpoint zone overlaps a corner zone.
        let r = Rect::new(50, 50, 6, 6);
        // The midpoint of the top edge lies inside both the TL and TM
        // zones; the fixed order awards it to the corner.
        assert_eq!(hit_test(r, 53, 50, 4), Some(Hit::Handle(Handle::TopLeft)));
        assert_eq!(hit_test(r, 56, 53, 4), Some(Hit::Handle(Handle::TopRight)));
        assert_eq!(hit_test(r, 53, 56, 4), Some(Hit::Handle(Handle::BottomLeft)));
    }

    #[test]
    fn test_zero_rect_hits_top_left_first() {
        let r = Rect::zero();
        assert_eq!(hit_test(r, 0, 0, 4), Some(Hit::Handle(Handle::TopLeft)));
    }
}
