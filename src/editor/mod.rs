// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive ROI editor for a single frame.
//!
//! [`RoiEditor`] binds one ROI collection to one frame's canvas bounds
//! and routes pointer events to the current ROI's gesture machine. The
//! embedding application owns the event source and calls
//! [`RoiEditor::on_pointer_event`] directly; there is no ambient
//! callback registration.

pub mod collection;
pub mod handles;
pub mod render;
pub mod roi;

use crate::editor::collection::RoiCollection;
use crate::editor::render::DrawCommand;
use crate::editor::roi::PressOutcome;
use crate::models::rect::{CanvasBounds, Rect};
use crate::util::geometry;

/// Kind of a pointer event, in frame-pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Up,
    Move,
    DoubleClick,
}

/// One pointer event as delivered by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn down(x: i32, y: i32) -> Self {
        Self { kind: PointerKind::Down, x, y }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self { kind: PointerKind::Up, x, y }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self { kind: PointerKind::Move, x, y }
    }

    pub fn double_click(x: i32, y: i32) -> Self {
        Self { kind: PointerKind::DoubleClick, x, y }
    }
}

/// Pointer-driven rectangle editor scoped to exactly one video frame.
#[derive(Debug)]
pub struct RoiEditor {
    bounds: CanvasBounds,
    rois: RoiCollection,
}

impl RoiEditor {
    /// Create an editor for the given drawable area.
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            bounds,
            rois: RoiCollection::new(),
        }
    }

    /// Create an editor covering a full frame of the given dimensions.
    pub fn for_frame(width: u32, height: u32) -> Self {
        Self::new(CanvasBounds::of_frame(width, height))
    }

    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    /// Seed the editor with this frame's previously persisted
    /// rectangles. Entries that are not `[x, y, w, h]` are dropped.
    pub fn load_saved<T: AsRef<[i32]>>(&mut self, rects: &[T]) {
        self.rois.load_from_persisted(rects);
    }

    /// Append a rectangle supplied by an external tracker or classifier
    /// as a finalized, current ROI, bypassing pointer gestures.
    pub fn inject_external_roi(&mut self, rect: Rect) {
        log::info!("injecting external roi {:?}", rect);
        self.rois.append_external(rect);
    }

    /// Process one pointer event.
    ///
    /// The coordinate is clamped to the canvas before any gesture logic
    /// runs; events arriving after the terminal export are ignored.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        let (x, y) = geometry::clamp_point(event.x, event.y, &self.bounds);

        match event.kind {
            PointerKind::Down => self.pointer_down(x, y),
            PointerKind::Move => self.pointer_move(x, y),
            PointerKind::Up => self.pointer_up(),
            PointerKind::DoubleClick => self.double_click(x, y),
        }
    }

    fn pointer_down(&mut self, x: i32, y: i32) {
        let Some(roi) = self.rois.current_mut() else {
            log::debug!("pointer down after export, ignoring");
            return;
        };

        if roi.press(x, y) == PressOutcome::Missed {
            // The press landed on empty canvas: the old ROI stays as it
            // is and a fresh one becomes the target of the next drag.
            self.rois.add_blank();
        }
    }

    fn pointer_move(&mut self, x: i32, y: i32) {
        let bounds = self.bounds;
        if let Some(roi) = self.rois.current_mut() {
            roi.drag_to(x, y, &bounds);
        }
    }

    fn pointer_up(&mut self) {
        if let Some(roi) = self.rois.current_mut() {
            roi.release();
        }
    }

    /// Select the first ROI containing the click point.
    ///
    /// A double click is always preceded by a single pointer-down, and a
    /// down on empty canvas has already spawned a blank placeholder; an
    /// untouched placeholder is removed again before selecting.
    fn double_click(&mut self, x: i32, y: i32) {
        if let Some(roi) = self.rois.current() {
            if roi.rect.is_zero() {
                self.rois.remove_current();
            }
        }

        if self.rois.select_at(x, y) {
            log::info!("selected roi at ({}, {})", x, y);
        }
    }

    /// Remove the most recently added ROI (the operator's delete
    /// command). The collection re-seeds itself if this was the last.
    pub fn remove_current_roi(&mut self) {
        self.rois.remove_current();
    }

    /// Rectangle of the current ROI, e.g. to seed an object tracker.
    pub fn current_rect(&self) -> Option<Rect> {
        self.rois.current().map(|roi| roi.rect)
    }

    /// Draw commands for the embedding renderer, in z-order.
    pub fn render(&self) -> Vec<DrawCommand> {
        self.rois.render()
    }

    /// Terminal export of this frame's used rectangles in creation
    /// order. The editor is spent afterwards; a second call yields an
    /// empty list.
    pub fn export_frame_result(&mut self) -> Vec<[i32; 4]> {
        self.rois.export_used()
    }
}
