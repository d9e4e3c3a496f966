// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ordered ROI bookkeeping for one frame.
//!
//! The collection owns every ROI of the current frame in creation order
//! (creation order is z-order and export order) and tracks which one is
//! current, i.e. receiving pointer events. While editing it is never
//! empty: there is always at least a blank placeholder ready for the
//! next drag. The terminal export drains it.

use crate::editor::handles::{HIT_ORDER, MARKER_SIZE};
use crate::editor::render::{DrawCommand, CURRENT_COLOR, SECONDARY_COLOR};
use crate::editor::roi::Roi;
use crate::models::rect::Rect;
use crate::util::geometry::contains_point;

/// The ROIs of one frame plus the current-selection index.
///
/// The current ROI is referenced by index, never by a second owning
/// handle; every mutation keeps the index valid.
#[derive(Debug)]
pub struct RoiCollection {
    rois: Vec<Roi>,
    current: Option<usize>,
    next_id: usize,
}

impl RoiCollection {
    /// A collection seeded with a single blank ROI.
    pub fn new() -> Self {
        let mut c = Self {
            rois: Vec::new(),
            current: None,
            next_id: 0,
        };
        c.add_blank();
        c
    }

    /// Append a fresh inactive ROI and make it current.
    pub fn add_blank(&mut self) {
        let roi = Roi::blank(self.next_id);
        self.next_id += 1;
        self.rois.push(roi);
        self.current = Some(self.rois.len() - 1);
    }

    /// Remove the most recently added ROI.
    ///
    /// Editing always happens at the tail, so only the tail is ever
    /// removed. If the collection would become empty it is re-seeded
    /// with a blank ROI; the new current is the new tail.
    pub fn remove_current(&mut self) {
        self.rois.pop();

        if self.rois.is_empty() {
            self.add_blank();
        } else {
            self.current = Some(self.rois.len() - 1);
        }
    }

    /// Replace the collection wholesale with persisted rectangles.
    ///
    /// Entries that are not exactly `[x, y, w, h]` are rejected
    /// individually. Every loaded ROI counts as finalized; the last one
    /// becomes active and current. If nothing survives validation the
    /// collection falls back to a single blank ROI.
    pub fn load_from_persisted<T: AsRef<[i32]>>(&mut self, rects: &[T]) {
        self.rois.clear();
        self.current = None;
        self.next_id = 0;

        for entry in rects {
            let entry = entry.as_ref();
            if entry.len() != 4 {
                log::warn!("rejecting persisted roi with {} components", entry.len());
                continue;
            }
            let rect = Rect::new(entry[0], entry[1], entry[2], entry[3]);
            let roi = Roi::from_saved(self.next_id, rect);
            self.next_id += 1;
            self.rois.push(roi);
        }

        if let Some(last) = self.rois.last_mut() {
            last.active = true;
            self.current = Some(self.rois.len() - 1);
            log::info!("loaded {} persisted rois", self.rois.len());
        } else {
            self.add_blank();
        }
    }

    /// Append a finalized ROI produced outside pointer gestures, e.g. by
    /// an object tracker, and make it current.
    pub fn append_external(&mut self, rect: Rect) {
        let mut roi = Roi::from_saved(self.next_id, rect);
        roi.active = true;
        self.next_id += 1;
        self.rois.push(roi);
        self.current = Some(self.rois.len() - 1);
    }

    /// Select the first ROI (in creation order) containing the point.
    ///
    /// The selected ROI is marked active. Returns false when no ROI
    /// contains the point; the selection is then left unchanged.
    pub fn select_at(&mut self, x: i32, y: i32) -> bool {
        let hit = self.rois.iter().position(|roi| {
            let r = roi.rect;
            contains_point(x, y, r.x, r.y, r.w, r.h)
        });

        match hit {
            Some(index) => {
                self.current = Some(index);
                self.rois[index].active = true;
                true
            }
            None => false,
        }
    }

    /// Drain the collection and return the used rectangles in creation
    /// order.
    ///
    /// This is the terminal, once-per-frame export: afterwards the
    /// collection is empty, there is no current ROI, and a second call
    /// yields an empty list.
    pub fn export_used(&mut self) -> Vec<[i32; 4]> {
        let rects = self
            .rois
            .drain(..)
            .filter(|roi| roi.used)
            .map(|roi| roi.rect.to_array())
            .collect();
        self.current = None;
        rects
    }

    /// The current ROI, if the collection has not been exported yet.
    pub fn current(&self) -> Option<&Roi> {
        self.current.map(|i| &self.rois[i])
    }

    /// Mutable access to the current ROI.
    pub fn current_mut(&mut self) -> Option<&mut Roi> {
        match self.current {
            Some(index) => self.rois.get_mut(index),
            None => None,
        }
    }

    /// True if `roi` is the current one.
    fn is_current(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    pub fn len(&self) -> usize {
        self.rois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rois.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Roi> {
        self.rois.iter()
    }

    /// Emit one outline per ROI in z-order; the current ROI is drawn in
    /// the primary color with its eight handle markers, all others in
    /// the secondary color.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        for (index, roi) in self.rois.iter().enumerate() {
            if self.is_current(index) {
                commands.push(DrawCommand::outline(roi.rect, CURRENT_COLOR));
                for handle in HIT_ORDER {
                    commands.push(DrawCommand::marker(
                        handle.zone(roi.rect, MARKER_SIZE),
                        CURRENT_COLOR,
                    ));
                }
            } else {
                commands.push(DrawCommand::outline(roi.rect, SECONDARY_COLOR));
            }
        }

        commands
    }
}
