// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Labelling session spanning a whole video.
//!
//! The session owns the per-frame results across frames and wires the
//! external collaborators together: it seeds a fresh [`RoiEditor`] for
//! each frame from previously persisted rectangles, commits exported
//! rectangles plus the frame's event back into the store, runs the
//! pre-classifier over a frame source and relays tracker output into an
//! editor. Frame iteration, rendering, key mapping and playback control
//! stay with the embedding application.

use crate::editor::RoiEditor;
use crate::io::config::LabelConfig;
use crate::io::records::{FrameRecord, ResultsStore};
use crate::models::rect::Rect;
use anyhow::Result;
use image::RgbaImage;

/// Source of decoded video frames.
///
/// Implemented by the embedding application on top of its video
/// backend; the crate itself never decodes video.
pub trait FrameSource {
    fn frame_count(&self) -> u32;
    fn fps(&self) -> f64;
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Decode the frame at `index`; `Ok(None)` past the end of the
    /// video.
    fn read_frame(&mut self, index: u32) -> Result<Option<RgbaImage>>;
}

/// External single-object tracker following one ROI across frames.
pub trait ObjectTracker {
    /// Start tracking `roi` as it appears in `frame`. Returns false if
    /// the tracker could not lock on.
    fn init(&mut self, frame: &RgbaImage, roi: Rect) -> bool;

    /// Locate the tracked object in `frame`; `None` once lost.
    fn track(&mut self, frame: &RgbaImage) -> Option<Rect>;

    /// Drop the tracked object.
    fn reset(&mut self);

    fn is_active(&self) -> bool;
}

/// External pre-classifier proposing ROIs for unlabelled frames.
pub trait RoiClassifier {
    fn detect(&self, frame: &RgbaImage) -> Vec<Rect>;
}

/// Labelling state for one video: the event vocabulary and the per-frame
/// results accumulated so far.
#[derive(Debug)]
pub struct LabelSession {
    width: u32,
    height: u32,
    events: Vec<String>,
    results: ResultsStore,
}

impl LabelSession {
    /// Start a session with no previous results.
    pub fn new(config: &LabelConfig) -> Self {
        Self::with_results(config, ResultsStore::new())
    }

    /// Resume a session from previously persisted results.
    pub fn with_results(config: &LabelConfig, results: ResultsStore) -> Self {
        if !results.is_empty() {
            log::info!("resuming with {} labelled frames", results.len());
        }
        Self {
            width: config.width,
            height: config.height,
            events: config.events.clone(),
            results,
        }
    }

    /// A fresh editor for the given frame, seeded with that frame's
    /// persisted rectangles if any.
    pub fn editor_for_frame(&self, index: u32) -> RoiEditor {
        let mut editor = RoiEditor::for_frame(self.width, self.height);
        if let Some(record) = self.results.get(&index) {
            if !record.rois.is_empty() {
                editor.load_saved(&record.rois);
            }
        }
        editor
    }

    /// The event previously recorded for a frame.
    pub fn stored_event(&self, index: u32) -> Option<&str> {
        self.results.get(&index).and_then(|r| r.event.as_deref())
    }

    /// Store one frame's outcome.
    ///
    /// A frame already present in the store is always overwritten (the
    /// operator may have cleared it); an unseen frame is only recorded
    /// when it carries at least one rectangle or an event.
    pub fn commit_frame(&mut self, index: u32, rois: Vec<[i32; 4]>, event: Option<String>) {
        let record = FrameRecord::new(rois, event);

        if self.results.contains_key(&index) || !record.is_empty() {
            self.results.insert(index, record);
        }
    }

    /// Event name for a selection slot, or `None` when the slot is out
    /// of the configured vocabulary.
    pub fn event_by_slot(&self, slot: usize) -> Option<&str> {
        let event = self.events.get(slot).map(String::as_str);
        if event.is_none() {
            log::warn!("no event configured for slot {}", slot);
        }
        event
    }

    /// Run the classifier over every frame of the source and store its
    /// detections, with no event attached.
    pub fn preclassify(
        &mut self,
        source: &mut dyn FrameSource,
        classifier: &dyn RoiClassifier,
    ) -> Result<()> {
        let mut index = 0u32;
        while let Some(frame) = source.read_frame(index)? {
            let rois = classifier
                .detect(&frame)
                .into_iter()
                .map(|r| r.to_array())
                .collect();
            self.results.insert(index, FrameRecord::new(rois, None));
            index += 1;
        }
        log::info!("pre-classified {} frames", index);
        Ok(())
    }

    pub fn results(&self) -> &ResultsStore {
        &self.results
    }

    /// Hand the accumulated results back, e.g. for saving.
    pub fn into_results(self) -> ResultsStore {
        self.results
    }
}

/// Poll the tracker once for `frame` and inject a successful result
/// into the editor as a finalized ROI.
pub fn feed_tracked_roi(
    tracker: &mut dyn ObjectTracker,
    frame: &RgbaImage,
    editor: &mut RoiEditor,
) {
    if !tracker.is_active() {
        return;
    }
    match tracker.track(frame) {
        Some(roi) => editor.inject_external_roi(roi),
        None => log::warn!("tracker lost its object"),
    }
}
