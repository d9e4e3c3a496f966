// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interactive ROI editor core for video labelling tools.
//!
//! The crate implements the pointer-driven rectangle editor at the heart
//! of a frame-by-frame video labeller: creating, selecting, moving and
//! resizing axis-aligned regions of interest with eight-handle resize
//! semantics, plus the per-frame record keeping around it. Video
//! decoding, rendering, key mapping and playback control belong to the
//! embedding application and are represented by the collaborator traits
//! in [`session`].
//!
//! Typical per-frame flow: obtain an editor from
//! [`session::LabelSession::editor_for_frame`], feed it pointer events
//! via [`editor::RoiEditor::on_pointer_event`], paint the commands from
//! [`editor::RoiEditor::render`], then commit
//! [`editor::RoiEditor::export_frame_result`] back into the session.

pub mod editor;
pub mod io;
pub mod models;
pub mod session;
pub mod util;

pub use editor::{PointerEvent, PointerKind, RoiEditor};
pub use models::rect::{CanvasBounds, Rect};
