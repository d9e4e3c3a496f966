// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draw-command contract.
//!
//! The editor never paints; it hands the embedding application an ordered
//! list of primitives to draw over the current frame.

use crate::models::rect::Rect;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Outline and marker color of the current (selected) ROI.
pub const CURRENT_COLOR: Color = Color::rgb(0, 255, 0);

/// Outline color of every other ROI.
pub const SECONDARY_COLOR: Color = Color::rgb(255, 255, 0);

/// One rectangle primitive for the embedding renderer to paint.
///
/// Commands are emitted in z-order: earlier ROIs first, the current
/// ROI's handle markers directly after its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
    /// True for the small handle squares of the current ROI, false for
    /// ROI outlines.
    pub is_handle_marker: bool,
}

impl DrawCommand {
    pub fn outline(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            is_handle_marker: false,
        }
    }

    pub fn marker(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            color,
            is_handle_marker: true,
        }
    }
}
