//! Input model: the active drawing style and the gesture state machine.
//!
//! `UiState` is what the host configures between gestures (tool, brush, color).
//! `InputState` is the gesture being tracked between press and release,
//! carrying the last surface point for live feedback and the stroke being
//! accumulated in image space.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::SurfacePoint;
use crate::consts::DEFAULT_BRUSH_SIZE;
use crate::stroke::{Rgb, Stroke, Tool};

/// Drawing style applied to the next gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Pen/rubber width in image pixels.
    pub brush_size: f64,
    /// Paint color for pen and lasso-pen.
    pub color: Rgb,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: Tool::default(), brush_size: DEFAULT_BRUSH_SIZE, color: Rgb::default() }
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// The pointer is pressed and a stroke is being captured.
    Drawing {
        /// Surface position of the previous event, start of the next feedback segment.
        last: SurfacePoint,
        /// Stroke accumulated so far, in image space.
        stroke: Stroke,
    },
}

impl InputState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
