#![allow(clippy::float_cmp)]

use super::*;
use crate::camera::ImagePoint;

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Pen);
    assert_eq!(ui.brush_size, DEFAULT_BRUSH_SIZE);
    assert_eq!(ui.color, Rgb::new(255, 0, 0));
}

#[test]
fn input_state_default_is_idle() {
    assert!(!InputState::default().is_drawing());
}

#[test]
fn drawing_state_reports_drawing() {
    let state = InputState::Drawing {
        last: SurfacePoint::new(0.0, 0.0),
        stroke: Stroke::begin(Tool::Pen, 5.0, Rgb::default(), ImagePoint::new(0.0, 0.0)),
    };
    assert!(state.is_drawing());
}
