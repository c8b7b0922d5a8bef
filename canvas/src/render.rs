//! Rendering: applies engine actions to a 2D context for live stroke feedback.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It draws in surface pixels and never reads or mutates engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The event listeners in [`crate::engine::Engine`] handle the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{ERASE_STROKE_STYLE, LASSO_ERASE_OUTLINE_STYLE, LASSO_LINE_WIDTH_PX};
use crate::engine::Action;
use crate::input::UiState;
use crate::stroke::Tool;

/// Canvas compositing mode for a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint over existing pixels.
    SourceOver,
    /// Clear existing pixels under the stroke.
    DestinationOut,
}

impl Composite {
    /// Value for `globalCompositeOperation`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::DestinationOut => "destination-out",
        }
    }
}

/// Context configuration captured when a gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub composite: Composite,
    /// Line width in surface pixels.
    pub line_width: f64,
    /// CSS stroke color.
    pub color: String,
}

impl StrokeStyle {
    /// Style for the active tool. `view_scale` converts the image-space brush
    /// width into surface pixels; lasso outlines ignore it.
    #[must_use]
    pub fn for_tool(ui: &UiState, view_scale: f64) -> Self {
        match ui.tool {
            Tool::Pen => Self {
                composite: Composite::SourceOver,
                line_width: ui.brush_size * view_scale,
                color: ui.color.to_string(),
            },
            Tool::Rubber => Self {
                composite: Composite::DestinationOut,
                line_width: ui.brush_size * view_scale,
                color: ERASE_STROKE_STYLE.to_owned(),
            },
            Tool::LassoPen => Self {
                composite: Composite::SourceOver,
                line_width: LASSO_LINE_WIDTH_PX,
                color: ui.color.to_string(),
            },
            Tool::LassoRubber => Self {
                composite: Composite::SourceOver,
                line_width: LASSO_LINE_WIDTH_PX,
                color: LASSO_ERASE_OUTLINE_STYLE.to_owned(),
            },
        }
    }
}

/// Apply a batch of engine actions in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn apply_all(ctx: &CanvasRenderingContext2d, actions: &[Action]) -> Result<(), JsValue> {
    for action in actions {
        apply(ctx, action)?;
    }
    Ok(())
}

/// Apply one engine action.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn apply(ctx: &CanvasRenderingContext2d, action: &Action) -> Result<(), JsValue> {
    match action {
        Action::ApplyStyle(style) => apply_style(ctx, style),
        Action::DrawSegment { from, to } => {
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
            Ok(())
        }
        Action::StrokeCompleted { .. } => Ok(()),
    }
}

/// Restore the context defaults a stroke style may have changed: identity
/// transform, `source-over`, full alpha. Layer redraws on the stroke surface
/// must start from this or an erase style leaves them blank.
///
/// # Errors
///
/// Returns `Err` if the context rejects the transform or composite mode.
pub fn reset(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_global_composite_operation(Composite::SourceOver.as_str())?;
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn apply_style(ctx: &CanvasRenderingContext2d, style: &StrokeStyle) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.set_line_width(style.line_width);
    ctx.set_global_composite_operation(style.composite.as_str())?;
    ctx.set_stroke_style_str(&style.color);
    Ok(())
}
