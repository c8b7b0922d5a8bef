//! Shared numeric constants for the canvas crate.

// ── Brush ───────────────────────────────────────────────────────

/// Brush width in image pixels before the host configures one.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

/// Outline width for lasso gestures, in surface pixels. Not scaled by zoom.
pub const LASSO_LINE_WIDTH_PX: f64 = 1.5;

// ── Colors ──────────────────────────────────────────────────────

/// Stroke color used by the rubber tool when compositing with `destination-out`.
pub const ERASE_STROKE_STYLE: &str = "rgba(0, 0, 0, 1)";

/// Neutral outline color drawn while a lasso-rubber region is being traced.
pub const LASSO_ERASE_OUTLINE_STYLE: &str = "rgb(255, 255, 255)";
