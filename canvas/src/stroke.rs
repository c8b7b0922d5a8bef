//! Stroke model: drawing tools, paint color, and completed gestures.
//!
//! A [`Stroke`] is one continuous pointer gesture. Its points are stored in
//! image space so the payload can be applied by the segmentation store without
//! knowing how the slice was zoomed or panned when it was drawn. The serialized
//! shape (`mode`, `brushSize`, `color`, `points`) is the one the edit endpoint
//! accepts.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::camera::ImagePoint;

/// Which drawing tool is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand paint at brush width (default).
    #[default]
    Pen,
    /// Freehand erase at brush width.
    Rubber,
    /// Outline a region to fill with the active label.
    LassoPen,
    /// Outline a region to clear.
    LassoRubber,
}

impl Tool {
    /// Parse a tool identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pen" => Some(Self::Pen),
            "rubber" => Some(Self::Rubber),
            "lasso_pen" => Some(Self::LassoPen),
            "lasso_rubber" => Some(Self::LassoRubber),
            _ => None,
        }
    }

    /// Wire identifier for this tool.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Rubber => "rubber",
            Self::LassoPen => "lasso_pen",
            Self::LassoRubber => "lasso_rubber",
        }
    }

    /// Human-readable mode label for the host's indicator.
    #[must_use]
    pub fn mode_label(self) -> &'static str {
        match self {
            Self::Pen => "Mode: Pen",
            Self::Rubber => "Mode: Rubber",
            Self::LassoPen => "Mode: Lasso Pen",
            Self::LassoRubber => "Mode: Lasso Rubber",
        }
    }

    /// Whether this tool outlines a region instead of painting freehand.
    #[must_use]
    pub fn is_lasso(self) -> bool {
        matches!(self, Self::LassoPen | Self::LassoRubber)
    }

    /// Whether strokes made with this tool remove mask pixels.
    #[must_use]
    pub fn is_erasing(self) -> bool {
        matches!(self, Self::Rubber | Self::LassoRubber)
    }
}

/// Opaque paint color.
///
/// Channels are carried as given; values outside `0..=255` are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    #[must_use]
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS `rgb(r, g, b)` string.
    #[must_use]
    pub fn parse_css(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix("rgb(")?.strip_suffix(')')?;
        let parts = inner.split(',').map(str::trim).collect::<Vec<_>>();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        let (Ok(r), Ok(g), Ok(b)) = (r.parse(), g.parse(), b.parse()) else {
            return None;
        };
        Some(Self { r, g, b })
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self { r: 255, g: 0, b: 0 }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RgbVisitor;

        impl Visitor<'_> for RgbVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS color string like \"rgb(255, 0, 0)\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb, E> {
                Rgb::parse_css(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(RgbVisitor)
    }
}

/// One completed (or in-progress) pointer gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Tool active when the gesture started.
    #[serde(rename = "mode")]
    pub tool: Tool,
    /// Brush width in image pixels. Absent for lasso strokes.
    #[serde(rename = "brushSize", default, skip_serializing_if = "Option::is_none")]
    pub brush_size: Option<f64>,
    /// Paint color. Ignored by the store for erasing tools.
    pub color: Rgb,
    /// Ordered image-space points; never empty.
    pub points: Vec<ImagePoint>,
}

impl Stroke {
    /// Start a stroke at `origin`, snapshotting the active style.
    #[must_use]
    pub fn begin(tool: Tool, brush_size: f64, color: Rgb, origin: ImagePoint) -> Self {
        let brush_size = if tool.is_lasso() { None } else { Some(brush_size) };
        Self { tool, brush_size, color, points: vec![origin] }
    }

    /// Append the next image-space point.
    pub fn push(&mut self, point: ImagePoint) {
        self.points.push(point);
    }
}
