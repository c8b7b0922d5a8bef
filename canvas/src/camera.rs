#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in the drawing surface's intrinsic pixel grid.
///
/// This is the space the 2D context renders in. It is never sent to the
/// server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in image pixels, the space the segmentation store understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Convert a log2 zoom level into a render scale (0 = 1x, 1 = 2x, -1 = 0.5x).
#[must_use]
pub fn zoom_scale(zoom_level: f64) -> f64 {
    2.0_f64.powf(zoom_level)
}

/// Placement of a surface on the page.
///
/// `left`/`top`/`css_width`/`css_height` come from the element's bounding rect
/// (CSS pixels); `width`/`height` are its intrinsic pixel dimensions. The two
/// differ whenever the page stretches the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub left: f64,
    pub top: f64,
    pub css_width: f64,
    pub css_height: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceGeometry {
    /// Geometry for a surface displayed at its intrinsic size at the page origin.
    #[must_use]
    pub fn unscaled(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, css_width: width, css_height: height, width, height }
    }

    /// Rescale a client-space pointer position into the intrinsic pixel grid.
    #[must_use]
    pub fn to_surface(&self, client_x: f64, client_y: f64) -> SurfacePoint {
        SurfacePoint {
            x: (client_x - self.left) * axis_factor(self.width, self.css_width),
            y: (client_y - self.top) * axis_factor(self.height, self.css_height),
        }
    }
}

fn axis_factor(intrinsic: f64, css: f64) -> f64 {
    if css > 0.0 { intrinsic / css } else { 1.0 }
}

/// Affine view transform `surface = image * scale + (tx, ty)`.
///
/// This is the only place surface and image coordinates are converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { scale: 1.0, tx: 0.0, ty: 0.0 }
    }
}

impl ViewTransform {
    /// Center an image of size `image` in `viewport`, scaled by `2^zoom_level`,
    /// then shift by the pan offsets (surface pixels).
    #[must_use]
    pub fn centered(zoom_level: f64, pan_x: f64, pan_y: f64, viewport: Size, image: Size) -> Self {
        let scale = zoom_scale(zoom_level);
        Self {
            scale,
            tx: viewport.width / 2.0 + pan_x - (scale * image.width) / 2.0,
            ty: viewport.height / 2.0 + pan_y - (scale * image.height) / 2.0,
        }
    }

    /// Map a surface point into image space.
    #[must_use]
    pub fn surface_to_image(&self, p: SurfacePoint) -> ImagePoint {
        ImagePoint { x: (p.x - self.tx) / self.scale, y: (p.y - self.ty) / self.scale }
    }

    /// Map an image point onto the surface.
    #[must_use]
    pub fn image_to_surface(&self, p: ImagePoint) -> SurfacePoint {
        SurfacePoint { x: p.x * self.scale + self.tx, y: p.y * self.scale + self.ty }
    }
}
