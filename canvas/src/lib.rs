//! Stroke capture engine for the slice annotation surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing surface of the mask layer: translating raw pointer events into live
//! stroke feedback and an ordered buffer of completed strokes expressed in
//! image-space coordinates. It knows nothing about slices, labels, or the
//! network; the host injects the surface-to-image mapping and the view scale,
//! and drains the pending buffer when it syncs with the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-bound [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`camera`] | Surface/image coordinate types and the view transform |
//! | [`stroke`] | Tools, colors, and the stroke wire model |
//! | [`input`] | Pointer gesture state machine types |
//! | [`render`] | Applies engine actions to a 2D context |
//! | [`consts`] | Shared numeric constants (brush defaults, lasso width) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod stroke;
