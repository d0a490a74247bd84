//! plandraw — a floor-plan-to-architectural-drawing compiler.
//!
//! Takes a structured room layout (rooms, optional door/window openings,
//! optional overall dimensions) and deterministically produces a fully
//! dimensioned, scaled, annotated SVG resembling a professional construction
//! floor plan: exterior wall hatching, inferred interior partitions,
//! door/window symbols, two-level dimension chains, and a title block.
//!
//! The whole pipeline is a pure, synchronous function of its input; calls
//! are independent and safe to run in parallel.
//!
//! ```
//! let layout: plandraw::Layout = serde_json::from_str(
//!     r#"{"rooms": [{"name": "Bedroom", "x": 0, "y": 0, "width": 12, "height": 10}]}"#,
//! ).unwrap();
//! let svg = plandraw::render_layout(&layout).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod api;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;

pub use api::{ApiResponse, handle_render_request};
pub use errors::RenderError;
pub use layout::{Layout, Opening, OpeningKind, Room, WallSegment, WallSide};
pub use render::{Sheet, SheetOptions};

/// Render a layout to SVG with the default sheet options.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_layout(layout: &Layout) -> Result<String, miette::Report> {
    render::render(layout, &SheetOptions::default()).map_err(miette::Report::new)
}

/// Render a layout with explicit sheet options (alternate scale, margins,
/// line weights).
pub fn render_layout_with(layout: &Layout, opts: &SheetOptions) -> Result<String, miette::Report> {
    render::render(layout, opts).map_err(miette::Report::new)
}
