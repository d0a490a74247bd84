//! Error types with rich diagnostics using miette.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while composing a drawing.
///
/// The renderer either returns a complete document or one of these; it never
/// emits a partial document.
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("room {name:?} has non-positive size {width} x {height}")]
    #[diagnostic(
        code(plandraw::render::degenerate_room),
        help("room width and height must both be greater than zero")
    )]
    DegenerateRoom {
        name: String,
        width: f64,
        height: f64,
    },

    #[error("room {name:?} has a non-finite coordinate")]
    #[diagnostic(code(plandraw::render::non_finite_room))]
    NonFiniteRoom { name: String },

    #[error("opening on {wall} wall has non-positive width {width}")]
    #[diagnostic(code(plandraw::render::degenerate_opening))]
    DegenerateOpening { wall: &'static str, width: f64 },

    #[error("opening on {wall} wall has a non-finite coordinate")]
    #[diagnostic(code(plandraw::render::non_finite_opening))]
    NonFiniteOpening { wall: &'static str },

    #[error("invalid drawing scale: {value}")]
    #[diagnostic(code(plandraw::render::invalid_scale))]
    InvalidScale { value: f64 },

    #[error("infinite or NaN in drawing bounds")]
    #[diagnostic(code(plandraw::render::invalid_bounds))]
    InvalidBounds,
}
