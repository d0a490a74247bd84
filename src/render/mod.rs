//! The drawing pipeline: one layout in, one SVG document out.
//!
//! Control flow is strictly linear — normalize, map, compose walls, draw
//! rooms, overlay openings, dimension, title block, serialize — and every
//! piece of state is local to the one invocation.
//!
//! Submodules:
//! - `sheet`: configuration and the foot-to-drawing-unit mapper
//! - `svg`: typed primitives and single-pass serialization
//! - `walls`: exterior envelope + interior-wall adjacency inference
//! - `openings`: door and window symbols
//! - `dimensions`: two-level dimension chains
//! - `title_block`: sheet metadata band

pub mod dimensions;
pub mod openings;
pub mod sheet;
pub mod svg;
pub mod title_block;
pub mod walls;

pub use sheet::{Sheet, SheetOptions};

use crate::errors::RenderError;
use crate::layout::Layout;
use crate::log;

use svg::{Anchor, Document, Line, Pattern, Rect, Text};

/// Inset of the decorative sheet border from the canvas edge.
const BORDER_INSET: f64 = 4.0;

/// Render a layout to a complete SVG document.
///
/// An empty room list produces a placeholder sheet with a visible
/// diagnostic rather than an error, so callers always get a renderable
/// artifact. All other failures return [`RenderError`] with nothing
/// partially emitted.
pub fn render(layout: &Layout, opts: &SheetOptions) -> Result<String, RenderError> {
    if layout.rooms.is_empty() {
        return Ok(placeholder(opts));
    }
    validate(layout)?;

    let (overall_w, overall_h) = layout.overall_size();
    log::debug!(overall_w, overall_h, "normalized drawing bounds");

    let sheet = Sheet::new(opts.clone(), overall_w, overall_h)?;
    log::debug!(
        width = sheet.canvas_width,
        height = sheet.canvas_height,
        "canvas size"
    );

    let mut doc = Document::new(sheet.canvas_width, sheet.canvas_height);
    doc.add_pattern(crosshatch());

    draw_border(&mut doc, &sheet);
    walls::draw_exterior(&mut doc, &sheet);
    walls::draw_rooms(&mut doc, &sheet, &layout.rooms);
    walls::draw_partitions(&mut doc, &sheet, &layout.rooms);
    openings::draw_openings(&mut doc, &sheet, &layout.openings);
    dimensions::draw_dimensions(&mut doc, &sheet, &layout.rooms);
    title_block::draw_title_block(&mut doc, &sheet, layout);

    Ok(doc.to_svg())
}

/// The exterior/partition wall fabric: two diagonal line sets at +-45°.
fn crosshatch() -> Pattern {
    Pattern {
        id: "crosshatch",
        size: 6.0,
        lines: vec![[0.0, 0.0, 6.0, 6.0], [6.0, 0.0, 0.0, 6.0]],
        stroke: "#555".to_string(),
        stroke_width: 0.5,
    }
}

fn draw_border(doc: &mut Document, sheet: &Sheet) {
    doc.push(Rect {
        x: BORDER_INSET,
        y: BORDER_INSET,
        width: doc.width - 2.0 * BORDER_INSET,
        height: doc.height - 2.0 * BORDER_INSET,
        fill: None,
        stroke: Some("#000".to_string()),
        stroke_width: Some(sheet.opts.light_weight),
    });
}

fn validate(layout: &Layout) -> Result<(), RenderError> {
    for room in &layout.rooms {
        if !room.is_finite() {
            return Err(RenderError::NonFiniteRoom {
                name: room.name.clone(),
            });
        }
        if room.width <= 0.0 || room.height <= 0.0 {
            return Err(RenderError::DegenerateRoom {
                name: room.name.clone(),
                width: room.width,
                height: room.height,
            });
        }
    }
    for opening in &layout.openings {
        if !opening.is_finite() {
            return Err(RenderError::NonFiniteOpening {
                wall: opening.wall.as_str(),
            });
        }
        if opening.width <= 0.0 {
            return Err(RenderError::DegenerateOpening {
                wall: opening.wall.as_str(),
                width: opening.width,
            });
        }
    }
    Ok(())
}

/// Minimal diagnostic sheet for a layout with zero rooms.
fn placeholder(opts: &SheetOptions) -> String {
    let (width, height) = (400.0, 300.0);
    let mut doc = Document::new(width, height);

    doc.push(Rect {
        x: BORDER_INSET,
        y: BORDER_INSET,
        width: width - 2.0 * BORDER_INSET,
        height: height - 2.0 * BORDER_INSET,
        fill: None,
        stroke: Some("#000".to_string()),
        stroke_width: Some(opts.light_weight),
    });
    doc.push(Text::new(
        width / 2.0,
        (height - opts.title_height) / 2.0,
        "No rooms to display",
        12.0,
    ));

    let top = height - opts.title_height;
    doc.push(Line {
        x1: 0.0,
        y1: top,
        x2: width,
        y2: top,
        stroke: "#000".to_string(),
        stroke_width: opts.medium_weight,
    });
    let mut title = Text::new(opts.margin, top + 18.0, "FLOOR PLAN", 12.0);
    title.anchor = Anchor::Start;
    title.bold = true;
    doc.push(title);

    doc.to_svg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Room;

    fn layout(rooms: Vec<Room>) -> Layout {
        Layout {
            rooms,
            walls: vec![],
            openings: vec![],
            overall_width: None,
            overall_height: None,
            style_preset: None,
            title: None,
        }
    }

    fn room(x: f64, y: f64, w: f64, h: f64) -> Room {
        Room {
            name: "R".to_string(),
            x,
            y,
            width: w,
            height: h,
            kind: None,
        }
    }

    #[test]
    fn empty_rooms_yield_placeholder_not_error() {
        let svg = render(&layout(vec![]), &SheetOptions::default()).unwrap();
        assert!(svg.contains("No rooms to display"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn degenerate_room_is_rejected() {
        let result = render(&layout(vec![room(0.0, 0.0, 0.0, 10.0)]), &SheetOptions::default());
        assert!(matches!(result, Err(RenderError::DegenerateRoom { .. })));
    }

    #[test]
    fn non_finite_room_is_rejected() {
        let result = render(
            &layout(vec![room(f64::NAN, 0.0, 10.0, 10.0)]),
            &SheetOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::NonFiniteRoom { .. })));
    }

    #[test]
    fn z_order_puts_hatch_before_rooms_before_dimensions() {
        let svg = render(
            &layout(vec![room(0.0, 0.0, 12.0, 10.0)]),
            &SheetOptions::default(),
        )
        .unwrap();
        let hatch_rect = svg.find("url(#crosshatch)").unwrap();
        let room_label = svg.find(">R<").unwrap();
        let dim_label = svg.find("12'-0&quot;").unwrap();
        let title = svg.find("FLOOR PLAN").unwrap();
        assert!(hatch_rect < room_label);
        assert!(room_label < dim_label);
        assert!(dim_label < title);
    }
}
