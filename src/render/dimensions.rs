//! Two-level dimension chains with feet-and-inches formatting.
//!
//! Each axis gets an overall chain (one span for the whole building) and a
//! detail chain (one span between each pair of consecutive distinct room
//! edges). Both sit outside the building footprint, the detail chain closer
//! to the outline so the levels never collide.

use crate::layout::Room;

use super::sheet::Sheet;
use super::svg::{Document, Line, Text};

/// Half-length of the perpendicular tick at each end of a dimension span.
const TICK: f64 = 4.0;
const LABEL_SIZE: f64 = 7.0;

/// Format a foot value as feet-and-inches, e.g. `12'-6"`.
///
/// Inches round to the nearest whole inch; a 12-inch result carries into the
/// next foot, so 5.999 renders as `6'-0"`, never `5'-12"`.
pub fn format_feet_inches(value_ft: f64) -> String {
    let mut feet = value_ft.floor() as i64;
    let mut inches = ((value_ft - feet as f64) * 12.0).round() as i64;
    if inches == 12 {
        feet += 1;
        inches = 0;
    }
    format!("{}'-{}\"", feet, inches)
}

/// Sorted distinct values with a small merge tolerance, for room-edge
/// coordinate collection.
fn distinct_edges(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut edges: Vec<f64> = values.collect();
    edges.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    edges.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
    edges
}

/// Draw all four chains: detail and overall, bottom and right.
pub fn draw_dimensions(doc: &mut Document, sheet: &Sheet, rooms: &[Room]) {
    let min_span = sheet.opts.min_dim_span_ft;

    let xs = distinct_edges(rooms.iter().flat_map(|r| [r.x, r.right()]));
    let ys = distinct_edges(rooms.iter().flat_map(|r| [r.y, r.bottom()]));

    let y_detail = sheet.plan_bottom() + sheet.opts.detail_chain_offset;
    let y_overall = sheet.plan_bottom() + sheet.opts.overall_chain_offset;
    let x_detail = sheet.plan_right() + sheet.opts.detail_chain_offset;
    let x_overall = sheet.plan_right() + sheet.opts.overall_chain_offset;

    draw_bottom_chain(doc, sheet, &xs, y_detail, min_span);
    draw_bottom_chain(doc, sheet, &[0.0, sheet.plan_width_ft], y_overall, 0.0);
    draw_right_chain(doc, sheet, &ys, x_detail, min_span);
    draw_right_chain(doc, sheet, &[0.0, sheet.plan_height_ft], x_overall, 0.0);
}

/// One chain along the bottom edge at sheet height `y`.
fn draw_bottom_chain(doc: &mut Document, sheet: &Sheet, edges_ft: &[f64], y: f64, min_span: f64) {
    let weight = sheet.opts.light_weight;

    // Extension lines from the building edge down past the chain.
    for &x_ft in edges_ft {
        let x = sheet.map(x_ft, 0.0).x;
        doc.push(Line {
            x1: x,
            y1: sheet.plan_bottom() + 2.0,
            x2: x,
            y2: y + TICK,
            stroke: "#333".to_string(),
            stroke_width: weight,
        });
    }

    for pair in edges_ft.windows(2) {
        let span = pair[1] - pair[0];
        if span < min_span {
            continue;
        }
        let x0 = sheet.map(pair[0], 0.0).x;
        let x1 = sheet.map(pair[1], 0.0).x;

        doc.push(Line {
            x1: x0,
            y1: y,
            x2: x1,
            y2: y,
            stroke: "#333".to_string(),
            stroke_width: weight,
        });
        for x in [x0, x1] {
            doc.push(Line {
                x1: x,
                y1: y - TICK,
                x2: x,
                y2: y + TICK,
                stroke: "#333".to_string(),
                stroke_width: weight,
            });
        }
        doc.push(Text::new(
            (x0 + x1) / 2.0,
            y - 3.0,
            format_feet_inches(span),
            LABEL_SIZE,
        ));
    }
}

/// One chain along the right edge at sheet abscissa `x`. Labels are rotated
/// 90 degrees for readability.
fn draw_right_chain(doc: &mut Document, sheet: &Sheet, edges_ft: &[f64], x: f64, min_span: f64) {
    let weight = sheet.opts.light_weight;

    for &y_ft in edges_ft {
        let y = sheet.map(0.0, y_ft).y;
        doc.push(Line {
            x1: sheet.plan_right() + 2.0,
            y1: y,
            x2: x + TICK,
            y2: y,
            stroke: "#333".to_string(),
            stroke_width: weight,
        });
    }

    for pair in edges_ft.windows(2) {
        let span = pair[1] - pair[0];
        if span < min_span {
            continue;
        }
        let y0 = sheet.map(0.0, pair[0]).y;
        let y1 = sheet.map(0.0, pair[1]).y;

        doc.push(Line {
            x1: x,
            y1: y0,
            x2: x,
            y2: y1,
            stroke: "#333".to_string(),
            stroke_width: weight,
        });
        for y in [y0, y1] {
            doc.push(Line {
                x1: x - TICK,
                y1: y,
                x2: x + TICK,
                y2: y,
                stroke: "#333".to_string(),
                stroke_width: weight,
            });
        }
        let cy = (y0 + y1) / 2.0;
        let mut label = Text::new(x - 3.0, cy, format_feet_inches(span), LABEL_SIZE);
        label.rotate = Some((90.0, x - 3.0, cy));
        doc.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sheet::SheetOptions;

    #[test]
    fn formats_whole_feet() {
        assert_eq!(format_feet_inches(6.0), "6'-0\"");
        assert_eq!(format_feet_inches(0.0), "0'-0\"");
    }

    #[test]
    fn formats_half_foot() {
        assert_eq!(format_feet_inches(6.5), "6'-6\"");
    }

    #[test]
    fn rounding_carries_into_next_foot() {
        assert_eq!(format_feet_inches(5.999), "6'-0\"");
        assert_eq!(format_feet_inches(9.99), "10'-0\"");
    }

    #[test]
    fn rounds_to_nearest_inch() {
        assert_eq!(format_feet_inches(3.26), "3'-3\"");
        assert_eq!(format_feet_inches(10.75), "10'-9\"");
    }

    #[test]
    fn distinct_edges_sorts_and_merges() {
        let edges = distinct_edges([10.0, 0.0, 10.0 + 1e-9, 4.0].into_iter());
        assert_eq!(edges, vec![0.0, 4.0, 10.0]);
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

    fn render(rooms: &[Room], w: f64, h: f64) -> String {
        let sheet = Sheet::new(SheetOptions::default(), w, h).unwrap();
        let mut doc = Document::new(sheet.canvas_width, sheet.canvas_height);
        draw_dimensions(&mut doc, &sheet, rooms);
        doc.to_svg()
    }

    #[test]
    fn two_rooms_yield_detail_and_overall_spans() {
        let rooms = [room(0.0, 0.0, 10.0, 10.0), room(10.0, 0.0, 10.0, 10.0)];
        let svg = render(&rooms, 20.0, 10.0);

        // Bottom detail chain: 10' + 10'. Right side: one 10' detail span
        // plus the 10' overall span. Overall width: 20'.
        assert_eq!(svg.matches(">10'-0&quot;<").count(), 4);
        assert_eq!(svg.matches(">20'-0&quot;<").count(), 1);
    }

    #[test]
    fn sub_foot_gaps_are_suppressed() {
        let rooms = [room(0.0, 0.0, 10.0, 10.0), room(10.6, 0.0, 10.0, 10.0)];
        let svg = render(&rooms, 20.6, 10.0);
        // The 0.6 ft gap between the rooms produces no detail label.
        assert_eq!(svg.matches(">0'-7&quot;<").count(), 0);
        assert!(svg.contains(">20'-7&quot;<"));
    }

    #[test]
    fn right_chain_labels_are_rotated() {
        let rooms = [room(0.0, 0.0, 12.0, 10.0)];
        let svg = render(&rooms, 12.0, 10.0);
        assert!(svg.contains("transform=\"rotate(90"));
    }
}
