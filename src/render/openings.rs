//! Door and window symbols, oriented by wall side.

use glam::{DVec2, dvec2};

use crate::layout::{Opening, OpeningKind, WallSide};

use super::sheet::Sheet;
use super::svg::{Document, Line, Path, Rect, fmt_num};

/// Offsets for the three glazing lines of a window symbol, drawing units.
const GLAZING_OFFSETS: [f64; 3] = [-1.5, 0.0, 1.5];

/// Overlay every opening symbol on its wall. Each symbol starts by clearing
/// a white gap across the wall band, then draws the door leaf + swing arc or
/// the window glazing lines.
pub fn draw_openings(doc: &mut Document, sheet: &Sheet, openings: &[Opening]) {
    for opening in openings {
        let anchor = sheet.map(opening.x, opening.y);
        let len = sheet.ft(opening.width);
        let gap = sheet.interior_wall() * 2.0;

        if opening.wall.is_vertical() {
            doc.push(Rect {
                x: anchor.x - gap / 2.0,
                y: anchor.y,
                width: gap,
                height: len,
                fill: Some("white".to_string()),
                stroke: None,
                stroke_width: None,
            });
            match opening.kind {
                OpeningKind::Door => {
                    // West doors open into the room east of the wall, east
                    // doors the other way. `swingDirection` is accepted on
                    // input but does not flip the leaf.
                    let dir = if opening.wall == WallSide::West { 1.0 } else { -1.0 };
                    draw_door(doc, sheet, anchor, dvec2(dir * len, 0.0), dvec2(0.0, len));
                }
                OpeningKind::Window => {
                    for dx in GLAZING_OFFSETS {
                        doc.push(Line {
                            x1: anchor.x + dx,
                            y1: anchor.y,
                            x2: anchor.x + dx,
                            y2: anchor.y + len,
                            stroke: "#000".to_string(),
                            stroke_width: sheet.opts.light_weight,
                        });
                    }
                }
            }
        } else {
            doc.push(Rect {
                x: anchor.x,
                y: anchor.y - gap / 2.0,
                width: len,
                height: gap,
                fill: Some("white".to_string()),
                stroke: None,
                stroke_width: None,
            });
            match opening.kind {
                OpeningKind::Door => {
                    let dir = if opening.wall == WallSide::North { 1.0 } else { -1.0 };
                    draw_door(doc, sheet, anchor, dvec2(0.0, dir * len), dvec2(len, 0.0));
                }
                OpeningKind::Window => {
                    for dy in GLAZING_OFFSETS {
                        doc.push(Line {
                            x1: anchor.x,
                            y1: anchor.y + dy,
                            x2: anchor.x + len,
                            y2: anchor.y + dy,
                            stroke: "#000".to_string(),
                            stroke_width: sheet.opts.light_weight,
                        });
                    }
                }
            }
        }
    }
}

/// Draw a door leaf plus its quarter-circle swing arc.
///
/// The hinge sits at `hinge`; `leaf` points one door-width into the room and
/// `jamb` points one door-width along the wall to the far jamb. The arc
/// sweeps from the leaf tip back to the jamb.
fn draw_door(doc: &mut Document, sheet: &Sheet, hinge: DVec2, leaf: DVec2, jamb: DVec2) {
    let radius = jamb.length();
    let tip = hinge + leaf;
    let far = hinge + jamb;

    doc.push(Line {
        x1: hinge.x,
        y1: hinge.y,
        x2: tip.x,
        y2: tip.y,
        stroke: "#000".to_string(),
        stroke_width: sheet.opts.medium_weight,
    });

    // Cross product of leaf x jamb picks the sweep that stays inside the
    // quarter circle between them (SVG Y points down).
    let sweep = if leaf.perp_dot(jamb) > 0.0 { 1 } else { 0 };
    doc.push(Path {
        d: format!(
            "M {} {} A {} {} 0 0 {} {} {}",
            fmt_num(tip.x),
            fmt_num(tip.y),
            fmt_num(radius),
            fmt_num(radius),
            sweep,
            fmt_num(far.x),
            fmt_num(far.y),
        ),
        fill: None,
        stroke: Some("#000".to_string()),
        stroke_width: Some(sheet.opts.light_weight),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sheet::SheetOptions;

    fn sheet() -> Sheet {
        Sheet::new(SheetOptions::default(), 20.0, 20.0).unwrap()
    }

    fn opening(kind: OpeningKind, wall: WallSide) -> Opening {
        Opening {
            kind,
            x: 0.0,
            y: 4.0,
            width: 3.0,
            wall,
            swing: None,
        }
    }

    // Inspecting emitted markup keeps these tests independent of the
    // internal node representation.
    fn svg_for(op: Opening) -> String {
        let sheet = sheet();
        let mut doc = Document::new(sheet.canvas_width, sheet.canvas_height);
        draw_openings(&mut doc, &sheet, &[op]);
        doc.to_svg()
    }

    #[test]
    fn west_door_emits_gap_leaf_and_arc() {
        let svg = svg_for(opening(OpeningKind::Door, WallSide::West));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert_eq!(svg.matches("<line").count(), 1);
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("fill=\"white\""));
        assert!(svg.contains(" A "));
    }

    #[test]
    fn window_emits_three_glazing_lines() {
        let svg = svg_for(opening(OpeningKind::Window, WallSide::North));
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn vertical_gap_spans_opening_height() {
        let sheet = sheet();
        let svg = svg_for(opening(OpeningKind::Window, WallSide::East));
        // Gap rect height equals the mapped opening width.
        let expected = fmt_num(sheet.ft(3.0));
        assert!(svg.contains(&format!("height=\"{}\"", expected)));
    }

    #[test]
    fn east_and_west_doors_swing_opposite_ways() {
        let west = svg_for(opening(OpeningKind::Door, WallSide::West));
        let east = svg_for(opening(OpeningKind::Door, WallSide::East));
        assert_ne!(west, east);
    }

    #[test]
    fn swing_direction_is_accepted_but_ignored() {
        let mut flipped = opening(OpeningKind::Door, WallSide::West);
        flipped.swing = Some("right".to_string());
        assert_eq!(svg_for(opening(OpeningKind::Door, WallSide::West)), svg_for(flipped));
    }
}
