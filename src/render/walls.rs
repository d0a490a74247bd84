//! Exterior envelope, room outlines, and interior-wall adjacency inference.

use crate::layout::Room;
use crate::log;

use super::sheet::Sheet;
use super::svg::{Document, Rect, Text};

/// Fill reference for the cross-hatch pattern registered in the defs.
pub const CROSSHATCH_FILL: &str = "url(#crosshatch)";

/// An inferred partition band, plan coordinates in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Draw the exterior wall fabric: the full plan box filled with cross-hatch
/// and a heavy outline, then a white rectangle inset by the wall thickness.
///
/// The cutout paints over the hatch so only the wall band stays hatched.
/// Rooms are drawn afterwards and stay inside the interior, which is what
/// makes this shortcut safe.
pub fn draw_exterior(doc: &mut Document, sheet: &Sheet) {
    let w = sheet.ft(sheet.plan_width_ft);
    let h = sheet.ft(sheet.plan_height_ft);
    let t = sheet.exterior_wall();

    doc.push(Rect {
        x: sheet.origin.x,
        y: sheet.origin.y,
        width: w,
        height: h,
        fill: Some(CROSSHATCH_FILL.to_string()),
        stroke: Some("#000".to_string()),
        stroke_width: Some(sheet.opts.heavy_weight),
    });
    doc.push(Rect {
        x: sheet.origin.x + t,
        y: sheet.origin.y + t,
        width: (w - 2.0 * t).max(0.0),
        height: (h - 2.0 * t).max(0.0),
        fill: Some("white".to_string()),
        stroke: None,
        stroke_width: None,
    });
}

/// Draw every room outline plus its two centered labels: name above center,
/// floor area below.
pub fn draw_rooms(doc: &mut Document, sheet: &Sheet, rooms: &[Room]) {
    for room in rooms {
        let pos = sheet.map(room.x, room.y);
        let w = sheet.ft(room.width);
        let h = sheet.ft(room.height);

        doc.push(Rect {
            x: pos.x,
            y: pos.y,
            width: w,
            height: h,
            fill: None,
            stroke: Some("#000".to_string()),
            stroke_width: Some(sheet.opts.medium_weight),
        });

        let cx = pos.x + w / 2.0;
        let cy = pos.y + h / 2.0;
        doc.push(Text::new(cx, cy - 3.0, room.name.clone(), 9.0));
        doc.push(Text::new(
            cx,
            cy + 9.0,
            format!("{} SF", room.area().round() as i64),
            7.0,
        ));
    }
}

/// Infer interior partition walls from shared room edges.
///
/// Pairs are visited in fixed `i < j` input order, so output is stable for a
/// given room ordering. A pair contributes at most one partition: once the
/// horizontal-adjacency check produces a wall, the vertical check is skipped
/// for that pair. Corner-touching configurations can therefore come out
/// under-walled; that is observed behavior, kept on purpose.
pub fn infer_partitions(rooms: &[Room], tolerance_ft: f64, wall_ft: f64) -> Vec<Partition> {
    let mut partitions = Vec::new();

    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            let (a, b) = (&rooms[i], &rooms[j]);

            // Vertical shared wall: one room's right edge meets the other's left.
            let shared_x = if (a.right() - b.x).abs() <= tolerance_ft {
                Some((a.right() + b.x) / 2.0)
            } else if (b.right() - a.x).abs() <= tolerance_ft {
                Some((b.right() + a.x) / 2.0)
            } else {
                None
            };
            if let Some(x) = shared_x {
                let y0 = a.y.max(b.y);
                let y1 = a.bottom().min(b.bottom());
                if y1 > y0 {
                    partitions.push(Partition {
                        x: x - wall_ft / 2.0,
                        y: y0,
                        width: wall_ft,
                        height: y1 - y0,
                    });
                    continue;
                }
            }

            // Horizontal shared wall: bottom edge meets top edge.
            let shared_y = if (a.bottom() - b.y).abs() <= tolerance_ft {
                Some((a.bottom() + b.y) / 2.0)
            } else if (b.bottom() - a.y).abs() <= tolerance_ft {
                Some((b.bottom() + a.y) / 2.0)
            } else {
                None
            };
            if let Some(y) = shared_y {
                let x0 = a.x.max(b.x);
                let x1 = a.right().min(b.right());
                if x1 > x0 {
                    partitions.push(Partition {
                        x: x0,
                        y: y - wall_ft / 2.0,
                        width: x1 - x0,
                        height: wall_ft,
                    });
                }
            }
        }
    }

    partitions
}

/// Draw inferred partitions as hatched bands with a light outline.
pub fn draw_partitions(doc: &mut Document, sheet: &Sheet, rooms: &[Room]) {
    let partitions = infer_partitions(
        rooms,
        sheet.opts.adjacency_tolerance_ft,
        sheet.opts.interior_wall_ft,
    );
    log::debug!(count = partitions.len(), "inferred interior walls");

    for p in &partitions {
        let pos = sheet.map(p.x, p.y);
        doc.push(Rect {
            x: pos.x,
            y: pos.y,
            width: sheet.ft(p.width),
            height: sheet.ft(p.height),
            fill: Some(CROSSHATCH_FILL.to_string()),
            stroke: Some("#666".to_string()),
            stroke_width: Some(sheet.opts.light_weight),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
        Room {
            name: name.to_string(),
            x,
            y,
            width: w,
            height: h,
            kind: None,
        }
    }

    const WALL: f64 = 4.5 / 12.0;

    #[test]
    fn side_by_side_rooms_share_one_wall() {
        let rooms = vec![room("A", 0.0, 0.0, 10.0, 10.0), room("B", 10.0, 0.0, 10.0, 10.0)];
        let walls = infer_partitions(&rooms, 0.5, WALL);
        assert_eq!(walls.len(), 1);
        let p = walls[0];
        assert!((p.x + p.width / 2.0 - 10.0).abs() < 1e-9);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.height, 10.0);
    }

    #[test]
    fn wall_count_is_order_independent() {
        let a = room("A", 0.0, 0.0, 10.0, 10.0);
        let b = room("B", 10.0, 0.0, 10.0, 10.0);
        let forward = infer_partitions(&[a.clone(), b.clone()], 0.5, WALL);
        let reverse = infer_partitions(&[b, a], 0.5, WALL);
        assert_eq!(forward.len(), 1);
        assert_eq!(reverse.len(), 1);
        assert_eq!(forward[0], reverse[0]);
    }

    #[test]
    fn stacked_rooms_share_horizontal_wall() {
        let rooms = vec![room("A", 0.0, 0.0, 12.0, 8.0), room("B", 0.0, 8.0, 12.0, 6.0)];
        let walls = infer_partitions(&rooms, 0.5, WALL);
        assert_eq!(walls.len(), 1);
        let p = walls[0];
        assert!((p.y + p.height / 2.0 - 8.0).abs() < 1e-9);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.width, 12.0);
    }

    #[test]
    fn near_edges_within_tolerance_count() {
        let rooms = vec![room("A", 0.0, 0.0, 10.0, 10.0), room("B", 10.4, 0.0, 10.0, 10.0)];
        assert_eq!(infer_partitions(&rooms, 0.5, WALL).len(), 1);
        assert_eq!(infer_partitions(&rooms, 0.1, WALL).len(), 0);
    }

    #[test]
    fn partial_overlap_spans_only_the_shared_range() {
        let rooms = vec![room("A", 0.0, 0.0, 10.0, 10.0), room("B", 10.0, 4.0, 10.0, 10.0)];
        let walls = infer_partitions(&rooms, 0.5, WALL);
        assert_eq!(walls.len(), 1);
        assert_eq!(walls[0].y, 4.0);
        assert_eq!(walls[0].height, 6.0);
    }

    #[test]
    fn disjoint_rooms_produce_no_wall() {
        let rooms = vec![room("A", 0.0, 0.0, 5.0, 5.0), room("B", 20.0, 20.0, 5.0, 5.0)];
        assert!(infer_partitions(&rooms, 0.5, WALL).is_empty());
    }

    #[test]
    fn pair_contributes_at_most_one_wall() {
        // Corner-touching pair that satisfies both edge checks; the vertical
        // check wins and the horizontal one is skipped.
        let rooms = vec![room("A", 0.0, 0.0, 10.0, 10.0), room("B", 10.0, 10.0, 10.0, 10.0)];
        let walls = infer_partitions(&rooms, 0.5, WALL);
        assert!(walls.len() <= 1);
    }

    #[test]
    fn touching_corners_have_zero_overlap() {
        // Shared X edge but no Y overlap at all: no wall.
        let rooms = vec![room("A", 0.0, 0.0, 10.0, 10.0), room("B", 10.0, 15.0, 10.0, 10.0)];
        assert!(infer_partitions(&rooms, 0.5, WALL).is_empty());
    }
}
