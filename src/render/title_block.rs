//! Sheet metadata band at the bottom of the drawing.

use crate::layout::Layout;

use super::sheet::Sheet;
use super::svg::{Anchor, Document, Line, Text};

const SCALE_NOTE: &str = "SCALE: 1/4\" = 1'-0\"";
const CREDIT: &str = "GENERATED BY PLANDRAW";
const DISCLAIMER: &str = "NOT FOR CONSTRUCTION";

/// Draw the separator and the title-block band: title, scale/area/credit
/// note, and a right-aligned disclaimer.
pub fn draw_title_block(doc: &mut Document, sheet: &Sheet, layout: &Layout) {
    let top = doc.height - sheet.opts.title_height;
    let left = sheet.opts.margin;
    let right = doc.width - sheet.opts.margin;

    doc.push(Line {
        x1: 0.0,
        y1: top,
        x2: doc.width,
        y2: top,
        stroke: "#000".to_string(),
        stroke_width: sheet.opts.medium_weight,
    });

    let title = layout
        .title
        .as_deref()
        .or(layout.style_preset.as_deref())
        .unwrap_or("FLOOR PLAN");
    let mut title_text = Text::new(left, top + 18.0, title.to_uppercase(), 12.0);
    title_text.anchor = Anchor::Start;
    title_text.bold = true;
    doc.push(title_text);

    let note = format!(
        "{}  |  AREA: {} SF  |  {}",
        SCALE_NOTE,
        layout.total_area().round() as i64,
        CREDIT,
    );
    let mut note_text = Text::new(left, top + 34.0, note, 7.0);
    note_text.anchor = Anchor::Start;
    doc.push(note_text);

    let mut disclaimer = Text::new(right, top + 34.0, DISCLAIMER, 7.0);
    disclaimer.anchor = Anchor::End;
    doc.push(disclaimer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sheet::SheetOptions;

    fn layout(title: Option<&str>, preset: Option<&str>) -> Layout {
        Layout {
            rooms: vec![crate::layout::Room {
                name: "A".to_string(),
                x: 0.0,
                y: 0.0,
                width: 12.0,
                height: 10.0,
                kind: None,
            }],
            walls: vec![],
            openings: vec![],
            overall_width: None,
            overall_height: None,
            style_preset: preset.map(String::from),
            title: title.map(String::from),
        }
    }

    fn render(layout: &Layout) -> String {
        let sheet = Sheet::new(SheetOptions::default(), 12.0, 10.0).unwrap();
        let mut doc = Document::new(sheet.canvas_width, sheet.canvas_height);
        draw_title_block(&mut doc, &sheet, layout);
        doc.to_svg()
    }

    #[test]
    fn title_falls_back_preset_then_generic() {
        assert!(render(&layout(Some("Unit A"), Some("modern"))).contains(">UNIT A<"));
        assert!(render(&layout(None, Some("modern"))).contains(">MODERN<"));
        assert!(render(&layout(None, None)).contains(">FLOOR PLAN<"));
    }

    #[test]
    fn note_reports_total_area() {
        let svg = render(&layout(None, None));
        assert!(svg.contains("AREA: 120 SF"));
        assert!(svg.contains("SCALE: 1/4&quot; = 1'-0&quot;"));
    }

    #[test]
    fn disclaimer_is_right_aligned() {
        let svg = render(&layout(None, None));
        assert!(svg.contains("text-anchor=\"end\">NOT FOR CONSTRUCTION<"));
    }

    #[test]
    fn title_text_is_escaped() {
        let svg = render(&layout(Some("A&B <Plan>"), None));
        assert!(svg.contains(">A&amp;B &lt;PLAN&gt;<"));
    }
}
