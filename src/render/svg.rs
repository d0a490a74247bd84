//! Typed SVG primitives and single-pass serialization.
//!
//! Drawing stages push [`Node`]s onto a [`Document`] in z-order; nothing is
//! serialized until [`Document::to_svg`] runs once at the end. All text and
//! string attributes pass through [`xml_escape`], so arbitrary layout data
//! (room names, titles) can never break the markup.

use std::fmt::Write;

/// Text anchor for `<text>` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// `<rect>` element.
#[derive(Debug, Clone, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

/// `<line>` element.
#[derive(Debug, Clone)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

/// `<path>` element (door swing arcs).
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

/// `<text>` element.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Anchor,
    pub font_size: f64,
    pub bold: bool,
    /// `(angle, cx, cy)` rotation, for vertical dimension labels.
    pub rotate: Option<(f64, f64, f64)>,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>, font_size: f64) -> Text {
        Text {
            x,
            y,
            content: content.into(),
            anchor: Anchor::Middle,
            font_size,
            bold: false,
            rotate: None,
        }
    }
}

/// A hatch pattern definition emitted into `<defs>`.
///
/// `lines` are stroke segments inside a `size` x `size` tile.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub id: &'static str,
    pub size: f64,
    pub lines: Vec<[f64; 4]>,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Any drawing primitive we emit.
#[derive(Debug, Clone)]
pub enum Node {
    Rect(Rect),
    Line(Line),
    Path(Path),
    Text(Text),
}

impl From<Rect> for Node {
    fn from(r: Rect) -> Node {
        Node::Rect(r)
    }
}
impl From<Line> for Node {
    fn from(l: Line) -> Node {
        Node::Line(l)
    }
}
impl From<Path> for Node {
    fn from(p: Path) -> Node {
        Node::Path(p)
    }
}
impl From<Text> for Node {
    fn from(t: Text) -> Node {
        Node::Text(t)
    }
}

/// Accumulates primitives for one sheet, then serializes once.
#[derive(Debug, Clone)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    defs: Vec<Pattern>,
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Document {
        Document {
            width,
            height,
            defs: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn add_pattern(&mut self, pattern: Pattern) {
        self.defs.push(pattern);
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Serialize the whole document. Output is a self-contained SVG with
    /// inline pattern definitions and no external references.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096 + self.nodes.len() * 96);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );

        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for p in &self.defs {
                let _ = write!(
                    out,
                    "<pattern id=\"{}\" width=\"{s}\" height=\"{s}\" patternUnits=\"userSpaceOnUse\">\n",
                    xml_escape(p.id),
                    s = fmt_num(p.size),
                );
                for [x1, y1, x2, y2] in &p.lines {
                    let _ = write!(
                        out,
                        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                        fmt_num(*x1),
                        fmt_num(*y1),
                        fmt_num(*x2),
                        fmt_num(*y2),
                        xml_escape(&p.stroke),
                        fmt_num(p.stroke_width),
                    );
                }
                out.push_str("</pattern>\n");
            }
            out.push_str("</defs>\n");
        }

        for node in &self.nodes {
            self.write_node(&mut out, node);
        }

        out.push_str("</svg>\n");
        out
    }

    fn write_node(&self, out: &mut String, node: &Node) {
        match node {
            Node::Rect(r) => {
                let _ = write!(
                    out,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                    fmt_num(r.x),
                    fmt_num(r.y),
                    fmt_num(r.width),
                    fmt_num(r.height),
                );
                write_paint(out, r.fill.as_deref(), r.stroke.as_deref(), r.stroke_width);
                out.push_str("/>\n");
            }
            Node::Line(l) => {
                let _ = write!(
                    out,
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    fmt_num(l.x1),
                    fmt_num(l.y1),
                    fmt_num(l.x2),
                    fmt_num(l.y2),
                    xml_escape(&l.stroke),
                    fmt_num(l.stroke_width),
                );
            }
            Node::Path(p) => {
                let _ = write!(out, "<path d=\"{}\"", xml_escape(&p.d));
                write_paint(out, p.fill.as_deref(), p.stroke.as_deref(), p.stroke_width);
                out.push_str("/>\n");
            }
            Node::Text(t) => {
                let _ = write!(
                    out,
                    "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{}\"",
                    fmt_num(t.x),
                    fmt_num(t.y),
                    fmt_num(t.font_size),
                    t.anchor.as_str(),
                );
                if t.bold {
                    out.push_str(" font-weight=\"bold\"");
                }
                if let Some((angle, cx, cy)) = t.rotate {
                    let _ = write!(
                        out,
                        " transform=\"rotate({} {} {})\"",
                        fmt_num(angle),
                        fmt_num(cx),
                        fmt_num(cy),
                    );
                }
                let _ = write!(out, ">{}</text>\n", xml_escape(&t.content));
            }
        }
    }
}

fn write_paint(out: &mut String, fill: Option<&str>, stroke: Option<&str>, stroke_width: Option<f64>) {
    if let Some(fill) = fill {
        let _ = write!(out, " fill=\"{}\"", xml_escape(fill));
    } else {
        out.push_str(" fill=\"none\"");
    }
    if let Some(stroke) = stroke {
        let _ = write!(out, " stroke=\"{}\"", xml_escape(stroke));
    }
    if let Some(w) = stroke_width {
        let _ = write!(out, " stroke-width=\"{}\"", fmt_num(w));
    }
}

/// Escape the XML special characters `&`, `<`, `>`, `"`.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
