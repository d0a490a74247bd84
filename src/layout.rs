//! Input data model for floor-plan layouts.
//!
//! A [`Layout`] is the root value of one render request. The renderer only
//! ever borrows it read-only; nothing here is mutated during rendering.

use serde::Deserialize;

/// A single room, positioned by its top-left corner in feet.
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    /// Display label, drawn centered in the room.
    pub name: String,
    /// Left edge, feet.
    pub x: f64,
    /// Top edge, feet.
    pub y: f64,
    /// Width in feet. Must be positive.
    pub width: f64,
    /// Height in feet. Must be positive.
    pub height: f64,
    /// Optional room-type tag (e.g. "bedroom"). Carried but not rendered.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Room {
    /// X coordinate of the right edge, feet.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge, feet.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Floor area in square feet.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when every coordinate and extent is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Which side of its owning room an opening is cut into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    /// East/west walls run vertically on the sheet.
    pub fn is_vertical(self) -> bool {
        matches!(self, WallSide::East | WallSide::West)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WallSide::North => "north",
            WallSide::South => "south",
            WallSide::East => "east",
            WallSide::West => "west",
        }
    }
}

/// Door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window opening, anchored in plan coordinates on the wall it
/// belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Opening {
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    /// Anchor X, feet.
    pub x: f64,
    /// Anchor Y, feet.
    pub y: f64,
    /// Opening width along the wall, feet. Must be positive.
    pub width: f64,
    /// Wall side the opening sits on; decides symbol orientation.
    pub wall: WallSide,
    /// Door leaf orientation. Accepted for input compatibility; the current
    /// symbol always swings the same way per wall side.
    #[serde(rename = "swingDirection", default)]
    pub swing: Option<String>,
}

impl Opening {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite()
    }
}

/// Explicit wall geometry callers may supply. Parsed for input-shape
/// compatibility only: interior walls are inferred from room adjacency
/// instead of consuming this list.
#[derive(Debug, Clone, Deserialize)]
pub struct WallSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub thickness: Option<f64>,
}

/// The root value of one render request.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    /// Ordered room list. Required; an empty list produces a placeholder
    /// sheet rather than an error.
    pub rooms: Vec<Room>,
    /// Optional explicit walls (unused, see [`WallSegment`]).
    #[serde(default)]
    pub walls: Vec<WallSegment>,
    /// Optional door/window openings.
    #[serde(default)]
    pub openings: Vec<Opening>,
    /// Overall plan width in feet. Derived from the rooms when absent.
    #[serde(rename = "overallWidth", default)]
    pub overall_width: Option<f64>,
    /// Overall plan height in feet. Derived from the rooms when absent.
    #[serde(rename = "overallHeight", default)]
    pub overall_height: Option<f64>,
    /// Display label used as a title fallback.
    #[serde(default)]
    pub style_preset: Option<String>,
    /// Sheet title.
    #[serde(default)]
    pub title: Option<String>,
}

impl Layout {
    /// Overall plan size in feet.
    ///
    /// Explicit `overallWidth`/`overallHeight` win when both are supplied
    /// (callers may intentionally draw a sheet larger than the tightest
    /// bounding box); otherwise each missing axis is derived as the maximum
    /// room extent on that axis.
    pub fn overall_size(&self) -> (f64, f64) {
        let derived_w = self
            .rooms
            .iter()
            .map(Room::right)
            .fold(0.0_f64, f64::max);
        let derived_h = self
            .rooms
            .iter()
            .map(Room::bottom)
            .fold(0.0_f64, f64::max);
        (
            self.overall_width.unwrap_or(derived_w),
            self.overall_height.unwrap_or(derived_h),
        )
    }

    /// Sum of all room floor areas, square feet.
    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(Room::area).sum()
    }
}
