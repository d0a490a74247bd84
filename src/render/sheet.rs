//! Sheet layout configuration and the foot-to-drawing-unit coordinate mapper.

use glam::{DVec2, dvec2};

use crate::errors::RenderError;

/// Drawing units per foot at 1/4" = 1'-0" (1:48) on a 96 dpi surface.
pub const QUARTER_INCH_SCALE: f64 = 6.35;

/// All sheet constants, passed into the renderer rather than living as
/// module globals so alternate scales and weights stay testable.
#[derive(Debug, Clone)]
pub struct SheetOptions {
    /// Drawing units per foot.
    pub scale: f64,
    /// Outer sheet margin, drawing units.
    pub margin: f64,
    /// Band reserved outside the plan for the two dimension chains.
    pub dim_offset: f64,
    /// Height of the title-block band at the bottom of the sheet.
    pub title_height: f64,
    /// Exterior wall thickness, feet (6.5").
    pub exterior_wall_ft: f64,
    /// Interior partition thickness, feet (4.5").
    pub interior_wall_ft: f64,
    /// Heaviest line weight (exterior outline).
    pub heavy_weight: f64,
    /// Medium line weight (room outlines).
    pub medium_weight: f64,
    /// Light line weight (partitions, dimension lines, window glazing).
    pub light_weight: f64,
    /// Edge-sharing tolerance for interior-wall inference, feet.
    pub adjacency_tolerance_ft: f64,
    /// Detail-chain spans below this are suppressed as visual noise, feet.
    pub min_dim_span_ft: f64,
    /// Detail chain distance beyond the plan edge, drawing units.
    pub detail_chain_offset: f64,
    /// Overall chain distance beyond the plan edge, drawing units.
    pub overall_chain_offset: f64,
}

impl Default for SheetOptions {
    fn default() -> Self {
        SheetOptions {
            scale: QUARTER_INCH_SCALE,
            margin: 30.0,
            dim_offset: 44.0,
            title_height: 46.0,
            exterior_wall_ft: 6.5 / 12.0,
            interior_wall_ft: 4.5 / 12.0,
            heavy_weight: 2.0,
            medium_weight: 1.2,
            light_weight: 0.7,
            adjacency_tolerance_ft: 0.5,
            min_dim_span_ft: 1.0,
            detail_chain_offset: 16.0,
            overall_chain_offset: 32.0,
        }
    }
}

/// One sheet's coordinate system: plan feet in, drawing units out.
///
/// The mapping is linear and invertible; nothing in the pipeline ever needs
/// the inverse.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub opts: SheetOptions,
    /// Plan size, feet.
    pub plan_width_ft: f64,
    pub plan_height_ft: f64,
    /// Top-left of the plan on the sheet, drawing units.
    pub origin: DVec2,
    /// Full canvas size, drawing units.
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Sheet {
    pub fn new(opts: SheetOptions, plan_width_ft: f64, plan_height_ft: f64) -> Result<Sheet, RenderError> {
        if !opts.scale.is_finite() || opts.scale <= 0.0 {
            return Err(RenderError::InvalidScale { value: opts.scale });
        }
        if !plan_width_ft.is_finite() || !plan_height_ft.is_finite() {
            return Err(RenderError::InvalidBounds);
        }

        let reserve = opts.margin + opts.dim_offset;
        let canvas_width = plan_width_ft * opts.scale + 2.0 * reserve;
        let canvas_height = plan_height_ft * opts.scale + 2.0 * reserve + opts.title_height;
        let origin = dvec2(reserve, reserve);

        Ok(Sheet {
            opts,
            plan_width_ft,
            plan_height_ft,
            origin,
            canvas_width,
            canvas_height,
        })
    }

    /// Convert a foot measurement to drawing units.
    pub fn ft(&self, feet: f64) -> f64 {
        feet * self.opts.scale
    }

    /// Map a plan coordinate (feet) to sheet coordinates (drawing units).
    pub fn map(&self, x_ft: f64, y_ft: f64) -> DVec2 {
        self.origin + dvec2(self.ft(x_ft), self.ft(y_ft))
    }

    /// Exterior wall thickness in drawing units.
    pub fn exterior_wall(&self) -> f64 {
        self.ft(self.opts.exterior_wall_ft)
    }

    /// Interior partition thickness in drawing units.
    pub fn interior_wall(&self) -> f64 {
        self.ft(self.opts.interior_wall_ft)
    }

    /// Right edge of the plan on the sheet.
    pub fn plan_right(&self) -> f64 {
        self.origin.x + self.ft(self.plan_width_ft)
    }

    /// Bottom edge of the plan on the sheet.
    pub fn plan_bottom(&self) -> f64 {
        self.origin.y + self.ft(self.plan_height_ft)
    }
}
