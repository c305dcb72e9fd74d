//! Tiling computation: how many sheets cover the area, and where they sit.
//!
//! The tiling is the trivial greedy grid: as many whole sheets as fit from
//! one corner, then one strip of cut sheets along each remaining edge and a
//! single corner piece. Alternate sheet orientations are never tried, so
//! the cut count is not minimized; that is the intended behavior.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::Dimensions;

/// The kind of piece a placement represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SheetKind {
    /// An uncut sheet of the nominal size
    Full,
    /// A sheet trimmed to cover a remainder strip along one edge
    CutStrip,
    /// A sheet trimmed to cover the remaining corner
    CutCorner,
}

impl SheetKind {
    /// Whether this piece requires cutting
    pub fn is_cut(&self) -> bool {
        !matches!(self, SheetKind::Full)
    }
}

/// A positioned rectangle in layout units, with the y axis pointing up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub kind: SheetKind,
}

/// Computed breakdown of full and cut sheets for one request
///
/// Derived once per request and immutable afterwards. Along each axis the
/// whole sheets plus the remainder cover the area exactly:
/// `full_cols * sheet.width + rem_width == area.width`, and the remainder
/// is always strictly smaller than one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TilingPlan {
    /// Nominal sheet size
    pub sheet: Dimensions,
    /// Coverage area size
    pub area: Dimensions,
    /// Whole sheets along the x axis
    pub full_cols: u32,
    /// Whole sheets along the y axis
    pub full_rows: u32,
    /// Leftover width requiring a cut, less than `sheet.width`
    pub rem_width: u32,
    /// Leftover height requiring a cut, less than `sheet.height`
    pub rem_height: u32,
}

impl TilingPlan {
    /// Derive the plan for covering `area` with `sheet`-sized pieces.
    ///
    /// Pure and deterministic; identical inputs always produce identical
    /// plans. Fails with [`Error::InvalidDimension`] when either sheet
    /// dimension is zero.
    pub fn compute(sheet: Dimensions, area: Dimensions) -> Result<Self> {
        if sheet.width == 0 || sheet.height == 0 {
            return Err(Error::InvalidDimension(format!(
                "sheet dimensions must be positive, got {}",
                sheet
            )));
        }

        let plan = Self {
            sheet,
            area,
            full_cols: area.width / sheet.width,
            full_rows: area.height / sheet.height,
            rem_width: area.width % sheet.width,
            rem_height: area.height % sheet.height,
        };

        log::debug!(
            "tiling {} area with {} sheets: {} full, {} cut",
            area,
            sheet,
            plan.full_sheets(),
            plan.cut_sheets()
        );

        Ok(plan)
    }

    /// Number of whole sheets in the grid
    pub fn full_sheets(&self) -> u64 {
        u64::from(self.full_cols) * u64::from(self.full_rows)
    }

    /// Number of cut sheets: one per grid row along the right edge, one per
    /// grid column along the top edge, plus the corner piece when both
    /// remainders are nonzero
    pub fn cut_sheets(&self) -> u64 {
        let mut extra = 0u64;
        if self.rem_width > 0 {
            extra += u64::from(self.full_rows);
        }
        if self.rem_height > 0 {
            extra += u64::from(self.full_cols);
        }
        if self.rem_width > 0 && self.rem_height > 0 {
            extra += 1;
        }
        extra
    }

    /// Total sheets needed, full and cut
    pub fn total_sheets(&self) -> u64 {
        self.full_sheets() + self.cut_sheets()
    }

    /// Iterate the positioned pieces: the full grid in row-major order,
    /// then the right-edge strip, the top-edge strip and the corner.
    ///
    /// Placements are produced lazily; a large grid costs nothing until it
    /// is consumed.
    pub fn placements(&self) -> impl Iterator<Item = Placement> {
        let plan = *self;

        let full = (0..plan.full_rows).flat_map(move |row| {
            (0..plan.full_cols).map(move |col| Placement {
                x: col * plan.sheet.width,
                y: row * plan.sheet.height,
                width: plan.sheet.width,
                height: plan.sheet.height,
                kind: SheetKind::Full,
            })
        });

        let right = (plan.rem_width > 0)
            .then(|| {
                (0..plan.full_rows).map(move |row| Placement {
                    x: plan.full_cols * plan.sheet.width,
                    y: row * plan.sheet.height,
                    width: plan.rem_width,
                    height: plan.sheet.height,
                    kind: SheetKind::CutStrip,
                })
            })
            .into_iter()
            .flatten();

        let top = (plan.rem_height > 0)
            .then(|| {
                (0..plan.full_cols).map(move |col| Placement {
                    x: col * plan.sheet.width,
                    y: plan.full_rows * plan.sheet.height,
                    width: plan.sheet.width,
                    height: plan.rem_height,
                    kind: SheetKind::CutStrip,
                })
            })
            .into_iter()
            .flatten();

        let corner = (plan.rem_width > 0 && plan.rem_height > 0)
            .then(|| Placement {
                x: plan.full_cols * plan.sheet.width,
                y: plan.full_rows * plan.sheet.height,
                width: plan.rem_width,
                height: plan.rem_height,
                kind: SheetKind::CutCorner,
            })
            .into_iter();

        full.chain(right).chain(top).chain(corner)
    }
}
