//! CutPlan
//!
//! A small engine that computes how many fixed-size rectangular sheets are
//! needed to cover a larger rectangular area, allowing cut sheets along the
//! edges, and renders the resulting layout as a PNG diagram.
//!
//! # Features
//!
//! - **Tiling Calculator**: pure integer arithmetic, deterministic, no I/O
//! - **Layout Renderer**: in-memory PNG diagram with distinct styles for
//!   whole and cut sheets
//! - **Summary Formatter**: display-ready scalar breakdown of the layout
//!
//! # Example
//!
//! ```no_run
//! use cutplan::{cover, DiagramConfig, Dimensions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sheet = Dimensions::new(30, 60);
//! let area = Dimensions::new(400, 400);
//!
//! let (summary, diagram) = cover(sheet, area, &DiagramConfig::default())?;
//! println!("{}", summary);
//! std::fs::write("layout.png", &diagram.png_data)?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod tiling;
pub use tiling::{Placement, SheetKind, TilingPlan};

pub mod rendering;
pub use rendering::{render_diagram, Diagram};

/// RGBA color quad used throughout the diagram palette
pub type Rgba = (u8, u8, u8, u8);

/// A width/height pair in layout units (implicitly centimeters)
///
/// Used for both the sheet and the coverage area. Values are unit-less
/// non-negative integers; whether zero is acceptable depends on the role
/// (a sheet must be positive along both axes, an area may be empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a dimension pair such as `30x60` or `30 60`.
    ///
    /// Accepts `x`, `X`, `,` or whitespace as the separator. Returns
    /// [`Error::InvalidDimension`] when the text does not contain exactly
    /// two non-negative integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use cutplan::Dimensions;
    ///
    /// let d = Dimensions::parse("30x60").unwrap();
    /// assert_eq!(d, Dimensions::new(30, 60));
    /// assert!(Dimensions::parse("30x60x90").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == 'x' || c == 'X' || c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(Error::InvalidDimension(format!(
                "expected exactly two values, got {} in {:?}",
                parts.len(),
                s
            )));
        }

        let width = parse_value(parts[0])?;
        let height = parse_value(parts[1])?;
        Ok(Self { width, height })
    }
}

fn parse_value(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .map_err(|_| Error::InvalidDimension(format!("not a non-negative integer: {:?}", s)))
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{d7}{}", self.width, self.height)
    }
}

/// Configuration for diagram rendering
///
/// One instance per call; there is no process-wide drawing state. The
/// defaults reproduce the reference palette: light-blue whole sheets with
/// black edges, light-green cut sheets with green edges, a red outline
/// around the coverage area and a pale background grid.
///
/// # Examples
///
/// ```
/// let cfg = cutplan::DiagramConfig::default();
/// assert_eq!(cfg.canvas_size, 640);
/// assert!(cfg.draw_grid);
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Pixel length of the longest area edge, margins excluded
    pub canvas_size: u32,
    /// Margin around the drawing, in pixels
    pub margin: u32,
    /// Whether to draw the background grid overlay
    pub draw_grid: bool,
    /// Grid spacing in layout units; `None` picks a round step automatically
    pub grid_step: Option<u32>,
    /// Canvas background color
    pub background: Rgba,
    /// Fill color for whole sheets
    pub full_fill: Rgba,
    /// Edge color for whole sheets
    pub full_edge: Rgba,
    /// Fill color for cut sheets
    pub cut_fill: Rgba,
    /// Edge color for cut sheets
    pub cut_edge: Rgba,
    /// Outline color of the coverage area
    pub outline: Rgba,
    /// Grid line color
    pub grid_color: Rgba,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            canvas_size: 640,
            margin: 16,
            draw_grid: true,
            grid_step: None,
            background: (255, 255, 255, 255),
            full_fill: (173, 216, 230, 255),
            full_edge: (0, 0, 0, 255),
            cut_fill: (144, 238, 144, 255),
            cut_edge: (0, 128, 0, 255),
            outline: (255, 0, 0, 255),
            grid_color: (210, 210, 210, 255),
        }
    }
}

/// Scalar breakdown of a computed layout, ready for display
///
/// This type is returned alongside the diagram and contains everything a
/// caller needs for a textual response: the original dimension pairs and
/// the full, cut and total sheet counts.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Nominal sheet size
    pub sheet: Dimensions,
    /// Coverage area size
    pub area: Dimensions,
    /// Whole sheets placed in the grid
    pub full_sheets: u64,
    /// Sheets trimmed to cover edge strips and the corner
    pub cut_sheets: u64,
    /// Total sheets needed
    pub total_sheets: u64,
}

impl Summary {
    /// Select the display fields out of a computed plan
    pub fn from_plan(plan: &TilingPlan) -> Self {
        Self {
            sheet: plan.sheet,
            area: plan.area,
            full_sheets: plan.full_sheets(),
            cut_sheets: plan.cut_sheets(),
            total_sheets: plan.total_sheets(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sheet size: {} cm", self.sheet)?;
        writeln!(f, "Coverage area: {} cm", self.area)?;
        writeln!(f, "Full sheets: {}", self.full_sheets)?;
        writeln!(f, "Cut sheets: {}", self.cut_sheets)?;
        write!(f, "Total sheets: {}", self.total_sheets)
    }
}

/// Compute a tiling plan, render its diagram and build the summary.
///
/// This is the single entry point a transport layer needs: structured
/// dimension pairs in, display summary plus encoded PNG out. Each call is
/// independent; a failed request has no effect on later ones.
pub fn cover(
    sheet: Dimensions,
    area: Dimensions,
    config: &DiagramConfig,
) -> Result<(Summary, Diagram)> {
    let plan = TilingPlan::compute(sheet, area)?;
    let diagram = render_diagram(&plan, config)?;
    Ok((Summary::from_plan(&plan), diagram))
}
