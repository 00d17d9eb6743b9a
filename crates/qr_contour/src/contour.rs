//! Style pipeline: grid to the four output paths.
//!
//! | Style        | Tracing                  | Post-processing                       |
//! |--------------|--------------------------|---------------------------------------|
//! | basic        | boundary tracer          | compaction                            |
//! | rounded      | boundary tracer          | rounding, compaction                  |
//! | dots         | cell marks (circles)     | compaction, finder markers rounded    |
//! | mosaic       | cell marks (tiles)       | compaction                            |
//! | jitter-*     | boundary tracer          | jitter (shapes, dots, inner, outer)   |
use rand::RngCore;
use tracing::{info, warn};

use crate::bitmask::CellGrid;
use crate::error::{Error, Result};
use crate::path::{compact, jitter, round, PathData};
use crate::rng::{LcgRng, DEFAULT_SEED};
use crate::style::Style;
use crate::trace::{
    AlignmentPaths, AlignmentPatternBuilder, AlignmentZones, BoundaryTracer, CellMarkBuilder,
    MarkShape, TracedLoops,
};

/// Largest accepted margin, in grid units.
pub const MAX_MARGIN: u32 = 4096;

/// Configuration for a contour computation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContourConfig {
    /// Offset added to every emitted coordinate.
    pub margin: u32,
    /// Output style.
    pub style: Style,
    /// Seed for the jitter and mosaic stream. `None` uses [`DEFAULT_SEED`].
    pub seed: Option<u32>,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            margin: 1,
            style: Style::Basic,
            seed: None,
        }
    }
}

impl ContourConfig {
    /// Creates a new [`ContourConfig`] with the specified style.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Sets the margin.
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed the stream starts from.
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.margin > MAX_MARGIN {
            return Err(Error::InvalidConfig(format!(
                "margin must be <= {MAX_MARGIN}, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// The four independent paths produced for one grid.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourResult {
    /// Outer 7x7 outlines and 5x5 cut-outs of the finder markers.
    pub alignment_outer: PathData,
    /// Solid 3x3 centers of the finder markers.
    pub alignment_inner: PathData,
    /// Isolated single cells.
    pub dots: PathData,
    /// Every other loop.
    pub shapes: PathData,
}

impl ContourResult {
    pub fn is_empty(&self) -> bool {
        self.alignment_outer.is_empty()
            && self.alignment_inner.is_empty()
            && self.dots.is_empty()
            && self.shapes.is_empty()
    }

    pub fn loop_count(&self) -> usize {
        self.paths().iter().map(|(_, p)| p.loop_count()).sum()
    }

    /// Named paths in rendering order.
    pub fn paths(&self) -> [(&'static str, &PathData); 4] {
        [
            ("alignment-outer", &self.alignment_outer),
            ("alignment-inner", &self.alignment_inner),
            ("dots", &self.dots),
            ("shapes", &self.shapes),
        ]
    }
}

/// Compute the contour of `grid` in the configured style.
///
/// The grid is only read. Every call owns its own random stream, so equal
/// `(grid, config)` inputs always produce equal output.
pub fn compute_contour<G: CellGrid + ?Sized>(
    grid: &G,
    config: &ContourConfig,
) -> Result<ContourResult> {
    config.validate()?;
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidGrid(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let margin = config.margin;
    let zones = AlignmentZones::for_grid(width, height);
    let finders = AlignmentPatternBuilder::new(margin).build(&zones);
    let mut rng = LcgRng::new(config.effective_seed());

    let traced = match config.style {
        Style::Dots => CellMarkBuilder::new(MarkShape::Circle, margin, zones).build(grid, &mut rng),
        Style::Mosaic => {
            CellMarkBuilder::new(MarkShape::RotatedSquare, margin, zones).build(grid, &mut rng)
        }
        Style::Basic | Style::Rounded | Style::JitterLight | Style::JitterHeavy => {
            BoundaryTracer::new(margin, zones).trace(grid)
        }
    };

    let result = match config.style {
        Style::Basic | Style::Mosaic => assemble(finders, traced, compact),
        Style::Rounded => assemble(finders, traced, |p| compact(&round(p))),
        Style::Dots => ContourResult {
            alignment_outer: compact(&round(&finders.outer)),
            alignment_inner: compact(&round(&finders.inner)),
            dots: compact(&traced.dots),
            shapes: compact(&traced.shapes),
        },
        Style::JitterLight | Style::JitterHeavy => {
            let amplitude = config.style.jitter_amplitude().unwrap_or_default();
            jitter_all(finders, traced, amplitude, &mut rng)
        }
    };

    if result.is_empty() {
        warn!("Grid {}x{} produced no contours.", width, height);
    }
    info!(
        "Contour {}x{} ({}): {} outer, {} inner, {} dots, {} shapes.",
        width,
        height,
        config.style,
        result.alignment_outer.loop_count(),
        result.alignment_inner.loop_count(),
        result.dots.loop_count(),
        result.shapes.loop_count()
    );
    Ok(result)
}

/// Parse `style` and compute with the given margin and the default seed.
pub fn compute_contour_with_style<G: CellGrid + ?Sized>(
    grid: &G,
    margin: u32,
    style: &str,
) -> Result<ContourResult> {
    let style: Style = style.parse()?;
    compute_contour(grid, &ContourConfig::new(style).with_margin(margin))
}

fn assemble(
    finders: AlignmentPaths,
    traced: TracedLoops,
    pass: impl Fn(&PathData) -> PathData,
) -> ContourResult {
    ContourResult {
        alignment_outer: pass(&finders.outer),
        alignment_inner: pass(&finders.inner),
        dots: pass(&traced.dots),
        shapes: pass(&traced.shapes),
    }
}

/// The stream is consumed shapes, dots, inner markers, outer markers, in that order.
fn jitter_all(
    finders: AlignmentPaths,
    traced: TracedLoops,
    amplitude: f32,
    rng: &mut dyn RngCore,
) -> ContourResult {
    let shapes = jitter(&traced.shapes, amplitude, rng);
    let dots = jitter(&traced.dots, amplitude, rng);
    let alignment_inner = jitter(&finders.inner, amplitude, rng);
    let alignment_outer = jitter(&finders.outer, amplitude, rng);
    ContourResult {
        alignment_outer,
        alignment_inner,
        dots,
        shapes,
    }
}
