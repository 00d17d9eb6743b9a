//! Contour extraction from a [`CellGrid`].
//!
//! - [`direction`]: per-vertex boundary transitions built from each 2x2 neighborhood
//! - [`tracer`]: walks the direction map into closed unit-hop loops
//! - [`alignment`]: fixed finder-marker loops and the corner zones they reserve
//! - [`marks`]: per-cell circles and rotated squares that bypass boundary tracing
use crate::bitmask::CellGrid;
use crate::path::{Axis, PathData, Segment};

pub mod alignment;
pub mod direction;
pub mod marks;
pub mod tracer;

pub use alignment::{AlignmentPaths, AlignmentPatternBuilder, AlignmentZones};
pub use direction::{Direction, DirectionMap, VertexEntries};
pub use marks::{CellMarkBuilder, MarkShape};
pub use tracer::BoundaryTracer;

/// Semantic category of a traced loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopCategory {
    /// A single filled cell with no filled orthogonal neighbor.
    Dot,
    /// Everything else.
    Shape,
}

/// Loops produced by a tracing pass, split by category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TracedLoops {
    pub dots: PathData,
    pub shapes: PathData,
}

impl TracedLoops {
    pub fn push(&mut self, category: LoopCategory, segments: impl IntoIterator<Item = Segment>) {
        match category {
            LoopCategory::Dot => self.dots.push_loop(segments),
            LoopCategory::Shape => self.shapes.push_loop(segments),
        }
    }
}

/// Whether the cell is filled and none of its four orthogonal neighbors are.
pub(crate) fn is_isolated<G: CellGrid + ?Sized>(grid: &G, x: i64, y: i64) -> bool {
    grid.get(x, y)
        && !grid.get(x - 1, y)
        && !grid.get(x + 1, y)
        && !grid.get(x, y - 1)
        && !grid.get(x, y + 1)
}

/// Axis-aligned square loop of unit hops with its top-left corner at `(x, y)`.
///
/// Clockwise loops run east first; counter-clockwise loops run south first and
/// cut holes under the nonzero fill rule.
pub(crate) fn square_loop(x: f32, y: f32, size: usize, clockwise: bool) -> Vec<Segment> {
    let mut out = Vec::with_capacity(4 * size + 2);
    out.push(Segment::move_to(x, y));
    let (first, second) = if clockwise {
        (Axis::Horizontal, Axis::Vertical)
    } else {
        (Axis::Vertical, Axis::Horizontal)
    };
    for delta in [1, -1] {
        for axis in [first, second] {
            out.extend(std::iter::repeat_n(Segment::Hop { axis, delta }, size));
        }
    }
    out.push(Segment::ClosePath);
    out
}
