//! Finder markers at the top-left, top-right and bottom-left corners.
//!
//! Markers are emitted independently of cell content once the grid is larger than
//! [`MIN_GRID_FOR_FINDERS`] on both axes. Their 7x7 corner zones are then reserved:
//! the tracer and the cell-mark builder leave them to [`AlignmentPatternBuilder`].
use crate::path::PathData;
use crate::trace::square_loop;

/// Side length of a finder marker, in cells.
pub const FINDER_SIZE: usize = 7;

/// Markers appear only when width and height both exceed this.
pub const MIN_GRID_FOR_FINDERS: usize = 16;

/// The three corner zones of a grid, or none when the grid is too small.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentZones {
    width: usize,
    height: usize,
    active: bool,
}

impl AlignmentZones {
    pub fn for_grid(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            active: width > MIN_GRID_FOR_FINDERS && height > MIN_GRID_FOR_FINDERS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Top-left cell of each zone: top-left, top-right, bottom-left.
    pub fn origins(&self) -> Vec<(usize, usize)> {
        if !self.active {
            return Vec::new();
        }
        vec![
            (0, 0),
            (self.width - FINDER_SIZE, 0),
            (0, self.height - FINDER_SIZE),
        ]
    }

    /// Whether cell `(x, y)` lies inside a zone.
    pub fn contains_cell(&self, x: i64, y: i64) -> bool {
        self.origins().into_iter().any(|(ox, oy)| {
            let (ox, oy) = (ox as i64, oy as i64);
            let size = FINDER_SIZE as i64;
            x >= ox && x < ox + size && y >= oy && y < oy + size
        })
    }

    /// Whether the vertex box `[min, max]` lies inside a single zone, borders included.
    pub fn contains_vertex_box(&self, min: (i64, i64), max: (i64, i64)) -> bool {
        self.origins().into_iter().any(|(ox, oy)| {
            let (ox, oy) = (ox as i64, oy as i64);
            let size = FINDER_SIZE as i64;
            min.0 >= ox && min.1 >= oy && max.0 <= ox + size && max.1 <= oy + size
        })
    }
}

/// Marker loops: two rings per corner in `outer`, one solid square per corner in `inner`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlignmentPaths {
    pub outer: PathData,
    pub inner: PathData,
}

/// Builds the fixed nested-square markers.
#[derive(Clone, Copy, Debug)]
pub struct AlignmentPatternBuilder {
    margin: u32,
}

impl AlignmentPatternBuilder {
    pub fn new(margin: u32) -> Self {
        Self { margin }
    }

    /// For every zone: the 7x7 outline (clockwise) and its 5x5 cut-out
    /// (counter-clockwise) into `outer`, the 3x3 center (clockwise) into `inner`.
    pub fn build(&self, zones: &AlignmentZones) -> AlignmentPaths {
        let mut paths = AlignmentPaths::default();
        let m = self.margin as f32;
        for (ox, oy) in zones.origins() {
            let (x, y) = (ox as f32 + m, oy as f32 + m);
            paths
                .outer
                .push_loop(square_loop(x, y, FINDER_SIZE, true));
            paths
                .outer
                .push_loop(square_loop(x + 1.0, y + 1.0, FINDER_SIZE - 2, false));
            paths
                .inner
                .push_loop(square_loop(x + 2.0, y + 2.0, FINDER_SIZE - 4, true));
        }
        paths
    }
}
