//! Boundary tracing: direction map to closed loops of unit hops.
use tracing::debug;

use crate::bitmask::CellGrid;
use crate::path::Segment;
use crate::trace::alignment::AlignmentZones;
use crate::trace::direction::{Direction, DirectionMap};
use crate::trace::{is_isolated, LoopCategory, TracedLoops};

/// Walks filled/unfilled boundaries into loops and classifies them.
#[derive(Clone, Debug)]
pub struct BoundaryTracer {
    margin: u32,
    zones: AlignmentZones,
}

impl BoundaryTracer {
    pub fn new(margin: u32, zones: AlignmentZones) -> Self {
        Self { margin, zones }
    }

    /// Trace every boundary of `grid`.
    ///
    /// Vertices are visited in row-major order and each starts walks until all of its
    /// transitions are consumed, so loops start at their top-left corner heading east
    /// (outer boundaries) or south (holes). Loops lying entirely inside a finder zone
    /// are dropped.
    pub fn trace<G: CellGrid + ?Sized>(&self, grid: &G) -> TracedLoops {
        let mut map = DirectionMap::build(grid);
        let (cols, rows) = map.size();
        let mut out = TracedLoops::default();
        let mut walked = 0usize;
        let mut skipped = 0usize;

        for y in 0..rows {
            for x in 0..cols {
                while let Some(incoming) = map.entries(x, y).and_then(|e| e.first_open()) {
                    let walk = walk_loop(&mut map, x as i64, y as i64, incoming);
                    walked += 1;

                    // Degenerate: a move plus at most one hop.
                    if walk.hops.len() < 2 {
                        continue;
                    }
                    if self.zones.contains_vertex_box(walk.min, walk.max) {
                        skipped += 1;
                        continue;
                    }

                    let category = classify(grid, x as i64, y as i64, &walk.hops);
                    let origin = self.margin as f32;
                    let mut segments = Vec::with_capacity(walk.hops.len() + 2);
                    segments.push(Segment::move_to(x as f32 + origin, y as f32 + origin));
                    segments.extend(walk.hops.iter().map(|d| d.hop()));
                    segments.push(Segment::ClosePath);
                    out.push(category, segments);
                }
            }
        }

        debug!(
            "Traced {} loops over {} boundary vertices ({} dots, {} shapes, {} in finder zones).",
            walked,
            map.active_vertex_count(),
            out.dots.loop_count(),
            out.shapes.loop_count(),
            skipped
        );
        out
    }
}

struct Walk {
    hops: Vec<Direction>,
    min: (i64, i64),
    max: (i64, i64),
}

fn walk_loop(map: &mut DirectionMap, x: i64, y: i64, incoming: Direction) -> Walk {
    let start = (x, y);
    let mut cur = start;
    let mut heading = incoming;
    let mut walk = Walk {
        hops: Vec::new(),
        min: start,
        max: start,
    };

    while let Some(next) = map.take(cur.0, cur.1, heading) {
        let (dx, dy) = next.offset();
        cur = (cur.0 + dx, cur.1 + dy);
        walk.hops.push(next);
        walk.min = (walk.min.0.min(cur.0), walk.min.1.min(cur.1));
        walk.max = (walk.max.0.max(cur.0), walk.max.1.max(cur.1));
        heading = next;
    }

    debug_assert_eq!(
        cur, start,
        "boundary walk from {start:?} stopped at {cur:?} without closing"
    );
    walk
}

/// A four-hop loop starting east from the top-left corner of an isolated cell is a
/// dot; anything else is a shape.
fn classify<G: CellGrid + ?Sized>(grid: &G, x: i64, y: i64, hops: &[Direction]) -> LoopCategory {
    if hops.len() == 4 && hops[0] == Direction::East && is_isolated(grid, x, y) {
        LoopCategory::Dot
    } else {
        LoopCategory::Shape
    }
}
