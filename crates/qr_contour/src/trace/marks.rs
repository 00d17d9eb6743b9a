//! Per-cell marks for the dots and mosaic styles.
//!
//! Each filled cell outside the finder zones becomes its own closed loop, with no
//! boundary tracing. Mosaic tiles draw their rotation from the shared stream in
//! row-major order, so a cell's angle depends on how many filled cells precede it.
use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::bitmask::CellGrid;
use crate::path::{round_loop, Segment};
use crate::rng::uniform;
use crate::trace::alignment::AlignmentZones;
use crate::trace::{is_isolated, square_loop, LoopCategory, TracedLoops};

/// Side length of a mosaic tile relative to its cell.
pub const MOSAIC_TILE_SIZE: f32 = 0.9;

/// Largest mosaic tile rotation, in degrees, either way.
pub const MOSAIC_MAX_ANGLE_DEG: f32 = 1.7;

/// Shape drawn for each filled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkShape {
    /// Circle of radius 0.5 centered on the cell, made of four quarter arcs.
    Circle,
    /// Square of side [`MOSAIC_TILE_SIZE`] rotated by a small random angle.
    RotatedSquare,
}

#[derive(Clone, Debug)]
pub struct CellMarkBuilder {
    shape: MarkShape,
    margin: u32,
    zones: AlignmentZones,
}

impl CellMarkBuilder {
    pub fn new(shape: MarkShape, margin: u32, zones: AlignmentZones) -> Self {
        Self {
            shape,
            margin,
            zones,
        }
    }

    /// Emit one mark per filled cell, isolated cells as dots and the rest as shapes.
    pub fn build<G: CellGrid + ?Sized>(&self, grid: &G, rng: &mut dyn RngCore) -> TracedLoops {
        let mut out = TracedLoops::default();
        let m = self.margin as f32;

        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                if !grid.get(x, y) || self.zones.contains_cell(x, y) {
                    continue;
                }
                let origin = Vec2::new(x as f32 + m, y as f32 + m);
                let segments = match self.shape {
                    MarkShape::Circle => circle(origin),
                    MarkShape::RotatedSquare => rotated_square(origin, rng),
                };
                let category = if is_isolated(grid, x, y) {
                    LoopCategory::Dot
                } else {
                    LoopCategory::Shape
                };
                out.push(category, segments);
            }
        }

        debug!(
            "Built {:?} marks: {} dots, {} shapes.",
            self.shape,
            out.dots.loop_count(),
            out.shapes.loop_count()
        );
        out
    }
}

fn circle(origin: Vec2) -> Vec<Segment> {
    round_loop(&square_loop(origin.x, origin.y, 1, true))
}

fn rotated_square(origin: Vec2, rng: &mut dyn RngCore) -> Vec<Segment> {
    let angle = uniform(rng, -MOSAIC_MAX_ANGLE_DEG, MOSAIC_MAX_ANGLE_DEG).to_radians();
    let rotation = Vec2::from_angle(angle);
    let center = origin + Vec2::splat(0.5);
    let half = MOSAIC_TILE_SIZE * 0.5;

    let corners = [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|c| center + rotation.rotate(c));

    vec![
        Segment::MoveTo(corners[0]),
        Segment::LineTo(corners[1]),
        Segment::LineTo(corners[2]),
        Segment::LineTo(corners[3]),
        Segment::ClosePath,
    ]
}
