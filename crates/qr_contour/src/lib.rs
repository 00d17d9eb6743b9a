#![forbid(unsafe_code)]
//! qr_contour: vector outlines for QR-style bitmasks.
//!
//! Modules:
//! - bitmask: the boolean cell grid the engine reads
//! - trace: direction maps, boundary tracing, finder markers and per-cell marks
//! - path: segment model, compaction, corner rounding and jitter
//! - style / contour: the style enumeration and the pipeline composing the passes
//! - rng: the seeded linear congruential stream behind jitter and mosaic tiles
//!
//! Output coordinates are offset by the configured margin. Each of the four result
//! paths is meant to be rendered as one independent filled path.
pub mod bitmask;
pub mod contour;
pub mod error;
pub mod path;
pub mod rng;
pub mod style;
pub mod trace;

/// Convenient re-exports for common types. Import with `use qr_contour::prelude::*;`.
pub mod prelude {
    pub use crate::bitmask::{Bitmask, CellGrid};
    pub use crate::contour::{
        compute_contour, compute_contour_with_style, ContourConfig, ContourResult, MAX_MARGIN,
    };
    pub use crate::error::{Error, Result};
    pub use crate::path::{compact, jitter, replay, round, Axis, PathData, Segment, Sweep};
    pub use crate::rng::{LcgRng, DEFAULT_SEED};
    pub use crate::style::{Style, JITTER_HEAVY, JITTER_LIGHT};
    pub use crate::trace::{
        AlignmentPatternBuilder, AlignmentZones, BoundaryTracer, CellMarkBuilder, LoopCategory,
        MarkShape, TracedLoops,
    };
}
