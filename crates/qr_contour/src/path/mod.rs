//! Path segment model and its text mini-language.
//!
//! A loop is a [`Segment::MoveTo`], a run of straight, arc or line segments, and a
//! [`Segment::ClosePath`]. [`PathData`] concatenates loops into one renderable path.
//! Passes rewrite segments by tag rather than by re-parsing text:
//! - [`compact`]: merge consecutive same-axis hops
//! - [`round`]: replace square corners with quarter-circle arcs
//! - [`jitter`]: replace hops with perturbed absolute line points
use std::fmt;

use glam::Vec2;

pub mod compact;
pub mod jitter;
pub mod round;

pub use compact::{compact, compact_loop};
pub use jitter::{jitter, jitter_loop};
pub use round::{round, round_loop, ARC_RADIUS};

/// Grid axis of a straight hop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector along this axis, scaled by `delta`.
    pub fn vector(self, delta: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(delta, 0.0),
            Axis::Vertical => Vec2::new(0.0, delta),
        }
    }

    /// The other axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Arc sweep flag. `Positive` is clockwise on a y-down canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sweep {
    Negative,
    Positive,
}

impl Sweep {
    fn flag(self) -> u8 {
        match self {
            Sweep::Negative => 0,
            Sweep::Positive => 1,
        }
    }
}

/// One path command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Absolute move that starts a loop (`M x y`).
    MoveTo(Vec2),
    /// Relative straight step along one axis (`h dx` / `v dy`).
    Hop { axis: Axis, delta: i32 },
    /// Relative quarter-circle arc (`a r r 0 0 sweep dx dy`).
    Arc {
        radius: f32,
        sweep: Sweep,
        delta: Vec2,
    },
    /// Absolute line (`L x y`).
    LineTo(Vec2),
    /// Close the current loop (`z`).
    ClosePath,
}

impl Segment {
    pub fn move_to(x: f32, y: f32) -> Self {
        Segment::MoveTo(Vec2::new(x, y))
    }

    pub fn h(delta: i32) -> Self {
        Segment::Hop {
            axis: Axis::Horizontal,
            delta,
        }
    }

    pub fn v(delta: i32) -> Self {
        Segment::Hop {
            axis: Axis::Vertical,
            delta,
        }
    }

    pub fn is_hop(&self) -> bool {
        matches!(self, Segment::Hop { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Segment::MoveTo(p) => write!(f, "M{} {}", Num(p.x), Num(p.y)),
            Segment::Hop {
                axis: Axis::Horizontal,
                delta,
            } => write!(f, "h{delta}"),
            Segment::Hop {
                axis: Axis::Vertical,
                delta,
            } => write!(f, "v{delta}"),
            Segment::Arc {
                radius,
                sweep,
                delta,
            } => write!(
                f,
                "a{r} {r} 0 0 {} {} {}",
                sweep.flag(),
                Num(delta.x),
                Num(delta.y),
                r = Num(radius)
            ),
            Segment::LineTo(p) => write!(f, "L{} {}", Num(p.x), Num(p.y)),
            Segment::ClosePath => f.write_str("z"),
        }
    }
}

/// Coordinate formatting: three decimals, trailing zeros trimmed, no negative zero.
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = ((self.0 as f64) * 1000.0).round() / 1000.0;
        if rounded == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{rounded}")
    }
}

/// An ordered sequence of loops rendered as one path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    segments: Vec<Segment>,
}

impl PathData {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append one complete loop.
    pub fn push_loop(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.segments.extend(segments);
    }

    /// Iterate loops; each slice ends with its [`Segment::ClosePath`].
    pub fn loops(&self) -> impl Iterator<Item = &[Segment]> {
        self.segments
            .split_inclusive(|s| matches!(s, Segment::ClosePath))
    }

    pub fn loop_count(&self) -> usize {
        self.loops().count()
    }

    /// Total unit hop length across all loops.
    pub fn hop_count(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Hop { delta, .. } => delta.unsigned_abs() as usize,
                _ => 0,
            })
            .sum()
    }

    /// Rewrite every loop with `f`, preserving loop order.
    pub fn map_loops(&self, mut f: impl FnMut(&[Segment]) -> Vec<Segment>) -> PathData {
        let mut out = PathData::new();
        for lp in self.loops() {
            out.push_loop(f(lp));
        }
        out
    }
}

impl From<Vec<Segment>> for PathData {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Absolute positions visited while drawing `segments`, one per segment.
pub fn replay(segments: &[Segment]) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(segments.len());
    let mut start = Vec2::ZERO;
    let mut cur = Vec2::ZERO;
    for s in segments {
        match *s {
            Segment::MoveTo(p) => {
                start = p;
                cur = p;
            }
            Segment::Hop { axis, delta } => cur += axis.vector(delta as f32),
            Segment::Arc { delta, .. } => cur += delta,
            Segment::LineTo(p) => cur = p,
            Segment::ClosePath => cur = start,
        }
        points.push(cur);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Segment> {
        vec![
            Segment::move_to(1.0, 1.0),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]
    }

    #[test]
    fn display_renders_mini_language() {
        let path = PathData::from(unit_square());
        assert_eq!(path.to_string(), "M1 1 h1 v1 h-1 v-1 z");
    }

    #[test]
    fn display_formats_arcs_and_lines() {
        let arc = Segment::Arc {
            radius: 0.5,
            sweep: Sweep::Positive,
            delta: Vec2::new(0.5, -0.5),
        };
        assert_eq!(arc.to_string(), "a0.5 0.5 0 0 1 0.5 -0.5");

        let line = Segment::LineTo(Vec2::new(2.03449, -0.0001));
        assert_eq!(line.to_string(), "L2.034 0");
    }

    #[test]
    fn loops_split_after_close() {
        let mut path = PathData::new();
        path.push_loop(unit_square());
        path.push_loop(unit_square());
        assert_eq!(path.loop_count(), 2);
        assert!(path
            .loops()
            .all(|lp| lp.last() == Some(&Segment::ClosePath)));
        assert_eq!(path.hop_count(), 8);
    }

    #[test]
    fn empty_path_has_no_loops() {
        let path = PathData::new();
        assert!(path.is_empty());
        assert_eq!(path.loop_count(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn replay_returns_to_start() {
        let points = replay(&unit_square());
        assert_eq!(points.len(), 6);
        assert_eq!(points[4], Vec2::new(1.0, 1.0));
        assert_eq!(points[2], Vec2::new(2.0, 2.0));
    }

    #[test]
    fn axis_cross_flips() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.vector(-2.0), Vec2::new(0.0, -2.0));
    }
}
