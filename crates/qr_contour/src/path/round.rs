//! Corner rounding for rectilinear loops.
//!
//! Every turn of a square-cornered loop becomes a quarter-circle arc of radius
//! [`ARC_RADIUS`] joining the midpoints of the two unit hops meeting at the corner.
//! Straight runs keep whatever length remains between two arcs.
use glam::Vec2;

use crate::path::{Axis, PathData, Segment, Sweep};

/// Radius of every corner arc, in grid units.
pub const ARC_RADIUS: f32 = 0.5;

/// Round every loop of `path`.
pub fn round(path: &PathData) -> PathData {
    path.map_loops(round_loop)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    axis: Axis,
    len: i32,
}

impl Run {
    fn unit(self) -> Vec2 {
        self.axis.vector(self.len.signum() as f32)
    }
}

/// Round a single loop.
///
/// Loops that are not a `MoveTo`, alternating-axis hops and a `ClosePath` (for
/// example loops already holding arcs or absolute lines) are returned unchanged.
pub fn round_loop(segments: &[Segment]) -> Vec<Segment> {
    let Some((start, runs)) = collect_runs(segments) else {
        return segments.to_vec();
    };

    let n = runs.len();
    let mut sweeps = Vec::with_capacity(n);
    for i in 0..n {
        let prev = runs[(i + n - 1) % n];
        match turn_sweep(prev, runs[i]) {
            Some(sweep) => sweeps.push(sweep),
            None => return segments.to_vec(),
        }
    }

    let last = runs[n - 1];
    let mut out = Vec::with_capacity(2 * n + 2);
    out.push(Segment::MoveTo(start - last.unit() * ARC_RADIUS));
    for (i, run) in runs.iter().enumerate() {
        let prev = runs[(i + n - 1) % n];
        out.push(Segment::Arc {
            radius: ARC_RADIUS,
            sweep: sweeps[i],
            delta: (prev.unit() + run.unit()) * ARC_RADIUS,
        });
        let straight = run.len.abs() - 1;
        if straight > 0 {
            out.push(Segment::Hop {
                axis: run.axis,
                delta: straight * run.len.signum(),
            });
        }
    }
    out.push(Segment::ClosePath);
    out
}

/// Collapse the loop's hops into same-axis runs, rotating the start onto a corner
/// when the loop begins in the middle of a straight run.
fn collect_runs(segments: &[Segment]) -> Option<(Vec2, Vec<Run>)> {
    let (first, rest) = segments.split_first()?;
    let Segment::MoveTo(mut start) = *first else {
        return None;
    };
    let (close, body) = rest.split_last()?;
    if *close != Segment::ClosePath {
        return None;
    }

    let mut runs: Vec<Run> = Vec::with_capacity(body.len());
    for s in body {
        let Segment::Hop { axis, delta } = *s else {
            return None;
        };
        match runs.last_mut() {
            Some(run) if run.axis == axis => {
                run.len += delta;
                if run.len == 0 {
                    runs.pop();
                }
            }
            _ => runs.push(Run { axis, len: delta }),
        }
    }

    if runs.len() > 2 && runs[0].axis == runs[runs.len() - 1].axis {
        let head = runs.remove(0);
        let tail = runs.len() - 1;
        start -= runs[tail].axis.vector(runs[tail].len as f32);
        runs[tail].len += head.len;
        runs.rotate_right(1);
    }

    if runs.len() < 4 {
        return None;
    }
    Some((start, runs))
}

/// Sweep for the arc turning from `from` onto `to`: right turns on a y-down canvas
/// (convex corners of a clockwise loop) sweep positive, left turns negative.
fn turn_sweep(from: Run, to: Run) -> Option<Sweep> {
    use Axis::{Horizontal as H, Vertical as V};

    let sweep = match (from.axis, from.len > 0, to.axis, to.len > 0) {
        (H, true, V, true) => Sweep::Positive,
        (H, true, V, false) => Sweep::Negative,
        (H, false, V, true) => Sweep::Negative,
        (H, false, V, false) => Sweep::Positive,
        (V, true, H, true) => Sweep::Negative,
        (V, true, H, false) => Sweep::Positive,
        (V, false, H, true) => Sweep::Positive,
        (V, false, H, false) => Sweep::Negative,
        _ => return None,
    };
    Some(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::replay;

    fn arc(sweep: Sweep, dx: f32, dy: f32) -> Segment {
        Segment::Arc {
            radius: 0.5,
            sweep,
            delta: Vec2::new(dx, dy),
        }
    }

    fn cell(x: f32, y: f32) -> Vec<Segment> {
        vec![
            Segment::move_to(x, y),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]
    }

    #[test]
    fn unit_cell_becomes_circle() {
        let out = round_loop(&cell(1.0, 1.0));
        assert_eq!(
            out,
            vec![
                Segment::move_to(1.0, 1.5),
                arc(Sweep::Positive, 0.5, -0.5),
                arc(Sweep::Positive, 0.5, 0.5),
                arc(Sweep::Positive, -0.5, 0.5),
                arc(Sweep::Positive, -0.5, -0.5),
                Segment::ClosePath,
            ]
        );

        // Every arc endpoint sits on the circle around the cell center.
        let center = Vec2::new(1.5, 1.5);
        for p in replay(&out) {
            assert!(((p - center).length() - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn rounding_is_deterministic() {
        assert_eq!(round_loop(&cell(3.0, 2.0)), round_loop(&cell(3.0, 2.0)));
    }

    #[test]
    fn long_runs_keep_straight_remainder() {
        let rect = vec![
            Segment::move_to(0.0, 0.0),
            Segment::h(1),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-2),
            Segment::v(-1),
            Segment::ClosePath,
        ];
        let out = round_loop(&rect);
        assert_eq!(
            out,
            vec![
                Segment::move_to(0.0, 0.5),
                arc(Sweep::Positive, 0.5, -0.5),
                Segment::h(1),
                arc(Sweep::Positive, 0.5, 0.5),
                arc(Sweep::Positive, -0.5, 0.5),
                Segment::h(-1),
                arc(Sweep::Positive, -0.5, -0.5),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn concave_corners_sweep_negative() {
        // L-shaped region: three cells, notch at the bottom right.
        let l_shape = vec![
            Segment::move_to(0.0, 0.0),
            Segment::h(2),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-2),
            Segment::ClosePath,
        ];
        let out = round_loop(&l_shape);
        let sweeps: Vec<Sweep> = out
            .iter()
            .filter_map(|s| match s {
                Segment::Arc { sweep, .. } => Some(*sweep),
                _ => None,
            })
            .collect();
        assert_eq!(sweeps.len(), 6);
        assert_eq!(
            sweeps.iter().filter(|s| **s == Sweep::Negative).count(),
            1
        );
    }

    #[test]
    fn rounded_loop_closes() {
        let l_shape = vec![
            Segment::move_to(2.0, 3.0),
            Segment::h(3),
            Segment::v(1),
            Segment::h(-2),
            Segment::v(2),
            Segment::h(-1),
            Segment::v(-3),
            Segment::ClosePath,
        ];
        let out = round_loop(&l_shape);
        let points = replay(&out);
        let start = points[0];
        let before_close = points[points.len() - 2];
        assert!((start - before_close).length() < 1e-6);
    }

    #[test]
    fn start_inside_a_run_is_rotated_onto_a_corner() {
        let mid_start = vec![
            Segment::move_to(1.0, 0.0),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-2),
            Segment::v(-1),
            Segment::h(1),
            Segment::ClosePath,
        ];
        let rect = vec![
            Segment::move_to(0.0, 0.0),
            Segment::h(2),
            Segment::v(1),
            Segment::h(-2),
            Segment::v(-1),
            Segment::ClosePath,
        ];
        assert_eq!(round_loop(&mid_start), round_loop(&rect));
    }

    #[test]
    fn non_rectilinear_loops_pass_through() {
        let lines = vec![
            Segment::move_to(0.0, 0.0),
            Segment::LineTo(Vec2::new(1.0, 0.2)),
            Segment::LineTo(Vec2::new(0.8, 1.0)),
            Segment::ClosePath,
        ];
        assert_eq!(round_loop(&lines), lines);
    }

    #[test]
    fn turn_table_covers_all_eight_turns() {
        let r = |axis, len| Run { axis, len };
        let h = Axis::Horizontal;
        let v = Axis::Vertical;
        let turns = [
            (r(h, 1), r(v, 1)),
            (r(h, 1), r(v, -1)),
            (r(h, -1), r(v, 1)),
            (r(h, -1), r(v, -1)),
            (r(v, 1), r(h, 1)),
            (r(v, 1), r(h, -1)),
            (r(v, -1), r(h, 1)),
            (r(v, -1), r(h, -1)),
        ];
        for (from, to) in turns {
            // Cross product sign on a y-down canvas: positive z is a right turn.
            let a = from.unit();
            let b = to.unit();
            let expected = if a.perp_dot(b) > 0.0 {
                Sweep::Positive
            } else {
                Sweep::Negative
            };
            assert_eq!(turn_sweep(from, to), Some(expected));
        }
        assert_eq!(turn_sweep(r(h, 1), r(h, 1)), None);
    }
}
