//! Hand-drawn jitter: hops become perturbed absolute line points.
//!
//! The caller owns the random stream. Loops draw from it strictly in order, two
//! values (x then y) per emitted point, so the same input and seed always produce
//! the same output.
use glam::Vec2;
use rand::RngCore;

use crate::path::{PathData, Segment};
use crate::rng::uniform;

/// Jitter every loop of `path`, drawing from `rng` in loop order.
pub fn jitter(path: &PathData, amplitude: f32, rng: &mut dyn RngCore) -> PathData {
    path.map_loops(|lp| jitter_loop(lp, amplitude, rng))
}

/// Replace each hop of a loop with a [`Segment::LineTo`] at the hop's end point,
/// offset on each axis by a value drawn uniformly from `[-amplitude, amplitude)`.
///
/// The move point stays exact. A final hop that lands back on the start is left to
/// the closing segment. Non-hop segments pass through unchanged.
pub fn jitter_loop(segments: &[Segment], amplitude: f32, rng: &mut dyn RngCore) -> Vec<Segment> {
    let amplitude = amplitude.abs();
    let mut out = Vec::with_capacity(segments.len());
    let mut start = Vec2::ZERO;
    let mut nominal = Vec2::ZERO;

    for (i, s) in segments.iter().enumerate() {
        match *s {
            Segment::MoveTo(p) => {
                start = p;
                nominal = p;
                out.push(*s);
            }
            Segment::Hop { axis, delta } => {
                nominal += axis.vector(delta as f32);
                let closes = matches!(segments.get(i + 1), Some(Segment::ClosePath));
                if closes && nominal == start {
                    continue;
                }
                let dx = uniform(rng, -amplitude, amplitude);
                let dy = uniform(rng, -amplitude, amplitude);
                out.push(Segment::LineTo(nominal + Vec2::new(dx, dy)));
            }
            Segment::Arc { delta, .. } => {
                nominal += delta;
                out.push(*s);
            }
            Segment::LineTo(p) => {
                nominal = p;
                out.push(*s);
            }
            Segment::ClosePath => {
                nominal = start;
                out.push(*s);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::LcgRng;

    fn cell() -> Vec<Segment> {
        vec![
            Segment::move_to(2.0, 2.0),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]
    }

    fn line_points(segments: &[Segment]) -> Vec<Vec2> {
        segments
            .iter()
            .filter_map(|s| match s {
                Segment::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn zero_amplitude_lands_on_corners() {
        let mut rng = LcgRng::new(1);
        let out = jitter_loop(&cell(), 0.0, &mut rng);
        assert_eq!(
            out,
            vec![
                Segment::move_to(2.0, 2.0),
                Segment::LineTo(Vec2::new(3.0, 2.0)),
                Segment::LineTo(Vec2::new(3.0, 3.0)),
                Segment::LineTo(Vec2::new(2.0, 3.0)),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn offsets_stay_within_amplitude() {
        let mut rng = LcgRng::new(9);
        let out = jitter_loop(&cell(), 0.15, &mut rng);
        let nominal = [
            Vec2::new(3.0, 2.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(2.0, 3.0),
        ];
        let points = line_points(&out);
        assert_eq!(points.len(), 3);
        for (p, n) in points.iter().zip(nominal) {
            assert!((p.x - n.x).abs() <= 0.15);
            assert!((p.y - n.y).abs() <= 0.15);
        }
        assert_eq!(out.first(), Some(&Segment::move_to(2.0, 2.0)));
        assert_eq!(out.last(), Some(&Segment::ClosePath));
    }

    #[test]
    fn draws_two_values_per_point() {
        let mut rng = LcgRng::new(5);
        let _ = jitter_loop(&cell(), 0.07, &mut rng);

        let mut expected = LcgRng::new(5);
        for _ in 0..6 {
            expected.next_u32();
        }
        assert_eq!(rng, expected);
    }

    #[test]
    fn same_seed_same_output_and_seed_changes_output() {
        let mut path = PathData::new();
        path.push_loop(cell());

        let a = jitter(&path, 0.07, &mut LcgRng::new(1));
        let b = jitter(&path, 0.07, &mut LcgRng::new(1));
        let c = jitter(&path, 0.07, &mut LcgRng::new(2));
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a.to_string(), c.to_string());
    }

    #[test]
    fn stream_is_shared_across_loops() {
        let mut path = PathData::new();
        path.push_loop(cell());
        path.push_loop(cell());
        let out = jitter(&path, 0.1, &mut LcgRng::new(3));
        let loops: Vec<_> = out.loops().collect();
        assert_eq!(loops.len(), 2);
        assert_ne!(loops[0], loops[1]);
    }
}
