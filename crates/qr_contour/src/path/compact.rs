//! Segment compaction: adjacent hops on the same axis collapse into one.
use crate::path::{PathData, Segment};

/// Compact every loop of `path`.
pub fn compact(path: &PathData) -> PathData {
    PathData::from(compact_loop(path.segments()))
}

/// Merge each run of consecutive same-axis hops into a single hop with the summed delta.
///
/// Only hops are touched; a run summing to zero is dropped. The result is idempotent.
pub fn compact_loop(segments: &[Segment]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for s in segments {
        if let Segment::Hop { axis, delta } = *s {
            if let Some(Segment::Hop {
                axis: prev_axis,
                delta: prev_delta,
            }) = out.last_mut()
            {
                if *prev_axis == axis {
                    *prev_delta += delta;
                    if *prev_delta == 0 {
                        out.pop();
                    }
                    continue;
                }
            }
        }
        out.push(*s);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::replay;

    fn stair() -> Vec<Segment> {
        vec![
            Segment::move_to(0.0, 0.0),
            Segment::h(1),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::v(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]
    }

    #[test]
    fn merges_same_axis_runs() {
        let out = compact_loop(&stair());
        assert_eq!(
            out,
            vec![
                Segment::move_to(0.0, 0.0),
                Segment::h(2),
                Segment::v(1),
                Segment::h(-1),
                Segment::v(2),
                Segment::h(-1),
                Segment::v(-3),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn compaction_preserves_corners_and_shrinks() {
        let input = stair();
        let out = compact_loop(&input);
        assert!(out.len() <= input.len());

        let corners = |segs: &[Segment]| {
            let mut pts = replay(segs);
            pts.dedup();
            pts
        };
        let before: Vec<_> = corners(&input);
        let after: Vec<_> = corners(&out);
        assert_eq!(before.first(), after.first());
        assert_eq!(before.last(), after.last());
        for p in &after {
            assert!(before.contains(p));
        }
    }

    #[test]
    fn compaction_is_idempotent() {
        let once = compact_loop(&stair());
        let twice = compact_loop(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn does_not_merge_across_loops() {
        let mut path = PathData::new();
        path.push_loop([
            Segment::move_to(0.0, 0.0),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]);
        path.push_loop([
            Segment::move_to(3.0, 0.0),
            Segment::h(1),
            Segment::v(1),
            Segment::h(-1),
            Segment::v(-1),
            Segment::ClosePath,
        ]);
        let out = compact(&path);
        assert_eq!(out, path);
        assert_eq!(out.loop_count(), 2);
    }

    #[test]
    fn cancelling_hops_vanish() {
        let out = compact_loop(&[Segment::h(1), Segment::h(-1), Segment::v(2)]);
        assert_eq!(out, vec![Segment::v(2)]);
    }
}
