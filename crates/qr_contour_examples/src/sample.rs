//! A QR-like demo bitmask: finder patterns, separators, timing lines and hashed data.
use qr_contour::prelude::*;

/// Build a `side x side` module grid shaped like a QR symbol. `side` must be at least 21.
pub fn sample_qr_bitmask(side: usize, seed: u32) -> Result<Bitmask> {
    if side < 21 {
        return Err(Error::InvalidGrid(format!(
            "sample symbols need at least 21 modules, got {side}"
        )));
    }
    Bitmask::from_fn(side, side, |x, y| module(side, seed, x, y))
}

fn module(side: usize, seed: u32, x: usize, y: usize) -> bool {
    let corners = [(0, 0), (side - 7, 0), (0, side - 7)];
    for (ox, oy) in corners {
        // Finder plus its one-module separator.
        let (dx, dy) = (x as i64 - ox as i64, y as i64 - oy as i64);
        if (-1..=7).contains(&dx) && (-1..=7).contains(&dy) {
            if !(0..7).contains(&dx) || !(0..7).contains(&dy) {
                return false;
            }
            let ring = dx.min(dy).min(6 - dx).min(6 - dy);
            return ring != 1;
        }
    }

    if x == 6 || y == 6 {
        return (x + y) % 2 == 0;
    }

    let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (y as u32).wrapping_mul(0x85EB_CA77) ^ seed;
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finders_have_the_expected_rings() {
        let grid = sample_qr_bitmask(21, 1).unwrap();
        // Outer ring, gap ring, solid center.
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 1));
        assert!(grid.get(2, 2));
        assert!(grid.get(3, 3));
        // Separator.
        assert!(!grid.get(7, 0));
        assert!(!grid.get(13, 3));
        assert!(grid.get(14, 0));
    }

    #[test]
    fn too_small_sides_are_rejected() {
        assert!(sample_qr_bitmask(20, 1).is_err());
    }

    #[test]
    fn sample_traces_with_markers() {
        let grid = sample_qr_bitmask(21, 3).unwrap();
        let result = compute_contour(&grid, &ContourConfig::default()).unwrap();
        assert_eq!(result.alignment_outer.loop_count(), 6);
        assert!(!result.shapes.is_empty());
    }
}
