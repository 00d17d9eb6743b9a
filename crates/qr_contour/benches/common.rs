use std::time::Duration;

use criterion::{Criterion, Throughput};
use qr_contour::prelude::*;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Grid sizes covering QR versions 1, 10 and 40.
pub const SIDES: [usize; 3] = [21, 57, 177];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Pseudo-random module pattern with roughly half the cells filled.
pub fn noise_grid(side: usize, seed: u64) -> Bitmask {
    let mut state = seed | 1;
    Bitmask::from_fn(side, side, |_, _| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state & 1 == 1
    })
    .expect("bench grid dimensions are positive")
}
