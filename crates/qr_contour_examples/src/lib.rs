#![forbid(unsafe_code)]

mod rendering;
mod sample;

pub use rendering::{
    init_tracing, load_bitmask_png, render_contour_to_svg, write_svg, PathStyle, RenderConfig,
};
pub use sample::sample_qr_bitmask;
