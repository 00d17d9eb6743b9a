use qr_contour::prelude::*;
use qr_contour_examples::{
    init_tracing, render_contour_to_svg, sample_qr_bitmask, write_svg, PathStyle, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // Same symbol, same style, different seeds: only the wobble changes.
    let side = 25;
    let margin = 2;
    let grid = sample_qr_bitmask(side, 11)?;

    let render = RenderConfig::new(10.0)
        .with_path_style("alignment-inner", PathStyle::fill("#8e44ad"))
        .with_path_style("dots", PathStyle::fill("#16a085"));

    for style in [Style::JitterLight, Style::JitterHeavy] {
        for seed in [1, 2, 3] {
            let config = ContourConfig::new(style).with_margin(margin).with_seed(seed);
            let result = compute_contour(&grid, &config)?;
            let svg = render_contour_to_svg(&result, (side, side), margin, &render);
            write_svg(format!("jitter-seeds-{style}-{seed}.svg"), &svg)?;
        }
    }

    Ok(())
}
