use qr_contour::prelude::*;
use qr_contour_examples::{
    init_tracing, render_contour_to_svg, sample_qr_bitmask, write_svg, PathStyle, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // One QR-sized symbol rendered in every style with the same seed.
    let side = 21;
    let margin = 1;
    let grid = sample_qr_bitmask(side, 7)?;

    let render = RenderConfig::new(12.0)
        .with_background("#fdfaf3")
        .with_path_style("alignment-outer", PathStyle::fill("#1b3a5c"))
        .with_path_style("alignment-inner", PathStyle::fill("#c0392b"))
        .with_path_style("dots", PathStyle::fill("#2c3e50"))
        .with_path_style("shapes", PathStyle::fill("#2c3e50"));

    for style in Style::ALL {
        let config = ContourConfig::new(style).with_margin(margin).with_seed(7);
        let result = compute_contour(&grid, &config)?;
        let svg = render_contour_to_svg(&result, (side, side), margin, &render);
        write_svg(format!("styles-gallery-{style}.svg"), &svg)?;
    }

    Ok(())
}
