use anyhow::bail;
use qr_contour::prelude::*;
use qr_contour_examples::{
    init_tracing, load_bitmask_png, render_contour_to_svg, write_svg, RenderConfig,
};

const USAGE: &str = "usage: png-to-svg <input.png> <output.svg> [style] [seed] [margin]";

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!(USAGE);
    }

    // Input PNGs carry one pixel per module; dark pixels are filled.
    let grid = load_bitmask_png(&args[0], 128)?;
    let style: Style = args.get(2).map_or(Ok(Style::Basic), |s| s.parse())?;
    let seed = args.get(3).map(|s| s.parse::<u32>()).transpose()?;
    let margin = args.get(4).map(|s| s.parse::<u32>()).transpose()?.unwrap_or(1);

    let mut config = ContourConfig::new(style).with_margin(margin);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let result = compute_contour(&grid, &config)?;
    let svg = render_contour_to_svg(
        &result,
        (grid.width(), grid.height()),
        margin,
        &RenderConfig::new(8.0),
    );
    write_svg(&args[1], &svg)?;

    Ok(())
}
