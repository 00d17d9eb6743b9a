//! SVG rendering for contour results and PNG bitmask loading.
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use qr_contour::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Fill and optional stroke for one result path.
#[derive(Clone, Debug)]
pub struct PathStyle {
    pub fill: String,
    pub stroke: Option<(String, f32)>,
}

impl PathStyle {
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: color.into(),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f32) -> Self {
        self.stroke = Some((color.into(), width));
        self
    }
}

/// Document-level settings and per-path styles keyed by [`ContourResult::paths`] names.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output pixels per grid unit.
    pub scale: f32,
    pub background: Option<String>,
    styles: HashMap<&'static str, PathStyle>,
    default_style: PathStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 10.0,
            background: Some("#ffffff".into()),
            styles: HashMap::new(),
            default_style: PathStyle::fill("#000000"),
        }
    }
}

impl RenderConfig {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn set_path_style(&mut self, name: &'static str, style: PathStyle) {
        self.styles.insert(name, style);
    }

    pub fn with_path_style(mut self, name: &'static str, style: PathStyle) -> Self {
        self.set_path_style(name, style);
        self
    }

    fn style_for(&self, name: &str) -> &PathStyle {
        self.styles.get(name).unwrap_or(&self.default_style)
    }
}

/// Build an SVG document with one `<path>` per non-empty result path.
///
/// The viewBox spans the grid plus the margin on every side.
pub fn render_contour_to_svg(
    result: &ContourResult,
    grid_size: (usize, usize),
    margin: u32,
    config: &RenderConfig,
) -> String {
    let view_w = grid_size.0 as f32 + 2.0 * margin as f32;
    let view_h = grid_size.1 as f32 + 2.0 * margin as f32;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {view_w} {view_h}" width="{}" height="{}">"#,
        view_w * config.scale,
        view_h * config.scale
    );
    if let Some(bg) = &config.background {
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{bg}"/>"#);
    }
    for (name, path) in result.paths() {
        if path.is_empty() {
            continue;
        }
        let style = config.style_for(name);
        let stroke = match &style.stroke {
            Some((color, width)) => format!(r#" stroke="{color}" stroke-width="{width}""#),
            None => String::new(),
        };
        let _ = writeln!(
            svg,
            r#"  <path class="{name}" fill="{}" fill-rule="nonzero"{stroke} d="{path}"/>"#,
            style.fill
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write an SVG document to disk.
pub fn write_svg(out_path: impl AsRef<Path>, document: &str) -> anyhow::Result<()> {
    let out_path = out_path.as_ref();
    std::fs::write(out_path, document)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!("Wrote {}", out_path.display());
    Ok(())
}

/// Load a one-pixel-per-module PNG. Pixels darker than `threshold` are filled.
pub fn load_bitmask_png(path: impl AsRef<Path>, threshold: u8) -> anyhow::Result<Bitmask> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("opening {}", path.display()))?
        .to_luma8();
    let (w, h) = img.dimensions();
    let grid = Bitmask::from_fn(w as usize, h as usize, |x, y| {
        img.get_pixel(x as u32, y as u32)[0] < threshold
    })?;
    info!(
        "Loaded {}x{} bitmask from {} ({} filled).",
        w,
        h,
        path.display(),
        grid.filled_count()
    );
    Ok(grid)
}
