use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use image::{Rgb, RgbImage};
use outlier_terrain::prelude::{ComputeResult, ScoredPoint, TerrainBuffers, VISUAL_EXTENT};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image settings.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub background: [u8; 3],
    /// Marker radius in pixels at score 0; grows with the score.
    pub base_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            background: [236, 238, 242],
            base_radius: 2,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_base_radius(mut self, radius: i32) -> Self {
        self.base_radius = radius.max(1);
        self
    }

    fn to_pixel(&self, u: f32, v: f32) -> (i32, i32) {
        let (w, h) = self.image_size;
        let x = (u / VISUAL_EXTENT * (w.saturating_sub(1)) as f32).round() as i32;
        // Image rows grow downwards.
        let y = ((1.0 - v / VISUAL_EXTENT) * (h.saturating_sub(1)) as f32).round() as i32;
        (x, y)
    }
}

/// Grey for unremarkable points, red for the most notable.
pub fn score_color(score: f32) -> [u8; 3] {
    let c = Vec3::new(0.55, 0.58, 0.62)
        .lerp(Vec3::new(0.85, 0.12, 0.12), score.clamp(0.0, 1.0));
    to_rgb8(c.to_array())
}

fn to_rgb8(c: [f32; 3]) -> [u8; 3] {
    c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn fill_disk(img: &mut RgbImage, (cx, cy): (i32, i32), radius: i32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}

fn draw_points(
    img: &mut RgbImage,
    points: &[ScoredPoint],
    config: &RenderConfig,
    top_down: bool,
) {
    let mut ordered: Vec<&ScoredPoint> = points.iter().collect();
    // Most notable last so they are drawn on top.
    ordered.sort_by(|a, b| a.outlier_score.total_cmp(&b.outlier_score));
    for p in ordered {
        let v = if top_down { p.visual_z } else { p.visual_y };
        let radius = config.base_radius + (p.outlier_score * 4.0).round() as i32;
        fill_disk(
            img,
            config.to_pixel(p.visual_x, v),
            radius,
            score_color(p.outlier_score),
        );
    }
}

/// Render the `x`/`y` scatter of a result with markers sized and coloured by score.
pub fn render_scatter_to_png(
    result: &ComputeResult,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    draw_points(&mut img, &result.points, config, false);
    save(&img, path.as_ref())
}

/// Render terrain as a top-down heightmap using its vertex colours, with points overlaid.
pub fn render_terrain_to_png(
    result: &ComputeResult,
    terrain: &TerrainBuffers,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let n = terrain.resolution;
    anyhow::ensure!(n >= 2, "terrain resolution must be >= 2");
    anyhow::ensure!(
        terrain.colors.len() >= n * n * 3,
        "terrain has {} colour components, expected {}",
        terrain.colors.len(),
        n * n * 3
    );

    for py in 0..h {
        for px in 0..w {
            // Nearest lattice node for this pixel.
            let u = px as f32 / (w.max(2) - 1) as f32;
            let v = 1.0 - py as f32 / (h.max(2) - 1) as f32;
            let ix = (u * (n - 1) as f32).round() as usize;
            let iz = (v * (n - 1) as f32).round() as usize;
            let i = (iz * n + ix) * 3;
            let rgb = [terrain.colors[i], terrain.colors[i + 1], terrain.colors[i + 2]];
            img.put_pixel(px, py, Rgb(to_rgb8(rgb)));
        }
    }

    draw_points(&mut img, &result.points, config, true);
    save(&img, path.as_ref())
}

fn save(img: &RgbImage, path: &Path) -> anyhow::Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "image written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixel_maps_visual_corners() {
        let rc = RenderConfig::new((101, 51));
        assert_eq!(rc.to_pixel(0.0, 0.0), (0, 50));
        assert_eq!(rc.to_pixel(10.0, 10.0), (100, 0));
    }

    #[test]
    fn score_color_spans_grey_to_red() {
        assert_eq!(score_color(0.0), [140, 148, 158]);
        assert_eq!(score_color(1.0), [217, 31, 31]);
    }
}
