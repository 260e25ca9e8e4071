//! Terrain surface interpolated under a normalized point cloud.
//!
//! Three stages, each a pure function of the previous one:
//! - [`idw::idw_heights`]: inverse distance weighted heights on a square lattice
//! - [`smooth::gaussian_smooth`]: Gaussian smoothing into a fresh field, clamped to the visual range
//! - [`mesh::build_buffers`]: vertex, colour and triangle index buffers
use glam::Vec3;
use tracing::debug;

use crate::error::Result;

pub mod config;
pub mod grid;
pub mod idw;
pub mod mesh;
pub mod smooth;

pub use config::{HeightRamp, TerrainConfig, MAX_RESOLUTION};
pub use grid::HeightField;
pub use mesh::{ramp_color, TerrainBuffers};

/// Build terrain buffers from visual-space positions (`x`, height, `z`).
///
/// Returns [`crate::error::Error::NoData`] for an empty position set and
/// [`crate::error::Error::InvalidConfig`] when `config` fails validation.
pub fn build_terrain(positions: &[Vec3], config: &TerrainConfig) -> Result<TerrainBuffers> {
    config.validate()?;

    let raw = idw::idw_heights(
        positions,
        config.resolution,
        config.idw_power,
        config.snap_epsilon,
    )?;
    let smoothed = smooth::gaussian_smooth(&raw, config.smoothing_radius);
    let buffers = mesh::build_buffers(&smoothed, &config.ramp);

    debug!(
        points = positions.len(),
        resolution = config.resolution,
        vertices = buffers.vertex_count(),
        triangles = buffers.triangle_count(),
        "terrain built"
    );
    Ok(buffers)
}
