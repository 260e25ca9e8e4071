//! Flat vertex, colour and index buffers for a height field.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::normalize::VISUAL_EXTENT;
use crate::terrain::config::HeightRamp;
use crate::terrain::grid::HeightField;

/// Render-ready terrain mesh.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainBuffers {
    /// `x, height, z` per lattice node, row-major with z as the row.
    pub vertices: Vec<f32>,
    /// `r, g, b` per vertex.
    pub colors: Vec<f32>,
    /// Two counter-clockwise (seen from +y) triangles per lattice cell.
    pub indices: Vec<u32>,
    /// Samples per side.
    pub resolution: usize,
}

impl TerrainBuffers {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex `i` as a vector.
    pub fn vertex(&self, i: usize) -> Option<mint::Vector3<f32>> {
        let v = self.vertices.get(i * 3..i * 3 + 3)?;
        Some(Vec3::new(v[0], v[1], v[2]).into())
    }
}

/// Colour for `height` on the ramp, interpolating linearly by `height / VISUAL_EXTENT`.
#[inline]
pub fn ramp_color(ramp: &HeightRamp, height: f32) -> [f32; 3] {
    let t = (height / VISUAL_EXTENT).clamp(0.0, 1.0);
    Vec3::from(ramp.low).lerp(Vec3::from(ramp.high), t).to_array()
}

/// Emit buffers for `field`.
///
/// Indices are `u32`, so the field's resolution must not exceed
/// [`crate::terrain::config::MAX_RESOLUTION`].
pub fn build_buffers(field: &HeightField, ramp: &HeightRamp) -> TerrainBuffers {
    let n = field.resolution();
    let mut vertices = Vec::with_capacity(n * n * 3);
    let mut colors = Vec::with_capacity(n * n * 3);

    for iz in 0..n {
        for ix in 0..n {
            let h = field.data[field.index(ix, iz)];
            vertices.extend_from_slice(&[field.node_coord(ix), h, field.node_coord(iz)]);
            colors.extend_from_slice(&ramp_color(ramp, h));
        }
    }

    let cells = n.saturating_sub(1);
    let mut indices = Vec::with_capacity(cells * cells * 6);
    for iz in 0..cells {
        for ix in 0..cells {
            let a = (iz * n + ix) as u32;
            let b = a + 1;
            let c = a + n as u32;
            let d = c + 1;
            indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    TerrainBuffers {
        vertices,
        colors,
        indices,
        resolution: n,
    }
}
