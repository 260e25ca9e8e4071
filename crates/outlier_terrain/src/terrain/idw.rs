//! Inverse distance weighted height field.
//!
//! Every lattice node gets `Σ(wᵢ·hᵢ) / Σwᵢ` with `wᵢ = 1 / dᵢ^power`, distances measured
//! in the x–z plane. A node closer than `epsilon` to a point takes that point's height
//! exactly, using the first such point in input order.
use glam::{Vec2, Vec3};
use tracing::debug;

use crate::error::{Error, Result};
use crate::terrain::grid::HeightField;

/// Interpolate heights from `positions` (`x`, height, `z`) onto a `resolution²` lattice.
///
/// Positions with a non-finite component are ignored. Returns [`Error::NoData`] when no
/// usable position remains.
pub fn idw_heights(
    positions: &[Vec3],
    resolution: usize,
    power: f32,
    epsilon: f32,
) -> Result<HeightField> {
    let samples: Vec<(Vec2, f32)> = positions
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| (Vec2::new(p.x, p.z), p.y))
        .collect();
    if samples.is_empty() {
        return Err(Error::NoData);
    }
    if samples.len() < positions.len() {
        debug!(
            skipped = positions.len() - samples.len(),
            "ignoring non-finite terrain inputs"
        );
    }

    let eps_sq = epsilon * epsilon;
    let half_power = power * 0.5;
    let mut field = HeightField::new(resolution);

    for iz in 0..resolution {
        for ix in 0..resolution {
            let node = field.node_position(ix, iz);
            let i = field.index(ix, iz);
            field.data[i] = interpolate_at(node, &samples, eps_sq, half_power);
        }
    }

    Ok(field)
}

fn interpolate_at(node: Vec2, samples: &[(Vec2, f32)], eps_sq: f32, half_power: f32) -> f32 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    let mut nearest = (f32::INFINITY, samples[0].1);

    for &(pos, height) in samples {
        let d_sq = pos.distance_squared(node);
        if d_sq < eps_sq {
            return height;
        }
        if d_sq < nearest.0 {
            nearest = (d_sq, height);
        }
        // d^p == (d²)^(p/2); for p = 2 this is exactly 1/d².
        let w = 1.0 / d_sq.powf(half_power);
        weighted += w * height;
        total += w;
    }

    if total > 0.0 && total.is_finite() {
        weighted / total
    } else {
        // Weights underflowed (very large power); fall back to the nearest sample.
        nearest.1
    }
}
