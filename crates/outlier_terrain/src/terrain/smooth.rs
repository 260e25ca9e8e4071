//! Gaussian smoothing of a height field.
//!
//! Reads only from the source field and writes a fresh one, so the result does not depend
//! on visiting order.
use crate::normalize::VISUAL_EXTENT;
use crate::terrain::grid::HeightField;

/// Gaussian-weighted average of all nodes within `radius` lattice cells, clamped to
/// `[0, VISUAL_EXTENT]`.
///
/// Neighbours outside the lattice are skipped and the remaining weights renormalised.
/// A radius of `0` only clamps.
pub fn gaussian_smooth(source: &HeightField, radius: f32) -> HeightField {
    let n = source.resolution();
    let mut out = HeightField::new(n);

    if radius <= 0.0 {
        for (dst, src) in out.data.iter_mut().zip(&source.data) {
            *dst = src.clamp(0.0, VISUAL_EXTENT);
        }
        return out;
    }

    let kernel = gaussian_kernel(radius, n.saturating_sub(1));

    for iz in 0..n as isize {
        for ix in 0..n as isize {
            let mut sum = 0.0;
            let mut total = 0.0;
            for &(dx, dz, w) in &kernel {
                if let Some(h) = source.get(ix + dx, iz + dz) {
                    sum += w * h;
                    total += w;
                }
            }
            let i = out.index(ix as usize, iz as usize);
            out.data[i] = (sum / total).clamp(0.0, VISUAL_EXTENT);
        }
    }

    out
}

/// Offsets within `radius` and their weights `exp(-d² / 2r²)`, in row-major order.
///
/// Offsets are capped at `max_reach` cells per axis; anything further never lands on the
/// lattice.
fn gaussian_kernel(radius: f32, max_reach: usize) -> Vec<(isize, isize, f32)> {
    let reach = (radius.floor() as isize).min(max_reach as isize);
    let r_sq = radius * radius;
    let two_r_sq = 2.0 * r_sq;

    let mut kernel = Vec::new();
    for dz in -reach..=reach {
        for dx in -reach..=reach {
            let d_sq = (dx * dx + dz * dz) as f32;
            if d_sq <= r_sq {
                kernel.push((dx, dz, (-d_sq / two_r_sq).exp()));
            }
        }
    }
    kernel
}
