//! Height storage over the square terrain lattice.
//!
//! The lattice spans `[0, VISUAL_EXTENT]` on both the x and z axes with `resolution`
//! samples per side, including both edges. Values are stored row-major with z as the
//! row index.
use glam::Vec2;

use crate::normalize::VISUAL_EXTENT;

/// A `resolution × resolution` grid of heights.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    resolution: usize,
    pub data: Vec<f32>,
}

impl HeightField {
    /// Create a new field with every height at zero.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution,
            data: vec![0.0; resolution * resolution],
        }
    }

    /// Samples per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Visual-space coordinate of lattice index `i` along either axis.
    #[inline]
    pub fn node_coord(&self, i: usize) -> f32 {
        if self.resolution < 2 {
            return 0.0;
        }
        i as f32 * VISUAL_EXTENT / (self.resolution - 1) as f32
    }

    /// Visual-space `(x, z)` of the node at `(ix, iz)`.
    #[inline]
    pub fn node_position(&self, ix: usize, iz: usize) -> Vec2 {
        Vec2::new(self.node_coord(ix), self.node_coord(iz))
    }

    /// Flat index of `(ix, iz)`.
    #[inline]
    pub fn index(&self, ix: usize, iz: usize) -> usize {
        iz * self.resolution + ix
    }

    /// Height at `(ix, iz)`, or `None` outside the lattice.
    pub fn get(&self, ix: isize, iz: isize) -> Option<f32> {
        let n = self.resolution as isize;
        if ix < 0 || iz < 0 || ix >= n || iz >= n {
            return None;
        }
        Some(self.data[self.index(ix as usize, iz as usize)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_initializes_with_zeroes() {
        let field = HeightField::new(4);
        assert_eq!(field.len(), 16);
        assert!(field.data.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn node_coords_span_both_edges() {
        let field = HeightField::new(3);
        assert_eq!(field.node_coord(0), 0.0);
        assert_eq!(field.node_coord(1), 5.0);
        assert_eq!(field.node_coord(2), 10.0);
        assert_eq!(field.node_position(2, 1), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn get_returns_none_outside_bounds() {
        let mut field = HeightField::new(2);
        let i = field.index(1, 0);
        field.data[i] = 3.5;
        assert_eq!(field.get(1, 0), Some(3.5));
        assert_eq!(field.get(-1, 0), None);
        assert_eq!(field.get(0, 2), None);
    }
}
