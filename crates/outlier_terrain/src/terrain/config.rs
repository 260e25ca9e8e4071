//! Terrain builder parameters and the height colour ramp.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Endpoint colours for the linear height ramp, RGB in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightRamp {
    /// Colour at height 0.
    pub low: [f32; 3],
    /// Colour at the top of the visual range.
    pub high: [f32; 3],
}

impl Default for HeightRamp {
    fn default() -> Self {
        Self {
            low: [0.10, 0.18, 0.45],
            high: [0.95, 0.75, 0.20],
        }
    }
}

impl HeightRamp {
    pub fn new(low: [f32; 3], high: [f32; 3]) -> Self {
        Self { low, high }
    }
}

/// Largest accepted [`TerrainConfig::resolution`]; `65_535²` vertices still fit `u32` indices.
pub const MAX_RESOLUTION: usize = u16::MAX as usize;

/// Parameters for [`crate::terrain::build_terrain`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    /// Samples per side of the square grid.
    pub resolution: usize,
    /// Gaussian smoothing radius in grid cells. `0` disables smoothing.
    pub smoothing_radius: f32,
    /// Exponent applied to distances in the IDW weights.
    pub idw_power: f32,
    /// Distance below which a grid node snaps to a point's height.
    pub snap_epsilon: f32,
    pub ramp: HeightRamp,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            resolution: 40,
            smoothing_radius: 2.0,
            idw_power: 2.0,
            snap_epsilon: 1e-4,
            ramp: HeightRamp::default(),
        }
    }
}

impl TerrainConfig {
    /// Creates a new [`TerrainConfig`] with the given grid resolution and smoothing radius.
    pub fn new(resolution: usize, smoothing_radius: f32) -> Self {
        Self {
            resolution,
            smoothing_radius,
            ..Default::default()
        }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_smoothing_radius(mut self, radius: f32) -> Self {
        self.smoothing_radius = radius;
        self
    }

    pub fn with_idw_power(mut self, power: f32) -> Self {
        self.idw_power = power;
        self
    }

    pub fn with_snap_epsilon(mut self, epsilon: f32) -> Self {
        self.snap_epsilon = epsilon;
        self
    }

    pub fn with_ramp(mut self, ramp: HeightRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.resolution < 2 {
            return Err(Error::InvalidConfig("resolution must be >= 2".into()));
        }
        if self.resolution > MAX_RESOLUTION {
            return Err(Error::InvalidConfig(format!(
                "resolution must be <= {MAX_RESOLUTION}"
            )));
        }
        if !self.smoothing_radius.is_finite() || self.smoothing_radius < 0.0 {
            return Err(Error::InvalidConfig(
                "smoothing_radius must be finite and >= 0".into(),
            ));
        }
        if !self.idw_power.is_finite() || self.idw_power <= 0.0 {
            return Err(Error::InvalidConfig(
                "idw_power must be finite and > 0".into(),
            ));
        }
        if !self.snap_epsilon.is_finite() || self.snap_epsilon <= 0.0 {
            return Err(Error::InvalidConfig(
                "snap_epsilon must be finite and > 0".into(),
            ));
        }
        Ok(())
    }
}
