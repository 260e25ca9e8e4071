//! Axis selection and per-axis inversion flags.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::AxisVariable;

/// One of the three visual axis slots.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSlot {
    X,
    Y,
    Z,
}

/// Whether a compute pass charts two or three axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotMode {
    TwoD,
    ThreeD,
}

/// Variables assigned to the visual axes. A missing `z` selects [`PlotMode::TwoD`].
///
/// `x == y` is allowed; the normalizer handles the resulting degenerate ranges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisConfig {
    pub x: AxisVariable,
    pub y: AxisVariable,
    pub z: Option<AxisVariable>,
}

impl AxisConfig {
    /// Two-axis configuration.
    pub fn new_2d(x: AxisVariable, y: AxisVariable) -> Self {
        Self { x, y, z: None }
    }

    /// Three-axis configuration.
    pub fn new_3d(x: AxisVariable, y: AxisVariable, z: AxisVariable) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn mode(&self) -> PlotMode {
        if self.z.is_some() {
            PlotMode::ThreeD
        } else {
            PlotMode::TwoD
        }
    }

    /// Variable bound to `slot`, if that slot is active.
    pub fn variable(&self, slot: AxisSlot) -> Option<AxisVariable> {
        match slot {
            AxisSlot::X => Some(self.x),
            AxisSlot::Y => Some(self.y),
            AxisSlot::Z => self.z,
        }
    }

    /// Active slots with their variables, in x, y, z order.
    pub fn active(&self) -> impl Iterator<Item = (AxisSlot, AxisVariable)> + '_ {
        [AxisSlot::X, AxisSlot::Y, AxisSlot::Z]
            .into_iter()
            .filter_map(|slot| self.variable(slot).map(|v| (slot, v)))
    }
}

/// Per-slot "low raw values map to high visual position" flags.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvertConfig {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl InvertConfig {
    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    pub fn is_inverted(&self, slot: AxisSlot) -> bool {
        match slot {
            AxisSlot::X => self.x,
            AxisSlot::Y => self.y,
            AxisSlot::Z => self.z,
        }
    }
}
