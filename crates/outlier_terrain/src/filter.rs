//! Optional pre-selection of points before a compute pass.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::DataPoint;

/// Which points take part in a compute pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointFilter {
    #[default]
    All,
    /// Only points flagged as notable/key issues.
    NotableOnly,
}

impl PointFilter {
    pub fn accepts(&self, point: &DataPoint) -> bool {
        match self {
            PointFilter::All => true,
            PointFilter::NotableOnly => point.notable,
        }
    }

    /// Borrow the accepted points, preserving input order.
    pub fn apply<'a>(&self, points: &'a [DataPoint]) -> Vec<&'a DataPoint> {
        points.iter().filter(|p| self.accepts(p)).collect()
    }
}
