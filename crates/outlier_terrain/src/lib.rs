#![forbid(unsafe_code)]
//! outlier_terrain: Multi-axis outlier scoring and IDW terrain interpolation for 3D scatter explorers.
//!
//! Modules:
//! - data, axes: input records, chartable variables, axis selection and inversion
//! - normalize: min–max rescaling into visual space
//! - score: composite per-point outlier scores
//! - terrain: IDW height field, Gaussian smoothing, mesh buffers
//! - pipeline: the single-pass `compute` entry point, with events for observation
pub mod axes;
pub mod data;
pub mod error;
pub mod events;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod score;
pub mod terrain;

/// Convenient re-exports for common types. Import with `use outlier_terrain::prelude::*;`.
pub mod prelude {
    pub use crate::axes::{AxisConfig, AxisSlot, InvertConfig, PlotMode};
    pub use crate::data::{extract_axis, AxisVariable, DataPoint};
    pub use crate::error::{Error, Result};
    pub use crate::events::{ComputeEvent, EventSink, FnSink, VecSink};
    pub use crate::filter::PointFilter;
    pub use crate::normalize::{normalize_axis, AxisRange, NormalizedAxis, VISUAL_EXTENT};
    pub use crate::pipeline::{
        compute, compute_with_events, AxisSummary, ComputeRequest, ComputeResult, ScoredPoint,
        TerrainOutcome, PLANE_CENTER,
    };
    pub use crate::score::{score_points, ScoreWeights};
    pub use crate::terrain::{
        build_terrain, ramp_color, HeightField, HeightRamp, TerrainBuffers, TerrainConfig,
        MAX_RESOLUTION,
    };
}
