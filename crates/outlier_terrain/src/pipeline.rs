//! Single-pass pipeline: filter, normalize, score and optionally build terrain.
//!
//! [`compute`] is a pure function of its inputs. Callers re-run it whenever the point set,
//! axis selection, inversion flags or filter change; nothing is cached between calls.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::axes::{AxisConfig, AxisSlot, InvertConfig, PlotMode};
use crate::data::{extract_axis, AxisVariable, DataPoint};
use crate::error::{Error, Result};
use crate::events::{ComputeEvent, EventSink};
use crate::filter::PointFilter;
use crate::normalize::{normalize_axis, AxisRange, VISUAL_EXTENT};
use crate::score::score_points;
use crate::terrain::{build_terrain, TerrainBuffers, TerrainConfig};

/// Visual `z` assigned to every point when no `z` axis is charted.
pub const PLANE_CENTER: f32 = VISUAL_EXTENT * 0.5;

/// A point positioned in visual space with its composite score.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredPoint {
    pub id: String,
    pub visual_x: f32,
    pub visual_y: f32,
    pub visual_z: f32,
    /// Composite score in `[0, 1]`; higher is more notable.
    pub outlier_score: f32,
}

impl ScoredPoint {
    /// Visual-space position `(x, y, z)`.
    pub fn position(&self) -> mint::Vector3<f32> {
        Vec3::new(self.visual_x, self.visual_y, self.visual_z).into()
    }
}

/// What happened to one active axis during a pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSummary {
    pub slot: AxisSlot,
    pub variable: AxisVariable,
    pub inverted: bool,
    /// Observed raw bounds; `None` when the axis had no finite values.
    pub range: Option<AxisRange>,
}

/// Terrain part of a [`ComputeResult`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum TerrainOutcome {
    /// The request did not ask for terrain.
    NotRequested,
    /// Terrain was requested but there were no points to interpolate.
    NoData,
    Built(TerrainBuffers),
}

impl TerrainOutcome {
    pub fn buffers(&self) -> Option<&TerrainBuffers> {
        match self {
            TerrainOutcome::Built(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, TerrainOutcome::NoData)
    }
}

/// Inputs for one compute pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ComputeRequest {
    pub axes: AxisConfig,
    pub invert: InvertConfig,
    /// Whether to build terrain buffers.
    pub include_terrain: bool,
    pub filter: PointFilter,
    pub terrain: TerrainConfig,
}

impl ComputeRequest {
    /// Creates a new [`ComputeRequest`] for `axes` with no inversion, no terrain and no filter.
    pub fn new(axes: AxisConfig) -> Self {
        Self {
            axes,
            invert: InvertConfig::default(),
            include_terrain: false,
            filter: PointFilter::All,
            terrain: TerrainConfig::default(),
        }
    }

    pub fn with_invert(mut self, invert: InvertConfig) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_terrain(mut self, include: bool) -> Self {
        self.include_terrain = include;
        self
    }

    pub fn with_filter(mut self, filter: PointFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_terrain_config(mut self, config: TerrainConfig) -> Self {
        self.terrain = config;
        self
    }

    /// Validates the request. Terrain settings are only checked when terrain is requested.
    pub fn validate(&self) -> Result<()> {
        if self.include_terrain {
            self.terrain.validate()?;
        }
        Ok(())
    }
}

/// Output of one compute pass.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ComputeResult {
    pub mode: PlotMode,
    /// One entry per accepted input point, in input order.
    pub points: Vec<ScoredPoint>,
    /// One entry per active axis, in x, y, z order.
    pub axes: Vec<AxisSummary>,
    pub terrain: TerrainOutcome,
}

impl ComputeResult {
    pub fn axis(&self, slot: AxisSlot) -> Option<&AxisSummary> {
        self.axes.iter().find(|a| a.slot == slot)
    }

    /// The `n` highest-scoring points. Ties keep input order.
    pub fn top_outliers(&self, n: usize) -> Vec<&ScoredPoint> {
        let mut ranked: Vec<&ScoredPoint> = self.points.iter().collect();
        ranked.sort_by(|a, b| b.outlier_score.total_cmp(&a.outlier_score));
        ranked.truncate(n);
        ranked
    }
}

/// Run a compute pass over `points`.
pub fn compute(points: &[DataPoint], request: &ComputeRequest) -> Result<ComputeResult> {
    compute_with_events(points, request, &mut ())
}

/// Run a compute pass, reporting progress to `sink`.
pub fn compute_with_events(
    points: &[DataPoint],
    request: &ComputeRequest,
    sink: &mut dyn EventSink,
) -> Result<ComputeResult> {
    request.validate()?;

    let selected = request.filter.apply(points);
    let mode = request.axes.mode();
    info!(
        points = selected.len(),
        filtered_out = points.len() - selected.len(),
        ?mode,
        terrain = request.include_terrain,
        "compute started"
    );
    sink.send(ComputeEvent::ComputeStarted {
        point_count: selected.len(),
        mode,
        include_terrain: request.include_terrain,
    });

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut zs = None;
    let mut summaries = Vec::with_capacity(3);

    for (slot, variable) in request.axes.active() {
        let inverted = request.invert.is_inverted(slot);
        let normalized = normalize_axis(&extract_axis(&selected, variable), inverted);

        if normalized.non_finite > 0 {
            let message = format!(
                "{} non-finite value(s) pinned to the low end",
                normalized.non_finite
            );
            warn!(%variable, ?slot, "{message}");
            sink.send(ComputeEvent::Warning {
                context: variable.to_string(),
                message,
            });
        }

        let summary = AxisSummary {
            slot,
            variable,
            inverted,
            range: normalized.range,
        };
        debug!(?slot, %variable, inverted, range = ?summary.range, "axis normalized");
        sink.send(ComputeEvent::AxisNormalized {
            summary: summary.clone(),
        });
        summaries.push(summary);

        match slot {
            AxisSlot::X => xs = normalized.values,
            AxisSlot::Y => ys = normalized.values,
            AxisSlot::Z => zs = Some(normalized.values),
        }
    }

    let scores = score_points(&selected, &request.axes, &request.invert);
    let scored: Vec<ScoredPoint> = selected
        .iter()
        .enumerate()
        .map(|(i, p)| ScoredPoint {
            id: p.id.clone(),
            visual_x: xs[i],
            visual_y: ys[i],
            visual_z: zs.as_ref().map_or(PLANE_CENTER, |z: &Vec<f32>| z[i]),
            outlier_score: scores[i],
        })
        .collect();
    sink.send(ComputeEvent::PointsScored {
        count: scored.len(),
        max_score: scores.iter().copied().fold(None, |acc: Option<f32>, s| {
            Some(acc.map_or(s, |m| m.max(s)))
        }),
    });

    let terrain = if request.include_terrain {
        let positions: Vec<Vec3> = scored
            .iter()
            .map(|p| Vec3::new(p.visual_x, p.visual_y, p.visual_z))
            .collect();
        match build_terrain(&positions, &request.terrain) {
            Ok(buffers) => {
                sink.send(ComputeEvent::TerrainBuilt {
                    resolution: buffers.resolution,
                    vertex_count: buffers.vertex_count(),
                    triangle_count: buffers.triangle_count(),
                });
                TerrainOutcome::Built(buffers)
            }
            Err(Error::NoData) => {
                warn!("terrain requested without any points");
                sink.send(ComputeEvent::TerrainSkipped);
                TerrainOutcome::NoData
            }
            Err(e) => return Err(e),
        }
    } else {
        TerrainOutcome::NotRequested
    };

    let result = ComputeResult {
        mode,
        points: scored,
        axes: summaries,
        terrain,
    };
    info!(
        points = result.points.len(),
        terrain_built = result.terrain.buffers().is_some(),
        "compute finished"
    );
    sink.send(ComputeEvent::ComputeFinished {
        point_count: result.points.len(),
        terrain_built: result.terrain.buffers().is_some(),
    });
    Ok(result)
}
