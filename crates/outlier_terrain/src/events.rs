//! Event types and sinks for observing compute passes.
//!
//! This module defines [`ComputeEvent`] and a set of sinks to collect or forward events
//! while running [`crate::pipeline::compute_with_events`].
use crate::axes::PlotMode;
use crate::pipeline::AxisSummary;

/// Describes events emitted during a compute pass.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum ComputeEvent {
    /// Emitted after filtering, before any axis is normalized.
    ComputeStarted {
        /// Points remaining after the filter.
        point_count: usize,
        mode: PlotMode,
        include_terrain: bool,
    },

    /// Emitted once per active axis.
    AxisNormalized { summary: AxisSummary },

    /// Emitted after composite scores were computed.
    PointsScored {
        count: usize,
        /// Highest composite score, or `None` for an empty set.
        max_score: Option<f32>,
    },

    /// Emitted when terrain buffers were produced.
    TerrainBuilt {
        resolution: usize,
        vertex_count: usize,
        triangle_count: usize,
    },

    /// Emitted when terrain was requested but there were no points.
    TerrainSkipped,

    /// Emitted when the pass finishes.
    ComputeFinished {
        point_count: usize,
        terrain_built: bool,
    },

    /// Non-fatal warning about degenerate input.
    Warning {
        /// Context string (e.g. the axis variable name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`ComputeEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: ComputeEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: ComputeEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(ComputeEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(ComputeEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(ComputeEvent),
{
    #[inline]
    fn send(&mut self, event: ComputeEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<ComputeEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<ComputeEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[ComputeEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: ComputeEvent) {
        self.events.push(event);
    }
}
