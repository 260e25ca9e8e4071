//! Composite outlier scoring.
//!
//! Each active axis gets a `[0, 1]` sub-score where `1.0` is the most notable end (the
//! top of the raw range, or the bottom when the axis is inverted). Sub-scores are then
//! blended with fixed weights that favour the `y` axis.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axes::{AxisConfig, AxisSlot, InvertConfig, PlotMode};
use crate::data::{extract_axis, DataPoint};
use crate::normalize::{observed_range, scale_into, AxisRange};

/// Per-axis blend weights for the composite score.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreWeights {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScoreWeights {
    /// Weights used when no `z` axis is charted.
    pub const TWO_D: ScoreWeights = ScoreWeights {
        x: 0.35,
        y: 0.65,
        z: 0.0,
    };

    /// Weights used when all three axes are charted.
    pub const THREE_D: ScoreWeights = ScoreWeights {
        x: 0.25,
        y: 0.50,
        z: 0.25,
    };

    pub fn for_mode(mode: PlotMode) -> Self {
        match mode {
            PlotMode::TwoD => Self::TWO_D,
            PlotMode::ThreeD => Self::THREE_D,
        }
    }

    pub fn sum(&self) -> f32 {
        self.x + self.y + self.z
    }

    /// Blend three sub-scores, clamped to `[0, 1]`.
    #[inline]
    pub fn blend(&self, x: f32, y: f32, z: f32) -> f32 {
        (self.x * x + self.y * y + self.z * z).clamp(0.0, 1.0)
    }
}

/// `[0, 1]` sub-scores for one axis; `1.0` is most notable.
pub fn axis_scores(values: &[f32], inverted: bool) -> Vec<f32> {
    if values.is_empty() {
        return Vec::new();
    }
    let range = observed_range(values).unwrap_or(AxisRange::new(0.0, 0.0));
    scale_into(values, range, inverted, 1.0)
}

/// Composite score per point for the given axes and inversion flags.
pub fn score_points<P: AsRef<DataPoint>>(
    points: &[P],
    axes: &AxisConfig,
    invert: &InvertConfig,
) -> Vec<f32> {
    if points.is_empty() {
        return Vec::new();
    }

    let weights = ScoreWeights::for_mode(axes.mode());
    let sub = |slot: AxisSlot| -> Option<Vec<f32>> {
        axes.variable(slot)
            .map(|var| axis_scores(&extract_axis(points, var), invert.is_inverted(slot)))
    };

    let xs = sub(AxisSlot::X).unwrap_or_default();
    let ys = sub(AxisSlot::Y).unwrap_or_default();
    let zs = sub(AxisSlot::Z);

    (0..points.len())
        .map(|i| {
            let z = zs.as_ref().map_or(0.0, |zs| zs[i]);
            weights.blend(xs[i], ys[i], z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AxisVariable;

    fn point(id: &str, survival: f32, value: f32, mintage: f32) -> DataPoint {
        DataPoint::new(id)
            .with_value(AxisVariable::Survival, survival)
            .with_value(AxisVariable::ValueAtGrade, value)
            .with_value(AxisVariable::Mintage, mintage)
    }

    fn axes_2d() -> AxisConfig {
        AxisConfig::new_2d(AxisVariable::Survival, AxisVariable::ValueAtGrade)
    }

    fn axes_3d() -> AxisConfig {
        AxisConfig::new_3d(
            AxisVariable::Survival,
            AxisVariable::ValueAtGrade,
            AxisVariable::Mintage,
        )
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((ScoreWeights::TWO_D.sum() - 1.0).abs() <= f32::EPSILON);
        assert!((ScoreWeights::THREE_D.sum() - 1.0).abs() <= f32::EPSILON);
        assert!(ScoreWeights::THREE_D.y > ScoreWeights::THREE_D.x);
        assert!(ScoreWeights::TWO_D.y > ScoreWeights::TWO_D.x);
    }

    #[test]
    fn empty_set_scores_nothing() {
        let points: Vec<DataPoint> = Vec::new();
        assert!(score_points(&points, &axes_2d(), &InvertConfig::default()).is_empty());
    }

    #[test]
    fn single_point_uses_zero_range_rule() {
        let points = vec![point("only", 5.0, 7.0, 1.0)];
        let plain = score_points(&points, &axes_2d(), &InvertConfig::default());
        assert_eq!(plain, vec![0.0]);

        let inv_x = score_points(&points, &axes_2d(), &InvertConfig::new(true, false, false));
        assert!((inv_x[0] - 0.35).abs() < 1e-6);

        let inv_both = score_points(&points, &axes_2d(), &InvertConfig::new(true, true, false));
        assert!((inv_both[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn two_d_blend_weights_y_most() {
        let points = vec![
            point("low", 0.0, 0.0, 0.0),
            point("high-x", 10.0, 0.0, 0.0),
            point("high-y", 0.0, 10.0, 0.0),
        ];
        let scores = score_points(&points, &axes_2d(), &InvertConfig::default());
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 0.35).abs() < 1e-6);
        assert!((scores[2] - 0.65).abs() < 1e-6);
    }

    #[test]
    fn three_d_blend_uses_z() {
        let points = vec![point("a", 0.0, 0.0, 0.0), point("b", 0.0, 0.0, 100.0)];
        let scores = score_points(&points, &axes_3d(), &InvertConfig::default());
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn inversion_flips_which_end_is_notable() {
        let points = vec![point("rare", 0.01, 5.0, 0.0), point("common", 0.9, 5.0, 0.0)];
        let scores = score_points(&points, &axes_2d(), &InvertConfig::new(true, false, false));
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let points: Vec<DataPoint> = (0..50)
            .map(|i| {
                let f = i as f32;
                point(&i.to_string(), (f * 7.3) % 11.0 - 5.0, f * f, 1.0e6 - f)
            })
            .collect();
        for invert in [
            InvertConfig::default(),
            InvertConfig::new(true, true, true),
            InvertConfig::new(false, true, false),
        ] {
            for axes in [axes_2d(), axes_3d()] {
                let scores = score_points(&points, &axes, &invert);
                assert_eq!(scores.len(), points.len());
                assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
            }
        }
    }

    #[test]
    fn extreme_raw_values_score_without_nan() {
        let axes = AxisConfig::new_2d(AxisVariable::Survival, AxisVariable::Mintage);
        let points = vec![
            point("floor", 0.0, 0.0, -3.0e38),
            point("mid", 0.0, 0.0, 0.0),
            point("ceiling", 0.0, 0.0, 3.0e38),
        ];
        let scores = score_points(&points, &axes, &InvertConfig::default());
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 0.325).abs() < 1e-6);
        assert!((scores[2] - 0.65).abs() < 1e-6);
    }

    #[test]
    fn same_variable_on_both_axes_is_allowed() {
        let axes = AxisConfig::new_2d(AxisVariable::Mintage, AxisVariable::Mintage);
        let points = vec![point("a", 0.0, 0.0, 1.0), point("b", 0.0, 0.0, 3.0)];
        let scores = score_points(&points, &axes, &InvertConfig::default());
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-6);
    }
}
