//! Min–max rescaling of raw axis values into visual space.
//!
//! Visual positions live in `[0, VISUAL_EXTENT]`. The same zero-range rule is reused by the
//! scorer for its `[0, 1]` sub-scores via [`scale_into`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound of the visual coordinate range on every axis.
pub const VISUAL_EXTENT: f32 = 10.0;

/// Observed raw bounds of one axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `max - min`, taken in `f64` so bounds near `f32::MAX` do not overflow.
    pub fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    /// Divisor used for rescaling; a zero span becomes `1.0`.
    #[inline]
    pub fn divisor(&self) -> f64 {
        let span = self.span();
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    /// Position of `v` within the range as a fraction in `[0, 1]`.
    #[inline]
    pub fn fraction(&self, v: f32) -> f32 {
        let t = (f64::from(v) - f64::from(self.min)) / self.divisor();
        (t as f32).clamp(0.0, 1.0)
    }

    /// Map a visual position back to raw units, for axis labels.
    pub fn denormalize(&self, visual: f32, inverted: bool) -> f32 {
        let mut t = (visual / VISUAL_EXTENT).clamp(0.0, 1.0);
        if inverted {
            t = 1.0 - t;
        }
        (f64::from(self.min) + f64::from(t) * self.span()) as f32
    }
}

/// Output of [`normalize_axis`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedAxis {
    /// Visual positions, parallel to the input.
    pub values: Vec<f32>,
    /// Observed finite bounds; `None` when no finite value was seen.
    pub range: Option<AxisRange>,
    /// Count of NaN/infinite inputs, which were pinned to the low end.
    pub non_finite: usize,
}

/// Bounds over the finite values of `values`.
pub fn observed_range(values: &[f32]) -> Option<AxisRange> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<AxisRange>, v| match acc {
            None => Some(AxisRange::new(v, v)),
            Some(r) => Some(AxisRange::new(r.min.min(v), r.max.max(v))),
        })
}

/// Rescale `values` into `[0, extent]` against `range`, flipping when `invert` is set.
///
/// Non-finite inputs map to the low end of the range before inversion.
pub fn scale_into(values: &[f32], range: AxisRange, invert: bool, extent: f32) -> Vec<f32> {
    values
        .iter()
        .map(|&v| {
            let t = if v.is_finite() {
                range.fraction(v)
            } else {
                0.0
            };
            let norm = t * extent;
            if invert {
                extent - norm
            } else {
                norm
            }
        })
        .collect()
}

/// Normalize one axis of raw values into `[0, VISUAL_EXTENT]`.
pub fn normalize_axis(values: &[f32], invert: bool) -> NormalizedAxis {
    if values.is_empty() {
        return NormalizedAxis::default();
    }

    let range = observed_range(values);
    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    let effective = range.unwrap_or(AxisRange::new(0.0, 0.0));
    if effective.span() == 0.0 {
        debug!(
            min = effective.min,
            count = values.len(),
            "zero-range axis, collapsing to a single position"
        );
    }

    NormalizedAxis {
        values: scale_into(values, effective, invert, VISUAL_EXTENT),
        range,
        non_finite,
    }
}
