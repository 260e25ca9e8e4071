//! Input data model: coin records and the closed set of chartable attributes.
//!
//! A [`DataPoint`] carries one value per [`AxisVariable`]. Resolving a variable on a
//! point is an exhaustive `match`, so there is no runtime "unknown axis" path once a
//! variable has been constructed. String names are only accepted at the parsing
//! boundary via [`std::str::FromStr`].
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A chartable numeric attribute of a [`DataPoint`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisVariable {
    /// Estimated surviving population of the issue.
    Survival,
    /// Number of graded examples at the point's grade.
    PopulationAtGrade,
    /// Market value at the point's grade.
    ValueAtGrade,
    /// Original mintage.
    Mintage,
}

impl AxisVariable {
    /// Every variable, in declaration order.
    pub const ALL: [AxisVariable; 4] = [
        AxisVariable::Survival,
        AxisVariable::PopulationAtGrade,
        AxisVariable::ValueAtGrade,
        AxisVariable::Mintage,
    ];

    /// Attribute name as used by upstream records and UI selectors.
    pub fn name(self) -> &'static str {
        match self {
            AxisVariable::Survival => "survival",
            AxisVariable::PopulationAtGrade => "population-at-grade",
            AxisVariable::ValueAtGrade => "value-at-grade",
            AxisVariable::Mintage => "mintage",
        }
    }
}

impl fmt::Display for AxisVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisVariable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        AxisVariable::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownAxis { name: s.to_owned() })
    }
}

/// A single record to be charted. Owned by the caller and borrowed read-only by the engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataPoint {
    /// Opaque identity, echoed back on every scored point.
    pub id: String,
    pub survival: f32,
    pub population_at_grade: f32,
    pub value_at_grade: f32,
    pub mintage: f32,
    /// Key/notable flag, only consulted by [`crate::filter::PointFilter`].
    pub notable: bool,
}

impl DataPoint {
    /// Create a point with all attributes at zero.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set one attribute.
    pub fn with_value(mut self, variable: AxisVariable, value: f32) -> Self {
        *self.slot_mut(variable) = value;
        self
    }

    /// Set the notable flag.
    pub fn with_notable(mut self, notable: bool) -> Self {
        self.notable = notable;
        self
    }

    /// Resolve `variable` on this point.
    #[inline]
    pub fn value(&self, variable: AxisVariable) -> f32 {
        match variable {
            AxisVariable::Survival => self.survival,
            AxisVariable::PopulationAtGrade => self.population_at_grade,
            AxisVariable::ValueAtGrade => self.value_at_grade,
            AxisVariable::Mintage => self.mintage,
        }
    }

    fn slot_mut(&mut self, variable: AxisVariable) -> &mut f32 {
        match variable {
            AxisVariable::Survival => &mut self.survival,
            AxisVariable::PopulationAtGrade => &mut self.population_at_grade,
            AxisVariable::ValueAtGrade => &mut self.value_at_grade,
            AxisVariable::Mintage => &mut self.mintage,
        }
    }
}

/// Collect `variable` across `points`, preserving order.
pub fn extract_axis<P: AsRef<DataPoint>>(points: &[P], variable: AxisVariable) -> Vec<f32> {
    points
        .iter()
        .map(|p| p.as_ref().value(variable))
        .collect()
}

impl AsRef<DataPoint> for DataPoint {
    fn as_ref(&self) -> &DataPoint {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin() -> DataPoint {
        DataPoint::new("1909-S VDB")
            .with_value(AxisVariable::Survival, 0.12)
            .with_value(AxisVariable::PopulationAtGrade, 340.0)
            .with_value(AxisVariable::ValueAtGrade, 1850.0)
            .with_value(AxisVariable::Mintage, 484_000.0)
            .with_notable(true)
    }

    #[test]
    fn value_maps_every_variable_to_its_own_attribute() {
        let p = coin();
        assert_eq!(p.value(AxisVariable::Survival), 0.12);
        assert_eq!(p.value(AxisVariable::PopulationAtGrade), 340.0);
        assert_eq!(p.value(AxisVariable::ValueAtGrade), 1850.0);
        assert_eq!(p.value(AxisVariable::Mintage), 484_000.0);
        assert!(p.notable);
    }

    #[test]
    fn with_value_round_trips_through_value() {
        for (i, var) in AxisVariable::ALL.into_iter().enumerate() {
            let p = DataPoint::new("x").with_value(var, i as f32 + 1.5);
            assert_eq!(p.value(var), i as f32 + 1.5);
        }
    }

    #[test]
    fn names_parse_back_to_variables() {
        for var in AxisVariable::ALL {
            assert_eq!(var.name().parse::<AxisVariable>().unwrap(), var);
            assert_eq!(var.to_string(), var.name());
        }
        assert_eq!(
            " Value-At-Grade ".parse::<AxisVariable>().unwrap(),
            AxisVariable::ValueAtGrade
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "rarity".parse::<AxisVariable>().unwrap_err();
        assert!(matches!(err, Error::UnknownAxis { ref name } if name == "rarity"));
    }

    #[test]
    fn extract_axis_preserves_order() {
        let points = vec![
            DataPoint::new("a").with_value(AxisVariable::Mintage, 3.0),
            DataPoint::new("b").with_value(AxisVariable::Mintage, 1.0),
        ];
        assert_eq!(extract_axis(&points, AxisVariable::Mintage), vec![3.0, 1.0]);

        let borrowed: Vec<&DataPoint> = points.iter().collect();
        assert_eq!(
            extract_axis(&borrowed, AxisVariable::Mintage),
            vec![3.0, 1.0]
        );
    }
}
