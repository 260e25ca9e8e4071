use std::time::Duration;

use criterion::{Criterion, Throughput};
use outlier_terrain::prelude::{AxisVariable, DataPoint};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Synthetic catalogue with heavy-tailed values, roughly one in ten flagged notable.
pub fn make_points(count: usize, seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let rarity = rng.random::<f32>();
            DataPoint::new(format!("P{i}"))
                .with_value(AxisVariable::Survival, rarity)
                .with_value(
                    AxisVariable::PopulationAtGrade,
                    (rarity * 5000.0).powf(1.3),
                )
                .with_value(
                    AxisVariable::ValueAtGrade,
                    10.0 / (rarity + 0.01) + rng.random::<f32>() * 50.0,
                )
                .with_value(AxisVariable::Mintage, 1.0e4 + rng.random::<f32>() * 1.0e8)
                .with_notable(rng.random::<f32>() < 0.1)
        })
        .collect()
}
