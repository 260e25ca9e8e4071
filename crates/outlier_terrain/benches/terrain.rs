mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use outlier_terrain::prelude::*;
use outlier_terrain::terrain::idw::idw_heights;
use outlier_terrain::terrain::smooth::gaussian_smooth;

const RESOLUTIONS: [usize; 4] = [16, 32, 64, 128];
const RADII: [f32; 4] = [0.0, 1.0, 2.0, 4.0];

fn positions(n: usize, seed: u64) -> Vec<Vec3> {
    let axes = AxisConfig::new_3d(
        AxisVariable::Survival,
        AxisVariable::ValueAtGrade,
        AxisVariable::Mintage,
    );
    let points = common::make_points(n, seed);
    let result = compute(&points, &ComputeRequest::new(axes)).expect("valid request");
    result
        .points
        .iter()
        .map(|p| Vec3::new(p.visual_x, p.visual_y, p.visual_z))
        .collect()
}

fn terrain_idw_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/idw");

    for &n in &[32usize, 256, 2048] {
        let pts = positions(n, 0xA11CE ^ n as u64);
        for &res in &RESOLUTIONS {
            group.throughput(common::elements_throughput(res * res));
            group.bench_with_input(
                BenchmarkId::new(format!("points_{n}"), res),
                &res,
                |b, &res| {
                    b.iter(|| black_box(idw_heights(&pts, res, 2.0, 1e-4).map(|f| f.len())));
                },
            );
        }
    }

    group.finish();
}

fn terrain_smooth_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/smooth");
    let pts = positions(256, 0x5EED);

    for &res in &RESOLUTIONS {
        let field = idw_heights(&pts, res, 2.0, 1e-4).expect("non-empty input");
        for &radius in &RADII {
            group.throughput(common::elements_throughput(res * res));
            group.bench_with_input(
                BenchmarkId::new(format!("radius_{radius:.1}"), res),
                &res,
                |b, _| {
                    b.iter(|| black_box(gaussian_smooth(&field, radius).len()));
                },
            );
        }
    }

    group.finish();
}

fn terrain_full_pass_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain/compute_full");
    let axes = AxisConfig::new_3d(
        AxisVariable::Survival,
        AxisVariable::ValueAtGrade,
        AxisVariable::PopulationAtGrade,
    );

    for &n in &[64usize, 1024] {
        let points = common::make_points(n, 0xFEED ^ n as u64);
        let request = ComputeRequest::new(axes)
            .with_invert(InvertConfig::new(true, false, true))
            .with_terrain(true)
            .with_terrain_config(TerrainConfig::new(40, 2.0));
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let result = compute(&points, &request).expect("valid request");
                black_box(result.terrain.buffers().map(|t| t.vertex_count()));
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = terrain_idw_benches, terrain_smooth_benches, terrain_full_pass_benches
}
criterion_main!(benches);
