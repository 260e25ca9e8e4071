use outlier_terrain::prelude::*;
use outlier_terrain_examples::{init_tracing, synthetic_catalogue};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A catalogue with no notable issues, filtered to notable only.
    let points: Vec<DataPoint> = synthetic_catalogue(50, 11)
        .into_iter()
        .map(|p| p.with_notable(false))
        .collect();
    let axes = AxisConfig::new_3d(
        AxisVariable::Survival,
        AxisVariable::ValueAtGrade,
        AxisVariable::Mintage,
    );
    let request = ComputeRequest::new(axes)
        .with_filter(PointFilter::NotableOnly)
        .with_terrain(true);

    let mut sink = VecSink::new();
    let result = compute_with_events(&points, &request, &mut sink)?;
    match result.terrain {
        TerrainOutcome::NoData => println!("nothing to show: the selection is empty"),
        TerrainOutcome::Built(t) => println!("built {} vertices", t.vertex_count()),
        TerrainOutcome::NotRequested => println!("terrain not requested"),
    }
    println!("{} events observed", sink.len());
    Ok(())
}
