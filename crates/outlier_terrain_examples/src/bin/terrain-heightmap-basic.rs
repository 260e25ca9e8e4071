use outlier_terrain::prelude::*;
use outlier_terrain_examples::{
    init_tracing, render_terrain_to_png, synthetic_catalogue, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = synthetic_catalogue(400, 7);

    // Rare coins (low survival, low population) pushed to the high end of x and z.
    let axes = AxisConfig::new_3d(
        AxisVariable::Survival,
        AxisVariable::ValueAtGrade,
        AxisVariable::PopulationAtGrade,
    );
    let request = ComputeRequest::new(axes)
        .with_invert(InvertConfig::new(true, false, true))
        .with_terrain(true)
        .with_terrain_config(TerrainConfig::new(48, 2.0));

    let result = compute(&points, &request)?;
    let terrain = match &result.terrain {
        TerrainOutcome::Built(buffers) => buffers,
        other => anyhow::bail!("expected terrain, got {other:?}"),
    };

    for p in result.top_outliers(5) {
        println!("{:>12}  score {:.3}", p.id, p.outlier_score);
    }

    render_terrain_to_png(
        &result,
        terrain,
        &RenderConfig::new((800, 800)),
        "terrain-heightmap-basic.png",
    )?;
    Ok(())
}
