use outlier_terrain::prelude::*;
use outlier_terrain_examples::{
    init_tracing, render_terrain_to_png, synthetic_catalogue, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = synthetic_catalogue(150, 21);
    let axes = AxisConfig::new_3d(
        AxisVariable::Mintage,
        AxisVariable::ValueAtGrade,
        AxisVariable::Survival,
    );
    let ramp = HeightRamp::new([0.08, 0.30, 0.20], [0.98, 0.95, 0.85]);

    // Same data, increasing smoothing radius: 0 shows the raw IDW field.
    for radius in [0.0_f32, 1.5, 4.0] {
        let request = ComputeRequest::new(axes)
            .with_invert(InvertConfig::new(true, false, true))
            .with_terrain(true)
            .with_terrain_config(TerrainConfig::new(64, radius).with_ramp(ramp));
        let result = compute(&points, &request)?;
        let Some(terrain) = result.terrain.buffers() else {
            anyhow::bail!("no terrain for radius {radius}");
        };
        render_terrain_to_png(
            &result,
            terrain,
            &RenderConfig::new((640, 640)).with_base_radius(1),
            format!("terrain-smoothing-radius-{radius:.1}.png"),
        )?;
    }
    Ok(())
}
