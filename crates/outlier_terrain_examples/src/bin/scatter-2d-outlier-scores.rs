use outlier_terrain::prelude::*;
use outlier_terrain_examples::{
    init_tracing, render_scatter_to_png, synthetic_catalogue, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = synthetic_catalogue(600, 3);
    let axes = AxisConfig::new_2d(AxisVariable::Mintage, AxisVariable::ValueAtGrade);

    let mut sink = FnSink::new(|event| {
        if let ComputeEvent::AxisNormalized { summary } = event {
            println!(
                "{:?} <- {} (inverted: {}) range {:?}",
                summary.slot, summary.variable, summary.inverted, summary.range
            );
        }
    });

    // All coins, low mintage treated as notable.
    let all = ComputeRequest::new(axes).with_invert(InvertConfig::new(true, false, false));
    let result = compute_with_events(&points, &all, &mut sink)?;
    render_scatter_to_png(
        &result,
        &RenderConfig::new((900, 600)),
        "scatter-2d-outlier-scores-all.png",
    )?;

    // Key dates only: ranges are recomputed over the filtered set.
    let keys = all.with_filter(PointFilter::NotableOnly);
    let result = compute_with_events(&points, &keys, &mut sink)?;
    render_scatter_to_png(
        &result,
        &RenderConfig::new((900, 600)).with_base_radius(3),
        "scatter-2d-outlier-scores-keys.png",
    )?;
    Ok(())
}
