#![forbid(unsafe_code)]

mod catalogue;
mod rendering;

pub use catalogue::synthetic_catalogue;
pub use rendering::{
    init_tracing, render_scatter_to_png, render_terrain_to_png, score_color, RenderConfig,
};
