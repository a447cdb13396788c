// Region highlights are drawn directly on the raster — no display-list or
// vector layer — because the interactive shell only ever shows the final
// composited image.

pub mod draw;
pub mod project;

pub use draw::draw_regions_on_page;
pub use project::PageScale;
