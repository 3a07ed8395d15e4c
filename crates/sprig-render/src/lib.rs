//! Sprig Render Library
//!
//! Headless render targets for Sprig widget trees: a recording draw list and
//! an SVG exporter built on top of it.

mod draw_list;
mod renderer;
mod svg;

pub use draw_list::{DrawCommand, DrawList};
pub use renderer::{RenderResult, RendererError};
pub use svg::SvgRenderer;
