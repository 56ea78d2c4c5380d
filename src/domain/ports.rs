use crate::domain::model::Encoded;
use crate::utils::error::Result;

/// Print geometry settings shared by renderers. Implemented by the TOML
/// config and the CLI arguments.
pub trait RenderSettings {
    /// Quiet zone on each side, in modules.
    fn quiet_zone(&self) -> u32;
    /// Multiplier applied to spaces only; 1.0 leaves the symbol untouched.
    fn space_scale(&self) -> f64;
    /// Pixels per module.
    fn module_width(&self) -> u32;
    fn bar_height(&self) -> u32;
    fn show_text(&self) -> bool;
}

pub trait Renderer {
    type Output;

    fn render(&self, encoded: &Encoded) -> Result<Self::Output>;
}
