// Adapters layer: concrete renderers and output targets for encoded barcodes.

pub mod storage;
pub mod svg;
pub mod text;

pub use storage::LocalOutput;
pub use svg::SvgRenderer;
pub use text::{BitsRenderer, JsonRenderer};
