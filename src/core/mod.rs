pub mod checksum;
pub mod ean;
pub mod encoder;
pub mod engine;
pub mod itf;
pub mod layout;
pub mod tables;

pub use crate::domain::model::{
    BarLayout, BarPlacement, ChecksumMismatch, Element, ElementKind, EncodeRequest, Encoded,
    ModuleSequence, Symbology,
};
pub use crate::domain::ports::{RenderSettings, Renderer};
pub use crate::utils::error::Result;
