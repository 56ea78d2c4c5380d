pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LabelConfig;

pub use crate::adapters::{BitsRenderer, JsonRenderer, LocalOutput, SvgRenderer};
pub use crate::core::checksum::{
    box_label_legend, complete_ean13, complete_ean8, compute_mod10_weighted13, ean_check_digit,
    pad_even, validate_ean8_check_digit,
};
pub use crate::core::ean::{encode_ean13, encode_ean8};
pub use crate::core::itf::encode_itf;
pub use crate::core::layout::layout;
pub use crate::core::{encoder::BarcodeEncoder, engine::LabelEngine};
pub use crate::domain::model::{
    BarLayout, BarPlacement, ChecksumMismatch, Element, ElementKind, EncodeRequest, Encoded,
    ModuleSequence, Symbology,
};
pub use crate::domain::ports::{RenderSettings, Renderer};
pub use crate::utils::error::{BarcodeError, Result};
