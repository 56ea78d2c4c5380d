use crate::utils::error::{BarcodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Barcode symbologies supported by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "EAN8")]
    Ean8,
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbology::Itf => "ITF",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
        };
        f.write_str(name)
    }
}

impl FromStr for Symbology {
    type Err = BarcodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "itf" | "i2of5" | "interleaved2of5" => Ok(Symbology::Itf),
            "ean13" | "ean-13" => Ok(Symbology::Ean13),
            "ean8" | "ean-8" => Ok(Symbology::Ean8),
            _ => Err(BarcodeError::UnknownSymbology {
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Bar,
    Space,
}

/// One bar or space, `width` in modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub width: u8,
}

impl Element {
    pub fn bar(width: u8) -> Self {
        Self {
            kind: ElementKind::Bar,
            width,
        }
    }

    pub fn space(width: u8) -> Self {
        Self {
            kind: ElementKind::Space,
            width,
        }
    }

    pub fn is_bar(&self) -> bool {
        self.kind == ElementKind::Bar
    }
}

/// Encoder output: ordered bars and spaces plus the quiet zone kept clear on
/// both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSequence {
    pub elements: Vec<Element>,
    pub quiet_zone: u32,
}

impl ModuleSequence {
    pub fn new(quiet_zone: u32) -> Self {
        Self {
            elements: Vec::new(),
            quiet_zone,
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Appends one width-1 element per character of a `0`/`1` pattern.
    pub fn push_bits(&mut self, bits: &str) {
        for bit in bits.bytes() {
            let element = if bit == b'1' {
                Element::bar(1)
            } else {
                Element::space(1)
            };
            self.elements.push(element);
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Symbol width in modules, quiet zone excluded.
    pub fn total_modules(&self) -> u32 {
        self.elements.iter().map(|e| u32::from(e.width)).sum()
    }

    pub fn bar_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_bar()).count()
    }

    /// Expands every element into `width` copies of `1` (bar) or `0` (space).
    pub fn bits(&self) -> String {
        let mut out = String::with_capacity(self.total_modules() as usize);
        for element in &self.elements {
            let bit = if element.is_bar() { '1' } else { '0' };
            for _ in 0..element.width {
                out.push(bit);
            }
        }
        out
    }

    pub fn widths(&self) -> Vec<u8> {
        self.elements.iter().map(|e| e.width).collect()
    }
}

/// The embedded EAN-13 check digit differs from the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumMismatch {
    pub expected: u8,
    pub found: u8,
}

/// Successful encode result; may carry a non-fatal checksum mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoded {
    pub symbology: Symbology,
    pub payload: String,
    pub sequence: ModuleSequence,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub checksum_mismatch: Option<ChecksumMismatch>,
}

impl Encoded {
    pub fn has_warnings(&self) -> bool {
        self.checksum_mismatch.is_some()
    }

    /// 嚴格模式：校驗碼不符時直接視為錯誤
    pub fn into_strict(self) -> Result<Self> {
        match self.checksum_mismatch {
            Some(ChecksumMismatch { expected, found }) => {
                Err(BarcodeError::ChecksumMismatch { expected, found })
            }
            None => Ok(self),
        }
    }
}

/// Request shape accepted from a front end: `{ "symbology": "EAN13", "payload": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub symbology: Symbology,
    pub payload: String,
}

/// Horizontal placement of one bar produced by the layout helper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPlacement {
    pub x: f64,
    pub width: f64,
}

/// Bars positioned on the x axis, in module units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLayout {
    pub bars: Vec<BarPlacement>,
    pub total_width: f64,
}
